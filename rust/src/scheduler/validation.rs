//! Date input parsing and range validation.

use chrono::NaiveDate;

use crate::models::DateRange;

use super::generate::ScheduleError;

/// Non-blocking condition found while validating a date range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeWarning {
    /// The range starts before the current date.
    StartsInPast,
}

/// A validated range plus any warnings raised while checking it.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeValidation {
    pub range: DateRange,
    pub warnings: Vec<RangeWarning>,
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, ScheduleError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| ScheduleError::InvalidDate(input.to_string()))
}

/// Check that both dates are present and `start` is strictly before `end`.
///
/// A start earlier than `today` only produces a warning.
pub fn validate_date_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<RangeValidation, ScheduleError> {
    let start = start.ok_or(ScheduleError::MissingDate("start"))?;
    let end = end.ok_or(ScheduleError::MissingDate("end"))?;

    if start >= end {
        return Err(ScheduleError::InvalidRange { start, end });
    }

    let mut warnings = Vec::new();
    if start < today {
        warnings.push(RangeWarning::StartsInPast);
    }

    Ok(RangeValidation {
        range: DateRange::new_unchecked(start, end),
        warnings,
    })
}
