//! Schedule generation entry point.

use chrono::NaiveDate;
use thiserror::Error;

use crate::config::ScheduleConfig;
use crate::models::{ApartmentId, DateRange, Schedule};
use crate::{log_debug, log_detail, log_summary};

use super::recurrence::enumerate_recurrence_dates;
use super::rotation::assign_round_robin;

/// Errors that can occur while validating input or generating a schedule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Missing {0} date")]
    MissingDate(&'static str),
    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
    #[error("Start date {start} must be before end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("No apartments selected")]
    EmptySelection,
}

/// Generate the duty rotation for `apartments` over `range`.
///
/// Fails with `ScheduleError::EmptySelection` when no apartment is given.
pub fn generate_schedule(
    apartments: &[ApartmentId],
    range: DateRange,
    config: &ScheduleConfig,
) -> Result<Schedule, ScheduleError> {
    if apartments.is_empty() {
        return Err(ScheduleError::EmptySelection);
    }

    let verbosity = config.verbosity;
    let dates = enumerate_recurrence_dates(range.start(), range.end(), config.weekday);
    let total_occurrences = dates.len();
    for date in &dates {
        log_debug!(verbosity, "  Occurrence: {} ({})", date.date, date.label);
    }

    let assignment = assign_round_robin(apartments, dates);

    log_summary!(
        verbosity,
        "Schedule {} .. {}: {} apartments, {} dates",
        range.start(),
        range.end(),
        apartments.len(),
        total_occurrences
    );
    for (apartment, dates) in assignment.iter() {
        log_detail!(verbosity, "  Apartment {}: {} dates", apartment, dates.len());
    }

    Ok(Schedule::new(
        apartments.to_vec(),
        range,
        assignment,
        total_occurrences,
    ))
}
