//! Weekly recurrence date enumeration.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::models::RecurrenceDate;

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Long Spanish date label: "1 de junio de 2025".
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        MONTHS_ES[date.month0() as usize],
        date.year()
    )
}

/// Days to advance from `from` to reach the next `target` (0 if already there).
fn days_until(from: Weekday, target: Weekday) -> u64 {
    let from = from.num_days_from_sunday();
    let target = target.num_days_from_sunday();
    u64::from((target + 7 - from) % 7)
}

/// Collect every `weekday` in `[start, end]`, both ends inclusive, in ascending order.
///
/// Returns an empty list when `start > end` or no occurrence falls in range.
pub fn enumerate_recurrence_dates(
    start: NaiveDate,
    end: NaiveDate,
    weekday: Weekday,
) -> Vec<RecurrenceDate> {
    let mut dates = Vec::new();
    if start > end {
        return dates;
    }

    let mut current = start.checked_add_days(Days::new(days_until(start.weekday(), weekday)));
    while let Some(date) = current {
        if date > end {
            break;
        }
        dates.push(RecurrenceDate {
            date,
            label: format_long_date(date),
        });
        current = date.checked_add_days(Days::new(7));
    }

    dates
}

/// All Sundays in `[start, end]`.
pub fn sundays_in_range(start: NaiveDate, end: NaiveDate) -> Vec<RecurrenceDate> {
    enumerate_recurrence_dates(start, end, Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date(ymd(2025, 6, 1)), "1 de junio de 2025");
        assert_eq!(format_long_date(ymd(2025, 12, 28)), "28 de diciembre de 2025");
        assert_eq!(format_long_date(ymd(2026, 1, 4)), "4 de enero de 2026");
    }

    #[test]
    fn test_start_and_end_on_sunday_are_included() {
        let sundays = sundays_in_range(ymd(2025, 6, 1), ymd(2025, 6, 29));
        let days: Vec<u32> = sundays.iter().map(|d| d.date.day()).collect();
        assert_eq!(days, vec![1, 8, 15, 22, 29]);
        assert_eq!(sundays[0].label, "1 de junio de 2025");
        assert_eq!(sundays[4].label, "29 de junio de 2025");
    }

    #[test]
    fn test_advances_to_first_sunday() {
        // Tuesday 2025-06-03 -> first Sunday is 2025-06-08
        let sundays = sundays_in_range(ymd(2025, 6, 3), ymd(2025, 6, 20));
        let days: Vec<u32> = sundays.iter().map(|d| d.date.day()).collect();
        assert_eq!(days, vec![8, 15]);
    }

    #[test]
    fn test_no_sunday_in_range() {
        assert!(sundays_in_range(ymd(2025, 6, 3), ymd(2025, 6, 6)).is_empty());
    }

    #[test]
    fn test_reversed_range_is_empty() {
        assert!(sundays_in_range(ymd(2025, 6, 29), ymd(2025, 6, 1)).is_empty());
    }

    #[test]
    fn test_single_day_range() {
        let sundays = sundays_in_range(ymd(2025, 6, 1), ymd(2025, 6, 1));
        assert_eq!(sundays.len(), 1);
        assert!(sundays_in_range(ymd(2025, 6, 2), ymd(2025, 6, 2)).is_empty());
    }

    #[test]
    fn test_every_date_falls_on_weekday() {
        let start = ymd(2024, 1, 1);
        let end = ymd(2025, 12, 31);
        for weekday in [Weekday::Sun, Weekday::Wed, Weekday::Sat] {
            let dates = enumerate_recurrence_dates(start, end, weekday);
            assert!(!dates.is_empty());
            assert!(dates.iter().all(|d| d.date.weekday() == weekday));
            assert!(dates.windows(2).all(|w| (w[1].date - w[0].date).num_days() == 7));
        }
    }

    #[test]
    fn test_crosses_month_and_year() {
        let sundays = sundays_in_range(ymd(2025, 12, 20), ymd(2026, 1, 10));
        let labels: Vec<&str> = sundays.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["21 de diciembre de 2025", "28 de diciembre de 2025", "4 de enero de 2026"]
        );
    }

    #[test]
    fn test_calendar_end_does_not_panic() {
        let dates = sundays_in_range(NaiveDate::MAX - Days::new(20), NaiveDate::MAX);
        assert!(dates.len() <= 3);
    }
}
