//! Scheduler module: weekly recurrence enumeration and round-robin rotation.
//!
//! Dates are enumerated from a validated range, then handed out to the
//! apartments in the order given.

mod generate;
mod recurrence;
mod rotation;
mod validation;

pub use generate::{generate_schedule, ScheduleError};
pub use recurrence::{enumerate_recurrence_dates, format_long_date, sundays_in_range};
pub use rotation::assign_round_robin;
pub use validation::{parse_iso_date, validate_date_range, RangeValidation, RangeWarning};
