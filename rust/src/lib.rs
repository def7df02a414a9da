//! Sunday stair-washing rotation for a building's apartments.
//!
//! Enumerates the Sundays of a date range, hands them out round robin in the
//! roster's order, and exports the result as a paginated A4 PDF with one
//! table per apartment. Python bindings are available behind the `python`
//! feature.

pub mod config;
pub mod layout;
pub mod logging;
pub mod models;
pub mod pdf;
pub mod roster;
pub mod scheduler;

#[cfg(feature = "python")]
mod python;

pub use config::{ExportConfig, PageGeometry, ScheduleConfig};
pub use layout::{compute_grid_layout, GridLayout, TablePlacement, TableRows};
pub use models::{
    ApartmentId, DateRange, RecurrenceDate, Schedule, ScheduleAssignment, ScheduleStats,
};
pub use pdf::{export_filename, export_pdf, render_document, write_pdf, ExportError};
pub use roster::{ApartmentRoster, MoveDirection, RosterEntry};
pub use scheduler::{
    assign_round_robin, enumerate_recurrence_dates, generate_schedule, parse_iso_date,
    sundays_in_range, validate_date_range, RangeValidation, RangeWarning, ScheduleError,
};
