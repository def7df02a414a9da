//! PDF layout engine: places one fixed-size table per apartment on A4 pages.

mod grid;
mod types;

pub use grid::{column_count, compute_grid_layout, table_height};
pub use types::{max_date_lines, GridLayout, TablePlacement, TableRows};
