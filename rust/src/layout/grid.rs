//! Page-filling grid layout for apartment tables.
//!
//! Tables share one width and one height. They are placed left to right,
//! top to bottom, in a grid of at most `max_columns` columns. When the next
//! table would cross the bottom reserve, a new page starts and the grid
//! restarts at its first cell; a partially filled row is never continued.

use crate::config::PageGeometry;
use crate::models::ScheduleAssignment;

use super::types::{GridLayout, TablePlacement};

/// Base table height before adding space for date lines.
const TABLE_BASE_HEIGHT: f64 = 20.0;
/// Height added per date of the busiest apartment.
const TABLE_HEIGHT_PER_DATE: f64 = 6.0;

/// Number of columns for `apartment_count` tables.
pub fn column_count(apartment_count: usize, max_columns: usize) -> usize {
    apartment_count.min(max_columns)
}

/// Shared table height, sized for the apartment with the most dates.
pub fn table_height(max_dates: usize, geometry: &PageGeometry) -> f64 {
    (TABLE_BASE_HEIGHT + TABLE_HEIGHT_PER_DATE * max_dates as f64)
        .min(geometry.max_table_height)
        .max(geometry.min_table_height)
}

/// Grid cell with its top-left corner on the page.
struct Cell {
    column: usize,
    row: usize,
    x: f64,
    y: f64,
}

fn cell_at(slot: usize, columns: usize, width: f64, height: f64, geometry: &PageGeometry) -> Cell {
    let column = slot % columns;
    let row = slot / columns;
    Cell {
        column,
        row,
        x: geometry.margin + column as f64 * (width + geometry.column_gap),
        y: geometry.content_top + row as f64 * (height + geometry.row_gap),
    }
}

/// Lay out one table per apartment across as many pages as needed.
///
/// Placements follow the assignment's insertion order. An empty assignment
/// produces an empty layout. Geometry is trusted: a non-positive table width
/// is a configuration error and is not checked here.
pub fn compute_grid_layout<'a>(
    assignment: &'a ScheduleAssignment,
    geometry: &PageGeometry,
) -> GridLayout<'a> {
    let columns = column_count(assignment.len(), geometry.max_columns);
    if columns == 0 {
        return GridLayout::default();
    }

    let width = (geometry.usable_width() - geometry.gutter_width) / columns as f64;
    let height = table_height(assignment.max_dates(), geometry);
    let bottom = geometry.content_bottom();

    let mut placements = Vec::with_capacity(assignment.len());
    let mut page = 0;
    let mut slot = 0;

    for (apartment, dates) in assignment.iter() {
        let mut cell = cell_at(slot, columns, width, height, geometry);
        // A table that overflows an empty page is placed anyway
        if cell.y + height > bottom && slot > 0 {
            page += 1;
            slot = 0;
            cell = cell_at(slot, columns, width, height, geometry);
        }

        placements.push(TablePlacement {
            apartment,
            dates,
            x: cell.x,
            y: cell.y,
            width,
            height,
            page,
            column: cell.column,
            row: cell.row,
        });
        slot += 1;
    }

    GridLayout {
        columns,
        table_width: width,
        table_height: height,
        placements,
    }
}
