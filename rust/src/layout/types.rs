//! Types produced by the grid layout.

use crate::models::{ApartmentId, RecurrenceDate};

/// Position and size of one apartment table, in millimetres from the top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct TablePlacement<'a> {
    pub apartment: &'a ApartmentId,
    pub dates: &'a [RecurrenceDate],
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Zero-based page index
    pub page: usize,
    /// Grid cell on its page
    pub column: usize,
    pub row: usize,
}

impl<'a> TablePlacement<'a> {
    /// Split the dates into the lines that fit under the header and an elision flag.
    pub fn rows(&self, header_height: f64, line_height: f64) -> TableRows<'a> {
        let max_lines = max_date_lines(self.height, header_height, line_height);
        let dates: &'a [RecurrenceDate] = self.dates;
        TableRows {
            shown: &dates[..dates.len().min(max_lines)],
            truncated: dates.len() > max_lines,
            max_lines,
        }
    }
}

/// Number of date lines that fit below the header of a table.
pub fn max_date_lines(table_height: f64, header_height: f64, line_height: f64) -> usize {
    if line_height <= 0.0 {
        return 0;
    }
    ((table_height - header_height) / line_height).floor().max(0.0) as usize
}

/// Date lines of a table after truncation.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRows<'a> {
    pub shown: &'a [RecurrenceDate],
    /// More dates exist than lines; an ellipsis goes in slot `max_lines`
    pub truncated: bool,
    pub max_lines: usize,
}

/// Result of laying out all apartment tables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridLayout<'a> {
    pub columns: usize,
    pub table_width: f64,
    pub table_height: f64,
    /// One entry per apartment, in assignment order
    pub placements: Vec<TablePlacement<'a>>,
}

impl<'a> GridLayout<'a> {
    /// Number of pages the layout spans (0 when nothing was placed).
    pub fn page_count(&self) -> usize {
        self.placements.last().map_or(0, |p| p.page + 1)
    }

    pub fn placements_on(&self, page: usize) -> impl Iterator<Item = &TablePlacement<'a>> {
        self.placements.iter().filter(move |p| p.page == page)
    }
}
