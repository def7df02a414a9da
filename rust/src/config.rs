//! Configuration types for schedule generation and PDF export.

use chrono::Weekday;

use crate::logging::VERBOSITY_SILENT;

/// Configuration for schedule generation.
#[derive(Clone, Debug)]
pub struct ScheduleConfig {
    /// Weekday on which duties recur
    pub weekday: Weekday,
    /// Logging verbosity (see `logging`)
    pub verbosity: u8,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            weekday: Weekday::Sun,
            verbosity: VERBOSITY_SILENT,
        }
    }
}

/// Physical page geometry for the exported document, in millimetres.
#[derive(Clone, Debug, PartialEq)]
pub struct PageGeometry {
    pub page_width: f64,
    pub page_height: f64,
    /// Left/right margin, also the x origin of the first column
    pub margin: f64,
    /// Lower clamp for the shared table height
    pub min_table_height: f64,
    /// Upper clamp for the shared table height
    pub max_table_height: f64,
    /// y of the first table row on every page (below the title)
    pub content_top: f64,
    /// Space kept free at the bottom of each page for the note
    pub bottom_reserve: f64,
    /// Horizontal space subtracted from the usable width before splitting into columns
    pub gutter_width: f64,
    /// Horizontal distance added between consecutive column origins
    pub column_gap: f64,
    /// Vertical distance between table rows
    pub row_gap: f64,
    /// Height of the table header including the space before the first date line
    pub header_height: f64,
    /// Height of one date line
    pub line_height: f64,
    /// Upper bound on the number of table columns
    pub max_columns: usize,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

impl PageGeometry {
    /// A4 portrait with a 15 mm margin.
    pub fn a4() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 15.0,
            min_table_height: 80.0,
            max_table_height: 120.0,
            content_top: 40.0,
            bottom_reserve: 60.0,
            gutter_width: 10.0,
            column_gap: 5.0,
            row_gap: 15.0,
            header_height: 18.0,
            line_height: 6.0,
            max_columns: 2,
        }
    }

    /// Width available between the left and right margins.
    pub fn usable_width(&self) -> f64 {
        self.page_width - self.margin * 2.0
    }

    /// Lowest y a table may reach before the page is considered full.
    pub fn content_bottom(&self) -> f64 {
        self.page_height - self.bottom_reserve
    }
}

/// Configuration for PDF export.
#[derive(Clone, Debug, Default)]
pub struct ExportConfig {
    pub geometry: PageGeometry,
    pub verbosity: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_defaults() {
        let geometry = PageGeometry::default();
        assert_eq!(geometry.page_width, 210.0);
        assert_eq!(geometry.page_height, 297.0);
        assert_eq!(geometry.usable_width(), 180.0);
        assert_eq!(geometry.content_bottom(), 237.0);
        assert_eq!(geometry.max_columns, 2);
    }

    #[test]
    fn test_schedule_config_defaults_to_sunday() {
        let config = ScheduleConfig::default();
        assert_eq!(config.weekday, Weekday::Sun);
        assert_eq!(config.verbosity, VERBOSITY_SILENT);
    }
}
