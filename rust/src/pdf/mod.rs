//! PDF export of the schedule: one bordered table per apartment on A4 pages.

mod canvas;
mod fonts;
mod render;

pub use render::{export_filename, export_pdf, render_document, write_pdf, ExportError};
