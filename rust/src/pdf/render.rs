//! Serialization of the grid layout into a PDF document.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use lopdf::content::Content;
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use thiserror::Error;

use crate::config::{ExportConfig, PageGeometry};
use crate::layout::{compute_grid_layout, TablePlacement};
use crate::models::{DateRange, Schedule, ScheduleAssignment};
use crate::{log_detail, log_summary};

use super::canvas::{Align, PageCanvas, MM_TO_PT};
use super::fonts::{clip_text, wrap_text, FontStyle};

const TITLE: &str = "LAVADA DE ESCALAS";
const TITLE_Y: f64 = 20.0;
const TITLE_SIZE: f64 = 20.0;

const TABLE_HEADER_PREFIX: &str = "APARTAMENTO";
const TABLE_HEADER_SIZE: f64 = 12.0;
/// Height of the shaded band behind the table header
const HEADER_BAND_HEIGHT: f64 = 12.0;
/// Baseline of the header text below the table top
const HEADER_BASELINE: f64 = 8.0;
const HEADER_BAND_GRAY: u8 = 240;
const BORDER_WIDTH: f64 = 0.5;
const SEPARATOR_WIDTH: f64 = 0.3;

const DATE_SIZE: f64 = 9.0;
const DATE_INSET: f64 = 4.0;
const STRIPE_GRAY: u8 = 250;
const TRUNCATION_MARKER: &str = "...";

const NOTE_HEADING: &str = "Nota:";
const NOTE_TEXT: &str = "Mantener las escalas aseadas nos beneficia a todos. Muchas gracias";
/// Distance of the note heading above the page bottom
const NOTE_FROM_BOTTOM: f64 = 40.0;
const NOTE_HEADING_SIZE: f64 = 12.0;
const NOTE_TEXT_SIZE: f64 = 10.0;
const NOTE_TEXT_GAP: f64 = 6.0;
const NOTE_LINE_SPACING: f64 = 1.15;

/// Errors that can occur while exporting a schedule.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Select at least one apartment to generate the PDF")]
    EmptySelection,
    #[error("Failed to generate the PDF: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Failed to write the PDF: {0}")]
    Io(#[from] std::io::Error),
}

fn short_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.day(), date.month(), date.year())
}

/// File name for an exported range, e.g. `escalas_1-6-2025_al_29-6-2025.pdf`.
pub fn export_filename(range: &DateRange) -> String {
    format!(
        "escalas_{}_al_{}.pdf",
        short_date(range.start()),
        short_date(range.end())
    )
}

fn draw_title(canvas: &mut PageCanvas, geometry: &PageGeometry) {
    canvas.text(
        geometry.page_width / 2.0,
        TITLE_Y,
        TITLE,
        FontStyle::Bold,
        TITLE_SIZE,
        Align::Center,
    );
}

fn draw_table(canvas: &mut PageCanvas, placement: &TablePlacement<'_>, geometry: &PageGeometry) {
    let TablePlacement {
        x, y, width, height, ..
    } = *placement;

    canvas.set_line_width(BORDER_WIDTH);
    canvas.stroke_rect(x, y, width, height);
    canvas.fill_rect(x, y, width, HEADER_BAND_HEIGHT, HEADER_BAND_GRAY);
    canvas.set_line_width(SEPARATOR_WIDTH);
    canvas.line(x, y + HEADER_BAND_HEIGHT, x + width, y + HEADER_BAND_HEIGHT);

    canvas.text(
        x + width / 2.0,
        y + HEADER_BASELINE,
        &format!("{} {}", TABLE_HEADER_PREFIX, placement.apartment),
        FontStyle::Bold,
        TABLE_HEADER_SIZE,
        Align::Center,
    );

    let rows = placement.rows(geometry.header_height, geometry.line_height);
    let first_line = y + geometry.header_height;
    let label_width = width - 2.0 * DATE_INSET;
    for (i, date) in rows.shown.iter().enumerate() {
        let line_y = first_line + i as f64 * geometry.line_height;
        if i % 2 == 1 {
            canvas.fill_rect(
                x + 1.0,
                line_y - 3.0,
                width - 2.0,
                geometry.line_height,
                STRIPE_GRAY,
            );
        }
        canvas.text(
            x + DATE_INSET,
            line_y,
            &clip_text(&date.label, FontStyle::Regular, DATE_SIZE, label_width),
            FontStyle::Regular,
            DATE_SIZE,
            Align::Left,
        );
    }

    if rows.truncated {
        canvas.text(
            x + width / 2.0,
            first_line + rows.max_lines as f64 * geometry.line_height,
            TRUNCATION_MARKER,
            FontStyle::Italic,
            DATE_SIZE,
            Align::Center,
        );
    }
}

fn draw_note(canvas: &mut PageCanvas, geometry: &PageGeometry) {
    let heading_y = geometry.page_height - NOTE_FROM_BOTTOM;
    canvas.text(
        geometry.margin,
        heading_y,
        NOTE_HEADING,
        FontStyle::Bold,
        NOTE_HEADING_SIZE,
        Align::Left,
    );

    let line_advance = NOTE_TEXT_SIZE * NOTE_LINE_SPACING / MM_TO_PT;
    let lines = wrap_text(
        NOTE_TEXT,
        FontStyle::Italic,
        NOTE_TEXT_SIZE,
        geometry.usable_width(),
    );
    for (i, line) in lines.iter().enumerate() {
        canvas.text(
            geometry.margin,
            heading_y + NOTE_TEXT_GAP + i as f64 * line_advance,
            line,
            FontStyle::Italic,
            NOTE_TEXT_SIZE,
            Align::Left,
        );
    }
}

/// Assemble page canvases into a document sharing one font resource dictionary.
fn assemble(canvases: Vec<PageCanvas>, geometry: &PageGeometry) -> Result<Document, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for style in FontStyle::ALL {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => style.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(style.resource_name(), font_id);
    }
    let resources_id = doc.add_object(dictionary! {
        "Font" => fonts,
    });

    let mut kids: Vec<Object> = Vec::with_capacity(canvases.len());
    for canvas in canvases {
        let content = Content {
            operations: canvas.into_operations(),
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let media_box: Vec<Object> = vec![
        0.into(),
        0.into(),
        Object::Real((geometry.page_width * MM_TO_PT) as f32),
        Object::Real((geometry.page_height * MM_TO_PT) as f32),
    ];
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => media_box,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    Ok(doc)
}

/// Lay out and draw every apartment table into an uncompressed PDF document.
///
/// The title is repeated on every page and the note closes the last page.
pub fn render_document(
    assignment: &ScheduleAssignment,
    config: &ExportConfig,
) -> Result<Document, ExportError> {
    if assignment.is_empty() {
        return Err(ExportError::EmptySelection);
    }

    let geometry = &config.geometry;
    let verbosity = config.verbosity;
    let layout = compute_grid_layout(assignment, geometry);

    let mut canvases: Vec<PageCanvas> = (0..layout.page_count())
        .map(|_| {
            let mut canvas = PageCanvas::new(geometry.page_height);
            draw_title(&mut canvas, geometry);
            canvas
        })
        .collect();

    let mut current_page = 0;
    for placement in &layout.placements {
        if placement.page != current_page {
            current_page = placement.page;
            log_summary!(
                verbosity,
                "Page {} starts with apartment {}",
                current_page + 1,
                placement.apartment
            );
        }
        log_detail!(
            verbosity,
            "  Table {} at ({:.1}, {:.1}) on page {}: {} dates",
            placement.apartment,
            placement.x,
            placement.y,
            placement.page + 1,
            placement.dates.len()
        );
        draw_table(&mut canvases[placement.page], placement, geometry);
    }

    if let Some(last) = canvases.last_mut() {
        draw_note(last, geometry);
    }

    assemble(canvases, geometry)
}

/// Render the assignment and write the compressed PDF to `writer`.
pub fn write_pdf<W: Write>(
    assignment: &ScheduleAssignment,
    writer: &mut W,
    config: &ExportConfig,
) -> Result<(), ExportError> {
    let mut doc = render_document(assignment, config)?;
    doc.compress();
    doc.save_to(writer)?;
    Ok(())
}

/// Write `bytes` to a sibling file and rename it over `path`.
///
/// On failure the sibling is removed and `path` is left untouched.
fn persist(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let partial = path.with_extension("pdf.part");
    let result = fs::write(&partial, bytes).and_then(|()| fs::rename(&partial, path));
    if result.is_err() {
        let _ = fs::remove_file(&partial);
    }
    result
}

/// Export a schedule into `directory`, returning the path of the written file.
///
/// The document is fully rendered in memory before anything touches the disk.
pub fn export_pdf(
    schedule: &Schedule,
    directory: &Path,
    config: &ExportConfig,
) -> Result<PathBuf, ExportError> {
    let mut bytes: Vec<u8> = Vec::new();
    write_pdf(schedule.assignment(), &mut bytes, config)?;

    let path = directory.join(export_filename(schedule.range()));
    persist(&path, &bytes)?;

    log_summary!(config.verbosity, "Exported schedule to {}", path.display());
    Ok(path)
}
