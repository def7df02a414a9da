//! Standard Type1 Helvetica faces and their advance widths.

use super::canvas::MM_TO_PT;

/// Advance widths (1/1000 em) of Helvetica for ASCII 32..=126.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0..9
    278, 278, 584, 584, 584, 556, 1015, // :..@
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // A..M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N..Z
    278, 278, 278, 469, 556, 333, // [..`
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // a..m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // n..z
    334, 260, 334, 584, // {..~
];

/// Advance widths (1/1000 em) of Helvetica-Bold for ASCII 32..=126.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0..9
    333, 333, 584, 584, 584, 611, 975, // :..@
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // A..M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N..Z
    333, 278, 333, 584, 556, 333, // [..`
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // a..m
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // n..z
    389, 280, 389, 584, // {..~
];

/// Width used for characters outside printable ASCII.
const FALLBACK_WIDTH: u16 = 556;

const ELLIPSIS: &str = "...";

/// Font faces used by the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

impl FontStyle {
    pub const ALL: [FontStyle; 3] = [FontStyle::Regular, FontStyle::Bold, FontStyle::Italic];

    /// Name of the font in the page resource dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontStyle::Regular => "F1",
            FontStyle::Bold => "F2",
            FontStyle::Italic => "F3",
        }
    }

    pub fn base_font(self) -> &'static str {
        match self {
            FontStyle::Regular => "Helvetica",
            FontStyle::Bold => "Helvetica-Bold",
            FontStyle::Italic => "Helvetica-Oblique",
        }
    }

    fn glyph_width(self, c: char) -> u16 {
        let table = match self {
            FontStyle::Bold => &HELVETICA_BOLD_WIDTHS,
            // Oblique shares the upright metrics
            FontStyle::Regular | FontStyle::Italic => &HELVETICA_WIDTHS,
        };
        match c as u32 {
            code @ 32..=126 => table[(code - 32) as usize],
            _ => FALLBACK_WIDTH,
        }
    }
}

fn units_to_mm(units: u32, size_pt: f64) -> f64 {
    f64::from(units) / 1000.0 * size_pt / MM_TO_PT
}

/// Rendered width of `text` in millimetres.
pub fn text_width(text: &str, style: FontStyle, size_pt: f64) -> f64 {
    let units: u32 = text.chars().map(|c| u32::from(style.glyph_width(c))).sum();
    units_to_mm(units, size_pt)
}

/// Cut `text` to fit in `max_width` millimetres, ending it with `...` when shortened.
pub fn clip_text(text: &str, style: FontStyle, size_pt: f64, max_width: f64) -> String {
    if text_width(text, style, size_pt) <= max_width {
        return text.to_string();
    }

    let budget = max_width - text_width(ELLIPSIS, style, size_pt);
    let mut clipped = String::new();
    let mut units = 0;
    for c in text.chars() {
        let next = units + u32::from(style.glyph_width(c));
        if units_to_mm(next, size_pt) > budget {
            break;
        }
        units = next;
        clipped.push(c);
    }

    let mut clipped = clipped.trim_end().to_string();
    clipped.push_str(ELLIPSIS);
    clipped
}

/// Encode text for a WinAnsiEncoding font.
///
/// Latin-1 characters map to their own byte; anything else becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            code @ (0x20..=0x7E | 0xA0..=0xFF) => code as u8,
            _ => b'?',
        })
        .collect()
}

/// Greedy word wrap so that no line exceeds `max_width` millimetres.
///
/// A single word wider than `max_width` gets a line of its own.
pub fn wrap_text(text: &str, style: FontStyle, size_pt: f64, max_width: f64) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", current, word);
        if text_width(&candidate, style, size_pt) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
