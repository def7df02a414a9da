//! Drawing surface for one PDF page.
//!
//! Callers work in millimetres with the origin at the top-left corner, the
//! way the layout engine does. The canvas converts to PDF points with the
//! origin at the bottom-left.

use lopdf::content::Operation;
use lopdf::Object;

use super::fonts::{encode_win_ansi, text_width, FontStyle};

/// Points per millimetre.
pub const MM_TO_PT: f64 = 72.0 / 25.4;

/// Horizontal anchoring of a text run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Accumulates content stream operations for a single page.
pub struct PageCanvas {
    page_height: f64,
    operations: Vec<Operation>,
}

fn pt(mm: f64) -> Object {
    Object::Real((mm * MM_TO_PT) as f32)
}

fn gray(level: u8) -> Vec<Object> {
    let component = Object::Real(f32::from(level) / 255.0);
    vec![component.clone(), component.clone(), component]
}

impl PageCanvas {
    pub fn new(page_height: f64) -> Self {
        Self {
            page_height,
            operations: Vec::new(),
        }
    }

    fn flip(&self, y: f64) -> Object {
        pt(self.page_height - y)
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.push("w", vec![pt(width)]);
    }

    /// Outline a rectangle whose top-left corner is `(x, y)`.
    pub fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.push(
            "re",
            vec![pt(x), self.flip(y + height), pt(width), pt(height)],
        );
        self.push("S", vec![]);
    }

    /// Fill a rectangle with a gray level (0 = black, 255 = white).
    ///
    /// The fill color is restored afterwards so text stays black.
    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, level: u8) {
        self.push("q", vec![]);
        self.push("rg", gray(level));
        self.push(
            "re",
            vec![pt(x), self.flip(y + height), pt(width), pt(height)],
        );
        self.push("f", vec![]);
        self.push("Q", vec![]);
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.push("m", vec![pt(x1), self.flip(y1)]);
        self.push("l", vec![pt(x2), self.flip(y2)]);
        self.push("S", vec![]);
    }

    /// Draw a single line of text with its baseline at `y`.
    pub fn text(&mut self, x: f64, y: f64, text: &str, style: FontStyle, size_pt: f64, align: Align) {
        let x = match align {
            Align::Left => x,
            Align::Center => x - text_width(text, style, size_pt) / 2.0,
        };
        self.push("BT", vec![]);
        self.push(
            "Tf",
            vec![
                Object::Name(style.resource_name().as_bytes().to_vec()),
                Object::Real(size_pt as f32),
            ],
        );
        self.push("Td", vec![pt(x), self.flip(y)]);
        self.push("Tj", vec![Object::string_literal(encode_win_ansi(text))]);
        self.push("ET", vec![]);
    }

    #[cfg(test)]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn into_operations(self) -> Vec<Operation> {
        self.operations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn real(object: &Object) -> f32 {
        match object {
            Object::Real(value) => *value,
            other => panic!("expected real, got {:?}", other),
        }
    }

    fn find<'a>(canvas: &'a PageCanvas, operator: &str) -> &'a Operation {
        canvas
            .operations()
            .iter()
            .find(|op| op.operator == operator)
            .unwrap()
    }

    #[test]
    fn test_rect_is_flipped_to_bottom_left_origin() {
        let mut canvas = PageCanvas::new(297.0);
        canvas.stroke_rect(15.0, 40.0, 85.0, 80.0);

        let re = find(&canvas, "re");
        // Bottom edge at 297 - 120 = 177mm
        assert!((real(&re.operands[1]) - (177.0 * MM_TO_PT) as f32).abs() < 1e-3);
        assert!((real(&re.operands[3]) - (80.0 * MM_TO_PT) as f32).abs() < 1e-3);
    }

    #[test]
    fn test_centered_text_shifts_left_by_half_width() {
        let mut canvas = PageCanvas::new(297.0);
        canvas.text(105.0, 20.0, "LAVADA DE ESCALAS", FontStyle::Bold, 20.0, Align::Center);

        let td = find(&canvas, "Td");
        let expected = 105.0 - text_width("LAVADA DE ESCALAS", FontStyle::Bold, 20.0) / 2.0;
        assert!((real(&td.operands[0]) - (expected * MM_TO_PT) as f32).abs() < 1e-3);

        let tf = find(&canvas, "Tf");
        assert!(matches!(&tf.operands[0], Object::Name(name) if name.as_slice() == b"F2"));
    }

    #[test]
    fn test_fill_restores_graphics_state() {
        let mut canvas = PageCanvas::new(297.0);
        canvas.fill_rect(0.0, 0.0, 10.0, 10.0, 240);

        let operators: Vec<&str> = canvas
            .operations()
            .iter()
            .map(|op| op.operator.as_str())
            .collect();
        assert_eq!(operators, vec!["q", "rg", "re", "f", "Q"]);
    }
}
