//! Pen registry.
//!
//! Maps the pen ids used by layer assignment to the ink color and line
//! width they draw with.

use serde::Serialize;

use crate::size::{parse_dimension, UnitError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pen {
    pub id: &'static str,
    pub color: &'static str,
    /// Line width with unit, e.g. `0.7mm`.
    pub width: &'static str,
}

impl Pen {
    /// Line width in millimeters.
    pub fn width_mm(&self) -> Result<f64, UnitError> {
        match parse_dimension(self.width) {
            Some(dimension) => dimension.to_mm(),
            None => Err(UnitError::Unsupported(self.width.to_string())),
        }
    }
}

/// Drawn with for any id missing from [`PENS`].
pub const FALLBACK_PEN: Pen = Pen {
    id: "unknown",
    color: "#000000",
    width: "0.3mm",
};

const fn pen(id: &'static str, color: &'static str, width: &'static str) -> Pen {
    Pen { id, color, width }
}

pub static PENS: [Pen; 11] = [
    pen("felt_tip_Black", "#222222", "0.7mm"),
    pen("felt_tip_Brown", "#8B5C2A", "0.7mm"),
    pen("felt_tip_Red", "#C0392B", "0.7mm"),
    pen("felt_tip_Blue", "#2980B9", "0.7mm"),
    pen("technical_pen_Black", "#111111", "0.15mm"),
    pen("technical_pen_Gray", "#888888", "0.15mm"),
    pen("technical_pen_Sepia", "#704214", "0.15mm"),
    pen("gel_pen_Black", "#222222", "0.5mm"),
    pen("gel_pen_Blue", "#1E90FF", "0.5mm"),
    pen("gel_pen_Green", "#27AE60", "0.5mm"),
    pen("gel_pen_Pink", "#FF69B4", "0.5mm"),
];

/// Look up a pen by id.
pub fn get_pen(id: &str) -> Option<&'static Pen> {
    PENS.iter().find(|pen| pen.id == id)
}

/// Look up a pen by id, falling back to [`FALLBACK_PEN`].
pub fn pen_or_default(id: &str) -> &'static Pen {
    get_pen(id).unwrap_or(&FALLBACK_PEN)
}

/// One entry of a pen configuration: layer `layer_id` is drawn with `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PenLayer {
    /// 1-based layer index.
    pub layer_id: usize,
    pub name: String,
    pub color: &'static str,
    pub pen_width: &'static str,
}

/// Pen configuration assigning `pen_ids[i]` to layer `i + 1`.
pub fn pen_layers<S: AsRef<str>>(pen_ids: &[S]) -> Vec<PenLayer> {
    pen_ids
        .iter()
        .enumerate()
        .map(|(idx, id)| {
            let id = id.as_ref();
            let pen = pen_or_default(id);
            PenLayer {
                layer_id: idx + 1,
                name: id.to_string(),
                color: pen.color,
                pen_width: pen.width,
            }
        })
        .collect()
}
