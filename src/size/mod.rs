//! Physical size inference.
//!
//! Maps an SVG's declared `width`/`height` onto the plot size registry:
//!
//! ```text
//! width="264mm" height="373mm"  ──► (264, 373) mm ──► a4 portrait
//! width="373mm" height="264mm"  ──► (373, 264) mm ──► a4 landscape
//! width="100mm" height="100mm"  ──► (100, 100) mm ──► none
//! ```
//!
//! A dimension matches when it is within 2% of the registry value,
//! relative to their mean.

mod registry;
mod unit;

pub use registry::{all_sizes, get_size, Orientation, PaperSize, SIZES};
pub use unit::{convert_to_mm, parse_dimension, Dimension, Unit, UnitError};

use serde::Serialize;

use crate::svg::Document;

/// Relative tolerance for a dimension match.
pub const TOLERANCE: f64 = 0.02;

/// Result of [`get_assumed_size`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AssumedSize {
    /// Registry key of the matched size.
    pub size: &'static str,
    pub orientation: Orientation,
}

impl AssumedSize {
    /// The matched registry entry.
    pub fn paper(&self) -> Option<&'static PaperSize> {
        get_size(self.size)
    }
}

/// Raw `width` / `height` attribute values of the svg element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgDimensions<'a> {
    pub width: Option<&'a str>,
    pub height: Option<&'a str>,
}

pub fn get_svg_dimensions(doc: &Document) -> Option<SvgDimensions<'_>> {
    let svg = doc.svg_element()?;
    Some(SvgDimensions {
        width: svg.attribute("width"),
        height: svg.attribute("height"),
    })
}

/// Whether `a` and `b` differ by at most [`TOLERANCE`] of their mean.
#[inline]
pub fn is_within_tolerance(a: f64, b: f64) -> bool {
    let average = (a + b) / 2.0;
    (a - b).abs() / average <= TOLERANCE
}

/// Match millimeter dimensions against the registry.
///
/// The first entry matching in either orientation wins; portrait is tried
/// before landscape for each entry.
pub fn match_size(width_mm: f64, height_mm: f64) -> Option<AssumedSize> {
    SIZES.iter().find_map(|size| {
        let orientation = if is_within_tolerance(width_mm, size.width_mm)
            && is_within_tolerance(height_mm, size.height_mm)
        {
            Orientation::Portrait
        } else if is_within_tolerance(width_mm, size.height_mm)
            && is_within_tolerance(height_mm, size.width_mm)
        {
            Orientation::Landscape
        } else {
            return None;
        };
        Some(AssumedSize {
            size: size.name,
            orientation,
        })
    })
}

/// Infer the plot size an SVG was authored for.
///
/// `Ok(None)` when there is no svg element, either dimension is missing
/// or unparseable, or nothing in the registry matches. A dimension with an
/// unknown unit is an error.
pub fn get_assumed_size(doc: &Document) -> Result<Option<AssumedSize>, UnitError> {
    let Some(SvgDimensions {
        width: Some(width),
        height: Some(height),
    }) = get_svg_dimensions(doc)
    else {
        return Ok(None);
    };

    let (Some(width), Some(height)) = (parse_dimension(width), parse_dimension(height)) else {
        return Ok(None);
    };

    let width_mm = width.to_mm()?;
    let height_mm = height.to_mm()?;
    crate::debug!("size"; "declared {:.2}mm x {:.2}mm", width_mm, height_mm);

    Ok(match_size(width_mm, height_mm))
}
