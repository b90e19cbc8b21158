//! Fill -> stroke projection.
//!
//! The hatching service keys hatch layers off stroke color, so filled shapes
//! must carry their fill as stroke before they are sent.

use super::Paint;
use crate::svg::style::STROKE;
use crate::svg::{Document, Element};

/// Copy every element's fill color onto its stroke, in place.
///
/// Both the `stroke` attribute and, when the element has an inline style,
/// the style's `stroke:` declaration are written.
pub fn set_stroke_to_fill_color(doc: &mut Document) {
    let Some(svg) = doc.svg_element_mut() else {
        return;
    };
    svg.walk_mut(&mut project_element);
}

fn project_element(el: &mut Element) {
    let Some(fill) = Paint::Fill.color_of(el).map(str::to_string) else {
        return;
    };

    if let Some(style) = el.attribute("style") {
        let style = STROKE.set(style, &fill);
        el.set_attribute("style", style);
    }
    el.set_attribute("stroke", fill);
}
