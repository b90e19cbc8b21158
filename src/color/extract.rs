//! Color extraction.

use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

use super::Paint;
use crate::svg::Document;

/// Layer index (1-based, among top-level groups only) -> stroke color.
pub type LayerColors = BTreeMap<usize, String>;

/// Unique stroke colors of every element under the svg element.
///
/// Returned in first-seen document order.
pub fn get_colors(doc: &Document) -> Vec<String> {
    collect_colors(doc, Paint::Stroke)
}

/// Unique fill colors, same traversal as [`get_colors`].
pub fn get_fill_colors(doc: &Document) -> Vec<String> {
    collect_colors(doc, Paint::Fill)
}

fn collect_colors(doc: &Document, paint: Paint) -> Vec<String> {
    let Some(svg) = doc.svg_element() else {
        return Vec::new();
    };

    let mut seen = FxHashSet::default();
    let mut colors = Vec::new();
    for color in svg.descendants().filter_map(|el| paint.color_of(el)) {
        if seen.insert(color) {
            colors.push(color.to_string());
        }
    }
    colors
}

/// Stroke color declared on each top-level `<g>` of the svg element.
///
/// Only the group's own stroke counts; groups without one are left out
/// and keep their index, so the map may have gaps.
pub fn get_layer_colors(doc: &Document) -> LayerColors {
    let Some(svg) = doc.svg_element() else {
        return LayerColors::new();
    };

    svg.child_elements()
        .filter(|el| el.local_name().eq_ignore_ascii_case("g"))
        .enumerate()
        .filter_map(|(i, group)| {
            Paint::Stroke
                .color_of(group)
                .map(|color| (i + 1, color.to_string()))
        })
        .collect()
}
