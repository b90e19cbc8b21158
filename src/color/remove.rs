//! Fill color removal.

use crate::svg::style::FILL;
use crate::svg::{Document, Element, Node};

/// Remove every element under the svg element filled with `color`.
///
/// Matches the `fill` attribute or the style's `fill:` declaration by exact
/// string equality. A removed element takes its subtree with it. The svg
/// element itself is never removed. Returns the number of removed elements.
pub fn remove_fill_color(doc: &mut Document, color: &str) -> usize {
    let Some(svg) = doc.svg_element_mut() else {
        return 0;
    };
    remove_children(svg, color)
}

fn remove_children(parent: &mut Element, color: &str) -> usize {
    let before = parent.children.len();
    parent.children.retain(|child| match child {
        Node::Element(el) => !has_fill(el, color),
        _ => true,
    });
    let mut removed = before - parent.children.len();

    for child in parent.child_elements_mut() {
        removed += remove_children(child, color);
    }
    removed
}

fn has_fill(el: &Element, color: &str) -> bool {
    el.attribute("fill") == Some(color)
        || el
            .attribute("style")
            .and_then(|style| FILL.value(style))
            .is_some_and(|fill| fill == color)
}
