//! Stroke and fill color handling.
//!
//! Colors are opaque strings: `"RED"`, `"red"` and `"#ff0000"` are three
//! different colors. A paint is read from the presentation attribute first
//! and from the inline `style` second; `none` and `inherit` count as no paint.
//!
//! | Module    | Purpose                                         |
//! |-----------|-------------------------------------------------|
//! | `extract` | collect stroke/fill colors, per-layer colors    |
//! | `project` | copy fill colors onto strokes before hatching   |
//! | `remove`  | drop every element painted with a fill color    |

mod extract;
mod project;
mod remove;

pub use extract::{get_colors, get_fill_colors, get_layer_colors, LayerColors};
pub use project::set_stroke_to_fill_color;
pub use remove::remove_fill_color;

use crate::svg::style::{StyleProperty, FILL, STROKE};
use crate::svg::Element;

/// Which paint of an element to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Stroke,
    Fill,
}

impl Paint {
    #[inline]
    pub fn attribute(self) -> &'static str {
        self.style().name()
    }

    #[inline]
    fn style(self) -> &'static StyleProperty {
        match self {
            Paint::Stroke => &*STROKE,
            Paint::Fill => &*FILL,
        }
    }

    /// Color of this paint on `el` itself, children are not consulted.
    pub fn color_of(self, el: &Element) -> Option<&str> {
        if let Some(value) = el.attribute(self.attribute())
            && is_color(value)
        {
            return Some(value);
        }
        el.attribute("style")
            .and_then(|style| self.style().value(style))
            .filter(|value| is_color(value))
    }
}

#[inline]
fn is_color(value: &str) -> bool {
    !value.is_empty() && value != "none" && value != "inherit"
}
