//! Ad hoc inline `style` lookups.
//!
//! Not a CSS parser: a declaration is found by plain pattern search for
//! `<property>:` and its value runs up to the next `;` or end of string.

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

/// Compiled lookups for a single style property.
pub struct StyleProperty {
    name: &'static str,
    find: Regex,
    /// Matches the whole declaration including its trailing `;`, if any.
    whole: Regex,
}

pub static STROKE: LazyLock<StyleProperty> = LazyLock::new(|| StyleProperty::new("stroke"));
pub static FILL: LazyLock<StyleProperty> = LazyLock::new(|| StyleProperty::new("fill"));

impl StyleProperty {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            find: Regex::new(&format!(r"{name}:[ \t\r\n]*([^;]+)")).unwrap(),
            whole: Regex::new(&format!(r"{name}:[^;]*;?")).unwrap(),
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Trimmed value of the first declaration of this property.
    pub fn value<'a>(&self, style: &'a str) -> Option<&'a str> {
        let caps = self.find.captures(style)?;
        Some(caps.get(1)?.as_str().trim())
    }

    /// Set the property inside `style`.
    ///
    /// The first existing declaration is replaced, otherwise
    /// `; <name>: <value>;` is appended.
    pub fn set(&self, style: &str, value: &str) -> String {
        let declaration = format!("{}: {};", self.name, value);
        if self.whole.is_match(style) {
            self.whole
                .replacen(style, 1, NoExpand(&declaration))
                .into_owned()
        } else {
            format!("{style}; {declaration}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_first_match_trimmed() {
        assert_eq!(STROKE.value("fill:red; stroke: blue ;stroke:green"), Some("blue"));
        assert_eq!(FILL.value("fill:#fff"), Some("#fff"));
        assert_eq!(FILL.value("stroke:#fff"), None);
    }

    #[test]
    fn test_value_without_trailing_semicolon() {
        assert_eq!(STROKE.value("stroke:rgb(1, 2, 3)"), Some("rgb(1, 2, 3)"));
    }

    #[test]
    fn test_value_ignores_longer_property_names() {
        assert_eq!(STROKE.value("stroke-width:2"), None);
        assert_eq!(FILL.value("fill-opacity:0.5;fill:red"), Some("red"));
    }

    #[test]
    fn test_set_replaces_first_declaration() {
        assert_eq!(
            STROKE.set("fill:red;stroke:blue;opacity:1", "red"),
            "fill:red;stroke: red;opacity:1"
        );
        assert_eq!(STROKE.set("stroke:blue", "red"), "stroke: red;");
    }

    #[test]
    fn test_set_appends_when_absent() {
        assert_eq!(STROKE.set("fill:red", "red"), "fill:red; stroke: red;");
    }

    #[test]
    fn test_set_value_is_literal() {
        assert_eq!(STROKE.set("stroke:x", "$1"), "stroke: $1;");
    }
}
