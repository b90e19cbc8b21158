//! Preview display normalization.
//!
//! Makes an SVG scale to its container for on-screen previews. The result
//! is for display only and must never be exported: it prepends sizing rules
//! to the inline style and rewrites `width`/`height` from the `viewBox`.

use std::borrow::Cow;

use crate::svg::{Document, Element};

/// Default `max-height` written into the preview style.
pub const DEFAULT_MAX_HEIGHT: &str = "16rem";

const PRESERVE_ASPECT_RATIO: &str = "xMidYMid meet";

/// Style fragments whose absence triggers an update.
///
/// `max-height:100%` is checked literally, whatever `max_height` the caller
/// passes; a preview written with another value is normalized again on the
/// next call.
const REQUIRED_STYLE: [&str; 4] = [
    "width:auto",
    "height:auto",
    "max-width:100%",
    "max-height:100%",
];

/// Preview copy of `doc`, or `doc` itself when it is already normalized.
///
/// A `Cow::Borrowed` result is the same document that was passed in, so
/// repeated calls on an already normalized preview are free.
pub fn set_svg_display_attributes<'a>(doc: &'a Document, max_height: &str) -> Cow<'a, Document> {
    let Some(svg) = doc.svg_element() else {
        return Cow::Borrowed(doc);
    };

    let view_box = view_box_size(svg);
    if !needs_update(svg, view_box.as_ref()) {
        return Cow::Borrowed(doc);
    }

    let mut preview = doc.clone();
    if let Some(svg) = preview.svg_element_mut() {
        apply(svg, view_box.as_ref(), max_height);
    }
    Cow::Owned(preview)
}

/// Width and height components of a four-number `viewBox`, formatted.
fn view_box_size(svg: &Element) -> Option<(String, String)> {
    let numbers = svg
        .attribute("viewBox")?
        .split(|c: char| c.is_ascii_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse::<f64>)
        .collect::<Result<Vec<_>, _>>()
        .ok()?;

    match numbers[..] {
        [_, _, width, height] => Some((width.to_string(), height.to_string())),
        _ => None,
    }
}

fn needs_update(svg: &Element, view_box: Option<&(String, String)>) -> bool {
    if svg.attribute("preserveAspectRatio") != Some(PRESERVE_ASPECT_RATIO) {
        return true;
    }

    let style = svg.attribute("style").unwrap_or_default();
    if REQUIRED_STYLE.iter().any(|rule| !style.contains(rule)) {
        return true;
    }

    view_box.is_some_and(|(width, height)| {
        svg.attribute("width") != Some(width.as_str())
            || svg.attribute("height") != Some(height.as_str())
    })
}

fn apply(svg: &mut Element, view_box: Option<&(String, String)>, max_height: &str) {
    svg.set_attribute("preserveAspectRatio", PRESERVE_ASPECT_RATIO);

    let previous = svg.attribute("style").unwrap_or_default();
    let style =
        format!("width:auto;height:auto;max-width:100%;max-height:{max_height};{previous}");
    svg.set_attribute("style", style);

    if let Some((width, height)) = view_box {
        if svg.attribute("width") != Some(width.as_str()) {
            svg.set_attribute("width", width.as_str());
        }
        if svg.attribute("height") != Some(height.as_str()) {
            svg.set_attribute("height", height.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(src: &str) -> Document {
        Document::parse_str(src).unwrap()
    }

    #[test]
    fn test_normalizes_into_new_document() {
        let original = doc(r#"<svg viewBox="0 0 264 373" width="264mm" height="373mm" style="fill:red"/>"#);
        let preview = set_svg_display_attributes(&original, DEFAULT_MAX_HEIGHT);
        assert!(matches!(preview, Cow::Owned(_)));

        let svg = &preview.root;
        assert_eq!(svg.attribute("preserveAspectRatio"), Some("xMidYMid meet"));
        assert_eq!(
            svg.attribute("style"),
            Some("width:auto;height:auto;max-width:100%;max-height:16rem;fill:red")
        );
        assert_eq!(svg.attribute("width"), Some("264"));
        assert_eq!(svg.attribute("height"), Some("373"));

        // The input is untouched.
        assert_eq!(original.root.attribute("width"), Some("264mm"));
        assert!(!original.root.has_attribute("preserveAspectRatio"));
    }

    #[test]
    fn test_second_call_returns_same_reference() {
        let original = doc(r#"<svg viewBox="0,0,186.5,264"/>"#);
        let first = set_svg_display_attributes(&original, "100%");
        let first = first.into_owned();
        assert_eq!(first.root.attribute("width"), Some("186.5"));

        let second = set_svg_display_attributes(&first, "100%");
        match second {
            Cow::Borrowed(same) => assert!(std::ptr::eq(same, &first)),
            Cow::Owned(_) => panic!("normalized preview was cloned again"),
        }
    }

    #[test]
    fn test_custom_max_height_is_normalized_again() {
        // The style check looks for the literal `max-height:100%`, so a
        // preview written with another height never takes the fast path.
        let original = doc(r#"<svg viewBox="0 0 10 10"/>"#);
        let first = set_svg_display_attributes(&original, "24rem").into_owned();
        let second = set_svg_display_attributes(&first, "24rem");
        assert!(matches!(second, Cow::Owned(_)));
        assert_eq!(
            second.root.attribute("style"),
            Some(
                "width:auto;height:auto;max-width:100%;max-height:24rem;\
                 width:auto;height:auto;max-width:100%;max-height:24rem;"
            )
        );
    }

    #[test]
    fn test_already_normalized_without_view_box() {
        let original = doc(
            r#"<svg preserveAspectRatio="xMidYMid meet" style="width:auto;height:auto;max-width:100%;max-height:100%"/>"#,
        );
        assert!(matches!(
            set_svg_display_attributes(&original, DEFAULT_MAX_HEIGHT),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_dimension_mismatch_triggers_update() {
        let original = doc(
            r#"<svg viewBox="0 0 10 20" width="10" height="30" preserveAspectRatio="xMidYMid meet" style="width:auto;height:auto;max-width:100%;max-height:100%"/>"#,
        );
        let preview = set_svg_display_attributes(&original, DEFAULT_MAX_HEIGHT);
        assert!(matches!(preview, Cow::Owned(_)));
        assert_eq!(preview.root.attribute("height"), Some("20"));
        assert_eq!(preview.root.attribute("width"), Some("10"));
    }

    #[test]
    fn test_malformed_view_box_is_ignored() {
        let original = doc(r#"<svg viewBox="0 0 10" width="5"/>"#);
        let preview = set_svg_display_attributes(&original, DEFAULT_MAX_HEIGHT);
        assert_eq!(preview.root.attribute("width"), Some("5"));
    }

    #[test]
    fn test_without_svg_element() {
        let original = doc("<html/>");
        assert!(matches!(
            set_svg_display_attributes(&original, DEFAULT_MAX_HEIGHT),
            Cow::Borrowed(_)
        ));
    }
}
