//! Provenance hashing for exported SVGs.
//!
//! The hash covers the serialized document with its top-level `<metadata>`
//! detached, so stamping the hash into that metadata never changes it:
//!
//! ```text
//! <svg>                         <svg>
//!   <metadata/>     detach        ...content...     sha256 ──┐
//!   ...content...   ───────►                                 │
//! </svg>                        </svg>                       │
//!                                                            ▼
//! <svg> ...content... <metadata><dc:source>{hash}</dc:source></metadata> </svg>
//! ```

use crate::svg::{Document, Element, Node};
use crate::utils::hash::sha256_hex;

/// Dublin Core elements namespace.
pub const DC_NS: &str = "http://purl.org/dc/elements/1.1/";

/// Detach the `<metadata>` element that is a direct child of the root.
///
/// Does nothing unless the root element is named exactly `svg`.
pub fn remove_svg_metadata(doc: &mut Document) -> Option<Element> {
    if !doc.has_svg_root() {
        return None;
    }

    let idx = doc
        .root
        .children
        .iter()
        .position(|node| node.as_element().is_some_and(|el| el.local_name() == "metadata"))?;

    match doc.root.children.remove(idx) {
        Node::Element(el) => Some(el),
        _ => None,
    }
}

/// SHA-256 (lowercase hex) of the serialized document.
pub fn hash_document(doc: &Document) -> String {
    hash_document_with(doc, |bytes| sha256_hex(bytes))
}

/// [`hash_document`] with a caller-chosen digest over the UTF-8 bytes.
pub fn hash_document_with(doc: &Document, digest: impl FnOnce(&[u8]) -> String) -> String {
    digest(&doc.to_bytes())
}

/// Write `hash` into the metadata's `dc:source`, creating it if needed.
///
/// A new `dc:source` goes under the first `cc:Work` when there is one,
/// otherwise directly under the metadata element. It declares `xmlns:dc`
/// unless the prefix is already in scope at the insertion point.
fn set_source_hash(metadata: &mut Element, hash: &str, dc_declared_above: bool) {
    if let Some(source) = metadata.find_descendant_mut(&is_source) {
        source.set_text(hash);
        return;
    }

    let dc_declared = dc_declared_above
        || dc_in_scope_at_work(metadata).unwrap_or_else(|| declares_dc(metadata));

    let mut source = Element::new("dc:source");
    if !dc_declared {
        source.set_attribute("xmlns:dc", DC_NS);
    }
    source.set_text(hash);

    match metadata.find_descendant_mut(&is_work) {
        Some(work) => work.children.push(Node::Element(source)),
        None => metadata.children.push(Node::Element(source)),
    }
}

/// Whether `xmlns:dc` is declared on the first `cc:Work` below `el` or on
/// any element between them, `el` included. `None` without a `cc:Work`.
fn dc_in_scope_at_work(el: &Element) -> Option<bool> {
    el.child_elements()
        .find_map(|child| {
            if is_work(child) {
                Some(declares_dc(child))
            } else {
                dc_in_scope_at_work(child)
            }
        })
        .map(|below| below || declares_dc(el))
}

/// Hash the document without its metadata and stamp the hash into it.
///
/// The metadata element is re-appended as the root's last child. Without a
/// metadata element the hash is computed and nothing is added. Returns the
/// hash, or `None` when the root is not `svg` (the document is untouched).
pub fn update_svg_metadata_with_hash(doc: &mut Document) -> Option<String> {
    if !doc.has_svg_root() {
        return None;
    }

    let metadata = remove_svg_metadata(doc);
    let hash = hash_document(doc);

    match metadata {
        Some(mut metadata) => {
            let dc_on_root = declares_dc(&doc.root);
            set_source_hash(&mut metadata, &hash, dc_on_root);
            doc.root.children.push(Node::Element(metadata));
            crate::debug!("svg"; "stamped source hash {}", hash);
        }
        None => crate::debug!("svg"; "no metadata, source hash {} not stored", hash),
    }

    Some(hash)
}

fn is_source(el: &Element) -> bool {
    el.is("dc:source") || el.local_name() == "source"
}

fn is_work(el: &Element) -> bool {
    el.is("cc:Work") || el.local_name() == "Work"
}

#[inline]
fn declares_dc(el: &Element) -> bool {
    el.attribute("xmlns:dc").is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::hash::is_sha256_hex;

    const INKSCAPE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:cc="http://creativecommons.org/ns#" xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
  <metadata><rdf:RDF><cc:Work rdf:about=""><dc:source>placeholder</dc:source></cc:Work></rdf:RDF></metadata>
  <path d="M0 0L10 10" stroke="red"/>
</svg>"#;

    fn doc(src: &str) -> Document {
        Document::parse_str(src).unwrap()
    }

    fn source_text(doc: &Document) -> String {
        doc.root.find_descendant(is_source).unwrap().text()
    }

    #[test]
    fn test_remove_svg_metadata_direct_child_only() {
        let mut d = doc("<svg><g><metadata/></g><metadata id=\"m\"/></svg>");
        let removed = remove_svg_metadata(&mut d).unwrap();
        assert_eq!(removed.attribute("id"), Some("m"));
        assert_eq!(d.to_string(), "<svg><g><metadata/></g></svg>");
    }

    #[test]
    fn test_remove_svg_metadata_nested_only() {
        let mut d = doc("<svg><g><metadata/></g></svg>");
        assert!(remove_svg_metadata(&mut d).is_none());
    }

    #[test]
    fn test_remove_svg_metadata_requires_svg_root() {
        let mut d = doc("<html><metadata/></html>");
        assert!(remove_svg_metadata(&mut d).is_none());
        assert_eq!(d.to_string(), "<html><metadata/></html>");
    }

    #[test]
    fn test_hash_document_matches_serialized_bytes() {
        let d = doc("<svg><path d=\"M0 0\"/></svg>");
        assert_eq!(hash_document(&d), sha256_hex("<svg><path d=\"M0 0\"/></svg>"));
        assert_eq!(hash_document_with(&d, |bytes| bytes.len().to_string()), "27");
    }

    #[test]
    fn test_update_roundtrip() {
        let mut d = doc(INKSCAPE);
        let hash = update_svg_metadata_with_hash(&mut d).unwrap();

        let last = d.root.child_elements().last().unwrap();
        assert_eq!(last.name, "metadata");
        assert!(is_sha256_hex(&source_text(&d)));
        assert_eq!(source_text(&d), hash);

        let mut stripped = d.clone();
        remove_svg_metadata(&mut stripped);
        assert_eq!(hash_document(&stripped), hash);
    }

    #[test]
    fn test_update_is_stable() {
        let mut d = doc(INKSCAPE);
        let first = update_svg_metadata_with_hash(&mut d).unwrap();
        let second = update_svg_metadata_with_hash(&mut d).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_update_ignores_metadata_content() {
        let mut a = doc("<svg><metadata><dc:source>one</dc:source></metadata><g/></svg>");
        let mut b = doc("<svg><metadata><dc:source>two</dc:source></metadata><g/></svg>");
        assert_eq!(
            update_svg_metadata_with_hash(&mut a),
            update_svg_metadata_with_hash(&mut b)
        );
    }

    #[test]
    fn test_update_creates_source_under_work() {
        let mut d = doc(
            r#"<svg xmlns:dc="http://purl.org/dc/elements/1.1/"><metadata><cc:Work/></metadata></svg>"#,
        );
        let hash = update_svg_metadata_with_hash(&mut d).unwrap();
        let work = d.root.find_descendant(is_work).unwrap();
        let source = work.child_elements().next().unwrap();
        assert_eq!(source.name, "dc:source");
        assert!(!source.has_attribute("xmlns:dc"));
        assert_eq!(source.text(), hash);
    }

    #[test]
    fn test_update_creates_source_under_metadata() {
        let mut d = doc("<svg><metadata/><rect/></svg>");
        let hash = update_svg_metadata_with_hash(&mut d).unwrap();
        assert_eq!(
            d.to_string(),
            format!(
                "<svg><rect/><metadata><dc:source xmlns:dc=\"{DC_NS}\">{hash}</dc:source></metadata></svg>"
            )
        );
    }

    #[test]
    fn test_update_respects_dc_on_metadata() {
        let mut d = doc(&format!(r#"<svg><metadata xmlns:dc="{DC_NS}"/></svg>"#));
        update_svg_metadata_with_hash(&mut d).unwrap();
        let source = d.root.find_descendant(is_source).unwrap();
        assert!(!source.has_attribute("xmlns:dc"));
    }

    #[test]
    fn test_update_respects_dc_between_metadata_and_work() {
        let mut d = doc(&format!(
            r#"<svg><metadata><rdf:RDF xmlns:dc="{DC_NS}"><cc:Work/></rdf:RDF></metadata></svg>"#
        ));
        update_svg_metadata_with_hash(&mut d).unwrap();
        let source = d.root.find_descendant(is_source).unwrap();
        assert!(!source.has_attribute("xmlns:dc"));
    }

    #[test]
    fn test_update_dc_on_sibling_is_not_in_scope() {
        let mut d = doc(&format!(
            r#"<svg><metadata><rdf:RDF><x xmlns:dc="{DC_NS}"/><cc:Work/></rdf:RDF></metadata></svg>"#
        ));
        update_svg_metadata_with_hash(&mut d).unwrap();
        let work = d.root.find_descendant(is_work).unwrap();
        let source = work.child_elements().next().unwrap();
        assert_eq!(source.attribute("xmlns:dc"), Some(DC_NS));
    }

    #[test]
    fn test_update_without_metadata_adds_nothing() {
        let mut d = doc("<svg><rect/></svg>");
        let hash = update_svg_metadata_with_hash(&mut d).unwrap();
        assert_eq!(hash, sha256_hex("<svg><rect/></svg>"));
        assert_eq!(d.to_string(), "<svg><rect/></svg>");
    }

    #[test]
    fn test_update_non_svg_root_is_noop() {
        let mut d = doc("<html><metadata/></html>");
        assert!(update_svg_metadata_with_hash(&mut d).is_none());
        assert_eq!(d.to_string(), "<html><metadata/></html>");
    }
}
