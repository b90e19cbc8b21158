//! quick-xml event stream -> owned [`Document`].

use std::sync::LazyLock;

use quick_xml::escape::{resolve_predefined_entity, unescape_with};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use regex::Regex;
use rustc_hash::FxHashMap;

use super::{Attribute, Document, Element, Node, SvgError};

/// General entity declaration in an internal DTD subset.
static ENTITY_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<!ENTITY[ \t\r\n]+([^ \t\r\n%"']+)[ \t\r\n]+(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

/// Entities declared in the DOCTYPE, referenced from attribute values
/// (e.g. `xmlns:x="&ns_extend;"` in Illustrator exports).
type Entities = FxHashMap<String, String>;

fn declared_entities(doctype: &str) -> Entities {
    ENTITY_DECL
        .captures_iter(doctype)
        .filter_map(|caps| {
            let value = caps.get(2).or_else(|| caps.get(3))?;
            Some((caps[1].to_string(), value.as_str().to_string()))
        })
        .collect()
}

pub(super) fn parse_document(text: &str) -> Result<Document, SvgError> {
    let mut reader = Reader::from_str(text);

    let mut prolog = Vec::new();
    let mut epilog = Vec::new();
    let mut root: Option<Element> = None;
    // Open elements, innermost last.
    let mut stack: Vec<Element> = Vec::new();
    let mut entities = Entities::default();

    loop {
        let node = match reader.read_event()? {
            Event::Eof => break,
            Event::Start(start) => {
                stack.push(element_from_start(&start, &entities)?);
                continue;
            }
            Event::End(_) => {
                // quick-xml checks end names, an unmatched end is already an error.
                let Some(el) = stack.pop() else {
                    return Err(SvgError::UnexpectedEnd);
                };
                Node::Element(el)
            }
            Event::Empty(start) => Node::Element(element_from_start(&start, &entities)?),
            Event::Text(text) => Node::Text(utf8(&text)?.to_string()),
            // Entity and character references (`&amp;`, `&#x20;`) stay escaped.
            Event::GeneralRef(reference) => Node::Text(format!("&{};", utf8(&reference)?)),
            Event::CData(data) => Node::CData(utf8(&data)?.to_string()),
            Event::Comment(comment) => Node::Comment(utf8(&comment)?.to_string()),
            Event::PI(pi) => Node::ProcessingInstruction(utf8(&pi)?.to_string()),
            Event::Decl(decl) => Node::Declaration(utf8(&decl)?.to_string()),
            Event::DocType(doctype) => {
                let doctype = utf8(&doctype)?;
                entities.extend(declared_entities(doctype));
                Node::DocType(doctype.to_string())
            }
        };

        if let Some(parent) = stack.last_mut() {
            push_merging_text(&mut parent.children, node);
            continue;
        }

        match node {
            Node::Element(el) if root.is_none() => root = Some(el),
            Node::Element(_) => return Err(SvgError::MultipleRoots),
            other if root.is_none() => push_merging_text(&mut prolog, other),
            other => push_merging_text(&mut epilog, other),
        }
    }

    if !stack.is_empty() {
        return Err(SvgError::UnclosedElement(
            stack.pop().map(|el| el.name).unwrap_or_default(),
        ));
    }

    let root = root.ok_or(SvgError::NoRootElement)?;
    Ok(Document {
        prolog,
        root,
        epilog,
    })
}

fn element_from_start(start: &BytesStart<'_>, entities: &Entities) -> Result<Element, SvgError> {
    let mut el = Element::new(utf8(start.name().as_ref())?);
    for attr in start.attributes() {
        let attr = attr?;
        let raw = utf8(&attr.value)?;
        let value = unescape_with(raw, |name| {
            resolve_predefined_entity(name).or_else(|| entities.get(name).map(String::as_str))
        })?;
        el.attributes.push(Attribute {
            name: utf8(attr.key.as_ref())?.to_string(),
            value: value.into_owned(),
        });
    }
    Ok(el)
}

/// Adjacent text pieces (split around references) become one text node.
fn push_merging_text(nodes: &mut Vec<Node>, node: Node) {
    if let Node::Text(text) = &node
        && let Some(Node::Text(prev)) = nodes.last_mut()
    {
        prev.push_str(text);
        return;
    }
    nodes.push(node);
}

#[inline]
fn utf8(bytes: &[u8]) -> Result<&str, SvgError> {
    std::str::from_utf8(bytes).map_err(SvgError::Utf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_tree() {
        let doc = parse_document(
            r#"<svg xmlns="http://www.w3.org/2000/svg"><g id="layer1"><path d="M0 0"/></g></svg>"#,
        )
        .unwrap();
        assert_eq!(doc.root.name, "svg");
        let g = doc.root.child_elements().next().unwrap();
        assert_eq!(g.attribute("id"), Some("layer1"));
        assert_eq!(g.child_elements().next().unwrap().name, "path");
    }

    #[test]
    fn test_parse_keeps_prolog() {
        let doc = parse_document("<?xml version=\"1.0\"?>\n<!-- hi --><svg/>\n").unwrap();
        assert!(matches!(doc.prolog[0], Node::Declaration(_)));
        assert_eq!(doc.prolog[1], Node::Text("\n".into()));
        assert_eq!(doc.prolog[2], Node::Comment(" hi ".into()));
        assert_eq!(doc.epilog, [Node::Text("\n".into())]);
    }

    #[test]
    fn test_attribute_values_unescaped() {
        let doc = parse_document(r#"<svg data-x="a &amp; b"/>"#).unwrap();
        assert_eq!(doc.root.attribute("data-x"), Some("a & b"));
    }

    #[test]
    fn test_attribute_uses_internal_subset_entity() {
        let doc = parse_document(
            r#"<!DOCTYPE svg [<!ENTITY ns "http://x"> <!ENTITY q 'single'>]><svg xmlns:x="&ns;" data-q="&q;/&lt;"><path stroke="red"/></svg>"#,
        )
        .unwrap();
        assert_eq!(doc.root.attribute("xmlns:x"), Some("http://x"));
        assert_eq!(doc.root.attribute("data-q"), Some("single/<"));
        assert!(matches!(doc.prolog[0], Node::DocType(_)));
    }

    #[test]
    fn test_undeclared_entity_in_attribute_is_error() {
        assert!(parse_document(r#"<svg xmlns:x="&ns;"/>"#).is_err());
    }

    #[test]
    fn test_declared_entities_skips_parameter_entities() {
        let entities = declared_entities(r#"svg [<!ENTITY % p "no"> <!ENTITY ns_extend "http://ns.adobe.com/Extensibility/1.0/">]"#);
        assert_eq!(entities.len(), 1);
        assert_eq!(
            entities.get("ns_extend").map(String::as_str),
            Some("http://ns.adobe.com/Extensibility/1.0/")
        );
    }

    #[test]
    fn test_text_references_merged() {
        let doc = parse_document("<svg><title>a &amp; b</title></svg>").unwrap();
        let title = doc.root.child_elements().next().unwrap();
        assert_eq!(title.children.len(), 1);
        assert_eq!(title.text(), "a & b");
    }

    #[test]
    fn test_mismatched_end_is_error() {
        assert!(parse_document("<svg><g></svg>").is_err());
    }

    #[test]
    fn test_unclosed_is_error() {
        assert!(parse_document("<svg><g>").is_err());
    }

    #[test]
    fn test_no_root_is_error() {
        assert!(matches!(
            parse_document("<!-- nothing -->"),
            Err(SvgError::NoRootElement)
        ));
    }
}
