//! Owned tree -> XML text.
//!
//! Output is deterministic for a given tree, which the provenance hash
//! depends on.

use std::fmt::{self, Write};

use quick_xml::escape::escape;

use super::{Document, Element, Node};

pub(super) fn write_document(doc: &Document, out: &mut impl Write) -> fmt::Result {
    for node in &doc.prolog {
        write_node(node, out)?;
    }
    write_element(&doc.root, out)?;
    for node in &doc.epilog {
        write_node(node, out)?;
    }
    Ok(())
}

pub(super) fn write_element(el: &Element, out: &mut impl Write) -> fmt::Result {
    write!(out, "<{}", el.name)?;
    for attr in &el.attributes {
        write!(out, " {}=\"{}\"", attr.name, escape(attr.value.as_str()))?;
    }

    if !el.has_children() {
        return out.write_str("/>");
    }

    out.write_char('>')?;
    for child in &el.children {
        write_node(child, out)?;
    }
    write!(out, "</{}>", el.name)
}

fn write_node(node: &Node, out: &mut impl Write) -> fmt::Result {
    match node {
        Node::Element(el) => write_element(el, out),
        Node::Text(text) => out.write_str(text),
        Node::CData(data) => write!(out, "<![CDATA[{data}]]>"),
        Node::Comment(comment) => write!(out, "<!--{comment}-->"),
        Node::ProcessingInstruction(pi) | Node::Declaration(pi) => write!(out, "<?{pi}?>"),
        Node::DocType(doctype) => write!(out, "<!DOCTYPE {doctype}>"),
    }
}
