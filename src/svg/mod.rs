//! In-memory SVG document.
//!
//! Parsing and serialization are the only places that touch quick-xml;
//! everything else in the crate works on the owned [`Document`] tree.
//!
//! # Modules
//!
//! - [`node`]: `Element` / `Node` tree types
//! - `parse`: quick-xml events -> tree
//! - `write`: tree -> XML text
//! - [`style`]: inline `style` declaration lookups

mod node;
mod parse;
pub mod style;
mod write;

pub use node::{Attribute, Descendants, Element, Node};

use thiserror::Error;

/// Errors raised while reading an SVG file.
#[derive(Debug, Error)]
pub enum SvgError {
    #[error("SVG is not valid UTF-8")]
    Utf8(#[source] std::str::Utf8Error),

    #[error("malformed XML")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed attribute")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("malformed escape sequence")]
    Escape(#[from] quick_xml::escape::EscapeError),

    #[error("document has no root element")]
    NoRootElement,

    #[error("document has more than one root element")]
    MultipleRoots,

    #[error("unexpected closing tag")]
    UnexpectedEnd,

    #[error("element `{0}` is never closed")]
    UnclosedElement(String),
}

/// A parsed SVG (or any XML) document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Declaration, doctype, comments and whitespace before the root.
    pub prolog: Vec<Node>,
    pub root: Element,
    /// Nodes after the root element.
    pub epilog: Vec<Node>,
}

impl Document {
    /// Wrap a root element without prolog.
    pub fn new(root: Element) -> Self {
        Self {
            prolog: Vec::new(),
            root,
            epilog: Vec::new(),
        }
    }

    /// Parse an SVG file's bytes.
    pub fn parse(bytes: &[u8]) -> Result<Self, SvgError> {
        let text = std::str::from_utf8(bytes).map_err(SvgError::Utf8)?;
        Self::parse_str(text)
    }

    pub fn parse_str(text: &str) -> Result<Self, SvgError> {
        // Tolerate a byte order mark from editors that write one.
        parse::parse_document(text.strip_prefix('\u{feff}').unwrap_or(text))
    }

    /// Serialized UTF-8 bytes, see [`Document::to_string`].
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    /// First `svg` element in document order, the root itself included.
    pub fn svg_element(&self) -> Option<&Element> {
        self.root.descendants().find(|el| el.local_name() == "svg")
    }

    pub fn svg_element_mut(&mut self) -> Option<&mut Element> {
        if self.root.local_name() == "svg" {
            return Some(&mut self.root);
        }
        self.root.find_descendant_mut(&|el| el.local_name() == "svg")
    }

    /// Whether the root element is named exactly `svg`.
    #[inline]
    pub fn has_svg_root(&self) -> bool {
        self.root.is("svg")
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write::write_document(self, f)
    }
}

impl std::str::FromStr for Document {
    type Err = SvgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}
