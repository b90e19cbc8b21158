//! Owned SVG element tree.
//!
//! Names are kept as qualified names exactly as written in the source
//! (`dc:source`, `xmlns:dc`). Attribute values are stored unescaped,
//! text nodes keep their escaped form and are unescaped on read.

use std::borrow::Cow;

/// A single `name="value"` pair on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Any node that can appear inside an element or around the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Character data in escaped form.
    Text(String),
    CData(String),
    Comment(String),
    /// Processing instruction content between `<?` and `?>`.
    ProcessingInstruction(String),
    /// XML declaration content between `<?` and `?>`.
    Declaration(String),
    DocType(String),
}

impl Node {
    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }
}

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Name without namespace prefix (`dc:source` -> `source`).
    #[inline]
    pub fn local_name(&self) -> &str {
        match self.name.split_once(':') {
            Some((_, local)) => local,
            None => &self.name,
        }
    }

    #[inline]
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    #[inline]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }

    /// Set an attribute, replacing the value in place if it already exists.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value,
            None => self.attributes.push(Attribute {
                name: name.to_string(),
                value,
            }),
        }
    }

    pub fn child_elements(&self) -> impl DoubleEndedIterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(Node::as_element_mut)
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Pre-order iterator over this element and all descendant elements.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// First descendant (excluding `self`) matching `pred`, in document order.
    pub fn find_descendant(&self, pred: impl Fn(&Element) -> bool) -> Option<&Element> {
        self.descendants().skip(1).find(|el| pred(*el))
    }

    /// Mutable variant of [`Element::find_descendant`].
    pub fn find_descendant_mut(
        &mut self,
        pred: &impl Fn(&Element) -> bool,
    ) -> Option<&mut Element> {
        for child in self.child_elements_mut() {
            if pred(&*child) {
                return Some(child);
            }
            if let Some(found) = child.find_descendant_mut(pred) {
                return Some(found);
            }
        }
        None
    }

    /// Visit this element and every descendant element in pre-order.
    pub fn walk_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        f(&mut *self);
        for child in self.child_elements_mut() {
            child.walk_mut(f);
        }
    }

    /// Concatenated, unescaped text of direct text and CDATA children.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Text(raw) => out.push_str(&unescape_or_raw(raw)),
                Node::CData(data) => out.push_str(data),
                _ => {}
            }
        }
        out
    }

    /// Replace all children with a single text node.
    pub fn set_text(&mut self, text: &str) {
        self.children.clear();
        self.children
            .push(Node::Text(quick_xml::escape::escape(text).into_owned()));
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

#[inline]
fn unescape_or_raw(raw: &str) -> Cow<'_, str> {
    quick_xml::escape::unescape(raw).unwrap_or(Cow::Borrowed(raw))
}

/// Pre-order element iterator, see [`Element::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let el = self.stack.pop()?;
        self.stack.extend(el.child_elements().rev());
        Some(el)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("svg")
            .with_child(
                Element::new("g")
                    .with_attribute("id", "a")
                    .with_child(Element::new("path").with_attribute("id", "b")),
            )
            .with_child(Node::Text("\n".into()))
            .with_child(Element::new("rect").with_attribute("id", "c"))
    }

    #[test]
    fn test_local_name() {
        assert_eq!(Element::new("dc:source").local_name(), "source");
        assert_eq!(Element::new("svg").local_name(), "svg");
    }

    #[test]
    fn test_set_attribute_replaces_in_place() {
        let mut el = Element::new("rect")
            .with_attribute("x", "1")
            .with_attribute("y", "2");
        el.set_attribute("x", "5");
        assert_eq!(el.attribute("x"), Some("5"));
        assert_eq!(el.attributes[0].name, "x");
        assert_eq!(el.attributes.len(), 2);
    }

    #[test]
    fn test_descendants_preorder() {
        let root = sample();
        let ids: Vec<_> = root
            .descendants()
            .map(|el| el.attribute("id").unwrap_or(el.name.as_str()).to_string())
            .collect();
        assert_eq!(ids, ["svg", "a", "b", "c"]);
    }

    #[test]
    fn test_find_descendant_skips_self() {
        let root = sample();
        assert!(root.find_descendant(|el| el.is("svg")).is_none());
        let found = root.find_descendant(|el| el.is("path")).unwrap();
        assert_eq!(found.attribute("id"), Some("b"));
    }

    #[test]
    fn test_find_descendant_mut() {
        let mut root = sample();
        let found = root.find_descendant_mut(&|el| el.is("rect")).unwrap();
        found.set_attribute("fill", "red");
        assert_eq!(
            root.find_descendant(|el| el.is("rect")).unwrap().attribute("fill"),
            Some("red")
        );
    }

    #[test]
    fn test_text_roundtrip_escaping() {
        let mut el = Element::new("title");
        el.set_text("a < b & c");
        assert_eq!(el.children, [Node::Text("a &lt; b &amp; c".into())]);
        assert_eq!(el.text(), "a < b & c");
    }
}
