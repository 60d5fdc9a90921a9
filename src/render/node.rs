//! Output node primitive.
//!
//! A [`Node`] is the engine's output currency: a tag, a sorted attribute map,
//! child nodes, and optional text content. The real node construction and
//! mutation layer lives upstream; this type mirrors its `build(tag,
//! attributes, ...children)` shape so composites can be assembled and
//! inspected without a host environment. `Display` emits HTML-like markup as
//! a test and debugging aid.

use std::collections::BTreeMap;
use std::fmt;

/// An output node: tag, attributes, children, optional text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    /// Element tag (e.g. "span", "img").
    pub tag: String,
    /// Attributes, sorted by name.
    pub attributes: BTreeMap<String, String>,
    /// Child nodes, in document order.
    pub children: Vec<Node>,
    /// Direct text content, if any.
    pub text: Option<String>,
}

/// Build a node from a tag, attribute pairs, and children.
pub fn build<K, V>(
    tag: impl Into<String>,
    attributes: impl IntoIterator<Item = (K, V)>,
    children: Vec<Node>,
) -> Node
where
    K: Into<String>,
    V: Into<String>,
{
    Node {
        tag: tag.into(),
        attributes: attributes
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
        children,
        text: None,
    }
}

impl Node {
    /// Create an empty node with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Create a node with text content.
    pub fn with_text(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Set an attribute (builder).
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Append a child (builder).
    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    /// Set an attribute in place.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Look up an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Whether an attribute is present.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, escape(value))?;
        }
        if self.text.is_none() && self.children.is_empty() {
            return write!(f, "/>");
        }
        write!(f, ">")?;
        if let Some(text) = &self.text {
            write!(f, "{}", escape(text))?;
        }
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.tag)
    }
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ===========================================================================
// Tests
// ===========================================================================
