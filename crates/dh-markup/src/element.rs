// ABOUTME: HTML element and node types.
// ABOUTME: Consuming builder methods; attributes keep insertion order.

use std::fmt::Display;

/// A child of an element: either a nested element or escaped text.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// One HTML element. Built by value and moved into its parent, so a
/// finished tree can never alias a subtree of another.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub(crate) tag: String,
    pub(crate) attrs: Vec<(String, String)>,
    pub(crate) children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id.into())
    }

    /// Add a class. Appends to an existing `class` attribute with a space
    /// so chained calls accumulate rather than duplicate the attribute.
    pub fn class(mut self, class: &str) -> Self {
        if let Some((_, existing)) = self.attrs.iter_mut().find(|(name, _)| name == "class") {
            existing.push(' ');
            existing.push_str(class);
        } else {
            self.attrs.push(("class".to_string(), class.to_string()));
        }
        self
    }

    /// Set any attribute. The value goes through `Display`, which for f64
    /// split positions yields the shortest round-trip form ("30",
    /// "33.333333333333336").
    pub fn attr(mut self, name: &str, value: impl Display) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    /// Boolean attribute, rendered as `name="name"` (checked, disabled).
    pub fn flag(mut self, name: &str) -> Self {
        self.attrs.push((name.to_string(), name.to_string()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }
}
