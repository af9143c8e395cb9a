//! The renderable node tree.
//!
//! Rendering produces a [`Node`] tree the host turns into actual output.
//! Elements carry a tag, an optional reconciliation key, CSS classes, string
//! attributes, an optional column span, and an optional [`Action`] a host
//! routes back to the component when the element is activated.

use std::collections::BTreeMap;

/// Structural role of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// The outer table.
    Table,
    /// Header section.
    Head,
    /// Body section.
    Body,
    /// One row of cells.
    Row,
    /// A header cell.
    HeaderCell,
    /// A body cell.
    Cell,
    /// A generic block container.
    Container,
    /// A keyed group whose children animate on insertion/removal.
    Group,
}

/// An activation a host routes back to the component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Toggle the sort for the named column prop.
    Sort { prop: String },
}

/// A node: nothing, text, or an element with children.
#[derive(Debug, Clone, Default)]
pub enum Node {
    #[default]
    Empty,
    Text(String),
    Elem(Box<Element>),
}

impl Node {
    /// A text node.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Start building an element.
    pub fn elem(tag: Tag) -> Element {
        Element::new(tag)
    }

    /// Whether this node renders nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    /// Borrow the element, if this is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Elem(e) => Some(e),
            _ => None,
        }
    }

    /// All descendant elements with the given tag, in document order.
    pub fn find_all(&self, tag: Tag) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect(tag, &mut out);
        out
    }

    fn collect<'a>(&'a self, tag: Tag, out: &mut Vec<&'a Element>) {
        if let Node::Elem(e) = self {
            if e.tag == tag {
                out.push(e);
            }
            for child in &e.children {
                child.collect(tag, out);
            }
        }
    }

    /// Concatenated text content of this subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Empty => {}
            Node::Text(s) => out.push_str(s),
            Node::Elem(e) => {
                for child in &e.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Append a class to the element, if this is one.
    pub fn with_class(self, class: impl Into<String>) -> Self {
        match self {
            Node::Elem(mut e) => {
                e.push_class(class.into());
                Node::Elem(e)
            }
            other => other,
        }
    }
}

/// An element in the node tree. Built fluently, finished with [`build`].
///
/// [`build`]: Element::build
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: Tag,
    /// Reconciliation key: identifies this element across renders.
    pub key: Option<String>,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    /// Column span, for cells stretching across the table.
    pub span: Option<usize>,
    /// Activation routed back to the component.
    pub action: Option<Action>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with the given tag.
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            key: None,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            span: None,
            action: None,
            children: Vec::new(),
        }
    }

    /// Set the reconciliation key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Append a class. Blank strings are dropped; whitespace-separated
    /// lists split into individual classes.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.push_class(class.into());
        self
    }

    fn push_class(&mut self, class: String) {
        for part in class.split_whitespace() {
            self.classes.push(part.to_string());
        }
    }

    /// Set an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set the column span.
    pub fn span(mut self, span: usize) -> Self {
        self.span = Some(span);
        self
    }

    /// Set the activation action.
    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Append a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append children.
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append a text child.
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::Text(content.into()))
    }

    /// Whether the element carries the class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Finish building.
    pub fn build(self) -> Node {
        Node::Elem(Box::new(self))
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        e.build()
    }
}
