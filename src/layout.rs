//! Framework-agnostic render description of the landing page.
//!
//! `landing_page()` is the page's render function: it takes no input,
//! performs no side effects and builds a fresh tree on every call. The
//! browser frontend turns the tree into DOM; tests and automation harnesses
//! query it directly.

use serde::Serialize;

use crate::content::{
    BUTTON_CLASSES, DESCRIPTION_LINES, HEADING_SPACER_BREAKS, ROOT_CLASS, USERS_CONTROL_ID,
    USERS_PATH, VIEW_USERS_LABEL, WELCOME_HEADING, WELCOME_ID,
};

/// Element kinds the landing page is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Div,
    H1,
    H2,
    /// Router link; activating it requests navigation to its `href`.
    Link,
    Button,
}

/// A node of the render tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Element(Element),
    Text { text: String },
    LineBreak,
}

/// An element with its identifier, classes and children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: Tag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            href: None,
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    pub fn line_breaks(mut self, count: usize) -> Self {
        self.children.extend(std::iter::repeat_n(Node::LineBreak, count));
        self
    }

    /// Space-separated class attribute, or `None` when the element has no classes.
    pub fn class_attr(&self) -> Option<String> {
        (!self.classes.is_empty()).then(|| self.classes.join(" "))
    }

    /// Attributes written to the DOM for this element.
    pub fn dom_attributes(&self) -> DomAttributes {
        DomAttributes {
            id: self.id.clone(),
            class: self.class_attr(),
            destination: self.href.clone().filter(|_| self.tag == Tag::Link),
        }
    }
}

/// DOM attributes of a rendered element.
///
/// Links carry no `href`. They render as a `<nav>` container whose click
/// handler goes through a [`Navigator`](crate::navigation::Navigator), so the
/// router's anchor interception never sees them. The destination is exposed
/// to automation as `data-href`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomAttributes {
    pub id: Option<String>,
    pub class: Option<String>,
    pub destination: Option<String>,
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// All elements of the tree in depth-first, document order.
    pub fn elements(&self) -> Vec<&Element> {
        let mut found = Vec::new();
        collect_elements(self, &mut found);
        found
    }

    /// First element carrying `id`, in document order.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.elements()
            .into_iter()
            .find(|element| element.id.as_deref() == Some(id))
    }

    /// Number of elements carrying `id`.
    pub fn count_id(&self, id: &str) -> usize {
        self.elements()
            .into_iter()
            .filter(|element| element.id.as_deref() == Some(id))
            .count()
    }

    /// Concatenated text of the subtree; each line break becomes `'\n'`.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        push_text(self, &mut out);
        out
    }

    /// Pretty-printed JSON dump of the tree.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn collect_elements<'a>(node: &'a Node, found: &mut Vec<&'a Element>) {
    if let Node::Element(element) = node {
        found.push(element);
        for child in &element.children {
            collect_elements(child, found);
        }
    }
}

fn push_text(node: &Node, out: &mut String) {
    match node {
        Node::Text { text } => out.push_str(text),
        Node::LineBreak => out.push('\n'),
        Node::Element(element) => {
            for child in &element.children {
                push_text(child, out);
            }
        }
    }
}

/// Renders the landing page.
pub fn landing_page() -> Node {
    let [first_line, second_line] = DESCRIPTION_LINES;

    let welcome = Element::new(Tag::Div)
        .id(WELCOME_ID)
        .child(Element::new(Tag::H1).text(WELCOME_HEADING))
        .line_breaks(HEADING_SPACER_BREAKS)
        .child(
            Element::new(Tag::H2)
                .text(first_line)
                .child(Node::LineBreak)
                .text(second_line),
        );

    let button = BUTTON_CLASSES
        .iter()
        .fold(Element::new(Tag::Button), |button, class| button.class(*class))
        .text(VIEW_USERS_LABEL);

    let users_link = Element::new(Tag::Link)
        .id(USERS_CONTROL_ID)
        .href(USERS_PATH)
        .child(button);

    Element::new(Tag::Div)
        .class(ROOT_CLASS)
        .child(welcome)
        .child(users_link)
        .into()
}
