//! Typed document tree used by the assemblers.
//!
//! Documents are built from [`Element`] values that own their children, so
//! every opened section is closed by construction. Serialisation lives in
//! [`render`].

pub mod render;

/// Non-breaking space used to keep blank table cells at full height.
pub const NBSP: &str = "\u{a0}";

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

impl Node {
    pub fn comment(value: impl Into<String>) -> Self {
        Node::Comment(value.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An HTML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with_attr("id", id)
    }

    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class)
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::Text(text.into()))
    }

    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Child elements, skipping text and comments.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Every element below this one in document order, excluding itself.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut found = Vec::new();
        collect_descendants(self, &mut found);
        found
    }

    /// Descendant elements matching `predicate`, in document order.
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.descendants()
            .into_iter()
            .filter(|element| predicate(*element))
            .collect()
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        collect_text(self, &mut text);
        text
    }
}

fn collect_descendants<'a>(element: &'a Element, found: &mut Vec<&'a Element>) {
    for child in element.child_elements() {
        found.push(child);
        collect_descendants(child, found);
    }
}

fn collect_text(element: &Element, text: &mut String) {
    for child in &element.children {
        match child {
            Node::Text(value) => text.push_str(value),
            Node::Element(inner) => collect_text(inner, text),
            Node::Comment(_) => {}
        }
    }
}

/// A complete HTML page: `<html>` with a head and a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    /// Builds the common page shell: title, charset, stylesheet link and a
    /// `#wrapper` div holding `content`.
    pub fn page(title: &str, stylesheet: &str, content: Vec<Node>) -> Self {
        let head = Element::new("head")
            .with_child(Element::new("meta").with_attr("charset", "utf-8"))
            .with_child(Element::new("title").with_text(title))
            .with_child(
                Element::new("link")
                    .with_attr("href", stylesheet)
                    .with_attr("rel", "stylesheet")
                    .with_attr("type", "text/css"),
            );
        let wrapper = Element::new("div").with_id("wrapper").with_children(content);
        let body = Element::new("body")
            .with_child(wrapper)
            .with_child(Node::comment(" end wrapper "));

        Self {
            root: Element::new("html").with_child(head).with_child(body),
        }
    }

    /// Elements inside the `#wrapper` div, i.e. the page content.
    pub fn content(&self) -> Vec<&Element> {
        self.root
            .descendants()
            .into_iter()
            .find(|element| element.attr("id") == Some("wrapper"))
            .map(|wrapper| wrapper.child_elements().collect())
            .unwrap_or_default()
    }

    pub fn title(&self) -> String {
        self.root
            .descendants()
            .into_iter()
            .find(|element| element.tag == "title")
            .map(Element::text_content)
            .unwrap_or_default()
    }
}
