//! In-memory element tree for testing.

use super::{RenderedDocument, RenderedNode};

/// An element in an in-memory rendered tree.
///
/// Mirrors the shape of an editor's DOM: class annotations, an optional
/// direct text payload and ordered children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementNode {
    /// Style classes, in attribute order.
    classes: Vec<String>,
    /// Text owned directly by this node.
    text: Option<String>,
    /// Child elements, in document order.
    children: Vec<ElementNode>,
}

impl ElementNode {
    /// Create an empty element with no classes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element carrying the given classes.
    pub fn element<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Create a bare text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            classes: Vec::new(),
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    /// Create a highlighted span: one class, one text payload.
    pub fn span(class: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            classes: vec![class.into()],
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    /// Add a class (builder style).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Append a child (builder style).
    pub fn with_child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children (builder style).
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = ElementNode>,
    {
        self.children.extend(children);
        self
    }

    /// Append a child in place.
    pub fn push_child(&mut self, child: ElementNode) {
        self.children.push(child);
    }

    /// Drop every child, as a renderer does before re-rendering a line.
    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Mutable access to children.
    pub fn children_mut(&mut self) -> &mut Vec<ElementNode> {
        &mut self.children
    }

    /// Number of nodes in this subtree, including this one.
    pub fn num_nodes(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    fn collect_text(&self) -> String {
        let mut out = String::new();
        // Children are pushed in reverse so they pop in document order.
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if let Some(text) = &node.text {
                out.push_str(text);
            }
            stack.extend(node.children.iter().rev());
        }
        out
    }
}

// Flatten the subtree before dropping so deep nesting cannot exhaust the stack.
impl Drop for ElementNode {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

impl<'a> RenderedNode for &'a ElementNode {
    fn children(&self) -> Vec<Self> {
        self.children.iter().collect()
    }

    fn class_names(&self) -> Vec<String> {
        self.classes.clone()
    }

    fn text_content(&self) -> String {
        self.collect_text()
    }
}

impl RenderedDocument for ElementNode {
    type Node<'a> = &'a ElementNode;

    fn root(&self) -> Self::Node<'_> {
        self
    }
}
