//! HTML dumps of a rendered editor.
//!
//! Parses a saved `outerHTML` snapshot with html5ever and exposes the element
//! tree through [`RenderedNode`]. Only element nodes are yielded as children;
//! text nodes contribute to their ancestors' text payload.

use std::path::Path;

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use super::{DomError, RenderedDocument, RenderedNode};

/// A parsed HTML document.
pub struct HtmlTree {
    dom: RcDom,
}

impl HtmlTree {
    /// Parse an HTML string.
    pub fn parse(html: &str) -> Result<Self, DomError> {
        let dom = parse_document(RcDom::default(), ParseOpts::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .map_err(|e| DomError::Parse(e.to_string()))?;
        tracing::debug!(bytes = html.len(), "parsed html dump");
        Ok(Self { dom })
    }

    /// Read and parse an HTML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DomError> {
        let html = std::fs::read_to_string(path)?;
        Self::parse(&html)
    }

}

impl RenderedDocument for HtmlTree {
    type Node<'a> = HtmlNode;

    fn root(&self) -> HtmlNode {
        HtmlNode(self.dom.document.clone())
    }
}

impl std::fmt::Debug for HtmlTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlTree").finish_non_exhaustive()
    }
}

/// Handle to one node of a parsed HTML document.
#[derive(Clone)]
pub struct HtmlNode(Handle);

impl HtmlNode {
    /// Local tag name, for element nodes.
    pub fn tag_name(&self) -> Option<String> {
        match &self.0.data {
            NodeData::Element { name, .. } => Some(name.local.to_string()),
            _ => None,
        }
    }

    fn collect_text(handle: &Handle) -> String {
        let mut out = String::new();
        // Children are pushed in reverse so they pop in document order.
        let mut stack = vec![handle.clone()];
        while let Some(node) = stack.pop() {
            if let NodeData::Text { contents } = &node.data {
                out.push_str(&contents.borrow());
            }
            stack.extend(node.children.borrow().iter().rev().cloned());
        }
        out
    }
}

impl std::fmt::Debug for HtmlNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlNode")
            .field("tag", &self.tag_name())
            .field("classes", &self.class_names())
            .finish()
    }
}

impl RenderedNode for HtmlNode {
    fn children(&self) -> Vec<Self> {
        self.0
            .children
            .borrow()
            .iter()
            .filter(|child| matches!(child.data, NodeData::Element { .. }))
            .cloned()
            .map(HtmlNode)
            .collect()
    }

    fn class_names(&self) -> Vec<String> {
        match &self.0.data {
            NodeData::Element { attrs, .. } => attrs
                .borrow()
                .iter()
                .filter(|a| a.name.local.as_ref() == "class")
                // Class lists split on ASCII whitespace only, as `classList` does.
                .flat_map(|a| {
                    a.value
                        .split_ascii_whitespace()
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    fn text_content(&self) -> String {
        Self::collect_text(&self.0)
    }
}
