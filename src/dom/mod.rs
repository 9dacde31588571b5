//! Rendered-tree backends.
//!
//! The core only needs three capabilities from a rendered tree: enumerate a
//! node's children, read its style classes, read its text payload. Any tree
//! that provides them through [`RenderedNode`] can be scanned.

pub mod memory;

#[cfg(feature = "html")]
pub mod html;

/// Read-only view of one node in a rendered editor tree.
///
/// Implementations are cheap handles (references or reference-counted
/// pointers); the core clones them into scan results and never mutates the
/// underlying tree.
pub trait RenderedNode: Clone {
    /// Direct children, in document order.
    fn children(&self) -> Vec<Self>;

    /// Style-class annotations. Empty when the node carries none.
    fn class_names(&self) -> Vec<String>;

    /// Text payload, concatenated from descendants in document order.
    fn text_content(&self) -> String;
}

/// An owned rendered tree that can hand out its root node.
pub trait RenderedDocument {
    /// Node handle type, borrowing from the document where needed.
    type Node<'a>: RenderedNode
    where
        Self: 'a;

    /// The root node. Its descendants are the scan candidates.
    fn root(&self) -> Self::Node<'_>;
}

/// Error loading a rendered tree from an external dump.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// The dump could not be read.
    #[error("Failed to read rendered tree: {0}")]
    Io(#[from] std::io::Error),
    /// The dump could not be parsed.
    #[error("Failed to parse rendered tree: {0}")]
    Parse(String),
}

pub use memory::ElementNode;

#[cfg(feature = "html")]
pub use html::{HtmlNode, HtmlTree};
