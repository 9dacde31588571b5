//! # highlight-verify
//!
//! Verification of syntax-highlighting output from a rendered code editor.
//!
//! The crate answers one question:
//!
//! > Given the tree an editor rendered, did the highlighter tag enough of the
//! > code with the token types we expect?
//!
//! ## Core Contract
//!
//! 1. Classify rendered nodes by their marker classes (`cm-keyword`, ...)
//! 2. Aggregate classified nodes into per-type counts and a total
//! 3. Check the counts against declarative minimums, reporting every
//!    violation as data
//!
//! ## Architecture
//!
//! ```text
//! Rendered tree → TreeScanner (TokenClassifier) → HighlightSummary → ExpectationEngine → VerificationResult
//!                        ↓
//!                 RenderedNode (in-memory or HTML dump)
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same tree + same policy → identical summary and fingerprint
//! - Scan results are in document order
//! - Nothing is cached: every call re-reads the tree
//!
//! The crate never tokenizes source code; it only reads what a renderer
//! already produced.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod policy;
pub mod dom;
pub mod classifier;
pub mod scanner;
pub mod summary;
pub mod engine;
pub mod canonical;
pub mod corpus;

#[cfg(feature = "harness")]
pub mod harness;

// Re-exports
pub use types::{
    TokenType, ParseTokenTypeError, Summary, ExpectationSet, PartialExpectations,
    ThresholdCheck, TestCase, ExpectationError, VerificationResult, KeywordReport,
};
pub use policy::MarkerPolicy;
pub use dom::{RenderedNode, RenderedDocument, ElementNode, DomError};
#[cfg(feature = "html")]
pub use dom::{HtmlNode, HtmlTree};
pub use classifier::TokenClassifier;
pub use scanner::TreeScanner;
pub use summary::HighlightSummary;
pub use engine::{ExpectationEngine, build_test_case};
pub use canonical::{to_canonical_bytes, canonical_hash, canonical_hash_hex};

#[cfg(feature = "harness")]
pub use harness::{
    Renderer, RenderHarness, HarnessError, wait_for_render, DEFAULT_RENDER_WAIT,
};

/// Default marker prefix, matching CodeMirror's class naming.
pub const DEFAULT_MARKER_PREFIX: &str = "cm-";

/// Descendants of `root` classified as `ty`, using the default policy.
pub fn scan_by_type<N: RenderedNode>(root: Option<&N>, ty: TokenType) -> Vec<N> {
    TreeScanner::default().scan_by_type(root, ty)
}

/// Whether some `ty` node under `root` contains `text`, using the default policy.
pub fn contains_text<N: RenderedNode>(root: Option<&N>, text: &str, ty: TokenType) -> bool {
    TreeScanner::default().contains_text(root, text, ty)
}

/// Summarize `root` using the default policy.
pub fn summarize<N: RenderedNode>(root: Option<&N>) -> Summary {
    HighlightSummary::default().summarize(root)
}

/// Verify `root` against `expectations` using the default policy.
pub fn verify<N: RenderedNode>(root: Option<&N>, expectations: &ExpectationSet) -> VerificationResult {
    ExpectationEngine::default().verify(root, expectations)
}
