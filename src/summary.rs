//! Highlight aggregation.

use crate::dom::RenderedNode;
use crate::scanner::TreeScanner;
use crate::types::Summary;

/// Aggregates a tree's classified nodes into per-type counts.
///
/// Nothing is memoized: the renderer may have re-rendered between calls, so
/// each summary is computed from the tree as it is now.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSummary {
    scanner: TreeScanner,
}

impl HighlightSummary {
    /// Create an aggregator over the given scanner.
    pub fn new(scanner: TreeScanner) -> Self {
        Self { scanner }
    }

    /// Get the scanner.
    pub fn scanner(&self) -> &TreeScanner {
        &self.scanner
    }

    /// Count classified nodes per type. An absent root yields an empty summary.
    pub fn summarize<N: RenderedNode>(&self, root: Option<&N>) -> Summary {
        let groups = self.scanner.collect_all(root);
        let summary = Summary::from_counts(groups.iter().map(|(ty, nodes)| (*ty, nodes.len())));
        tracing::debug!(
            total = summary.total(),
            types = summary.by_type().len(),
            "summarized highlighting"
        );
        summary
    }
}
