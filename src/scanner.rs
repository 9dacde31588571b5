//! Rendered-tree scanner.
//!
//! Walks every descendant of a root node in document order (pre-order,
//! depth-first) and collects the nodes carrying token-type markers. The root
//! itself is never a candidate, matching a `querySelectorAll` on the editor
//! container.
//!
//! An absent root is a valid input and yields empty results.

use std::collections::BTreeMap;

use crate::classifier::TokenClassifier;
use crate::dom::RenderedNode;
use crate::policy::MarkerPolicy;
use crate::types::TokenType;

/// Words the loose highlighting heuristic looks for.
const HEURISTIC_WORDS: [&str; 3] = ["keyword", "string", "comment"];

/// Collects classified nodes from a rendered tree.
///
/// Holds no state between calls: every operation re-reads the tree, so the
/// scanner can be pointed at a live tree that the renderer keeps mutating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeScanner {
    classifier: TokenClassifier,
}

impl TreeScanner {
    /// Create a scanner using the given classifier.
    pub fn new(classifier: TokenClassifier) -> Self {
        Self { classifier }
    }

    /// Create a scanner for a marker policy.
    pub fn with_policy(policy: MarkerPolicy) -> Self {
        Self::new(TokenClassifier::new(policy))
    }

    /// Get the classifier.
    pub fn classifier(&self) -> &TokenClassifier {
        &self.classifier
    }

    /// Every descendant of `root` classified as `ty`, in document order.
    pub fn scan_by_type<N: RenderedNode>(&self, root: Option<&N>, ty: TokenType) -> Vec<N> {
        let mut matched = Vec::new();
        self.walk(root, |node, classes| {
            if classes.iter().any(|c| self.classifier.policy().is_marker_for(c, ty)) {
                matched.push(node.clone());
            }
        });
        tracing::trace!(token_type = %ty, matched = matched.len(), "scanned by type");
        matched
    }

    /// Number of descendants of `root` classified as `ty`.
    pub fn count_by_type<N: RenderedNode>(&self, root: Option<&N>, ty: TokenType) -> usize {
        self.scan_by_type(root, ty).len()
    }

    /// Whether some node classified as `ty` contains `text` (case-sensitive).
    ///
    /// An empty needle never matches.
    pub fn contains_text<N: RenderedNode>(&self, root: Option<&N>, text: &str, ty: TokenType) -> bool {
        if text.is_empty() {
            return false;
        }
        self.scan_by_type(root, ty)
            .iter()
            .any(|node| node.text_content().contains(text))
    }

    /// All classified descendants grouped by type, in one traversal.
    ///
    /// A node carrying several markers appears under each of its types, so
    /// every group equals what [`scan_by_type`](Self::scan_by_type) returns
    /// for that type. Types with no nodes are absent.
    pub fn collect_all<N: RenderedNode>(&self, root: Option<&N>) -> BTreeMap<TokenType, Vec<N>> {
        let mut groups: BTreeMap<TokenType, Vec<N>> = BTreeMap::new();
        self.walk(root, |node, classes| {
            for ty in self.classifier.classify_classes(classes) {
                groups.entry(ty).or_default().push(node.clone());
            }
        });
        groups
    }

    /// Loose check that any highlighting is present at all.
    ///
    /// True when some descendant has a class starting with the marker prefix
    /// and a class mentioning `keyword`, `string` or `comment`. Advisory
    /// only: it matches things like `cm-keywordish` that the classifier
    /// rejects, so it never feeds a pass/fail decision.
    pub fn has_syntax_highlighting<N: RenderedNode>(&self, root: Option<&N>) -> bool {
        let policy = self.classifier.policy();
        let mut found = false;
        self.walk(root, |_, classes| {
            if found {
                return;
            }
            found = classes.iter().any(|c| policy.is_prefixed(c))
                && classes
                    .iter()
                    .any(|c| HEURISTIC_WORDS.iter().any(|w| c.contains(w)));
        });
        found
    }

    /// Visit every descendant of `root` in pre-order with its class list.
    fn walk<N, F>(&self, root: Option<&N>, mut visit: F)
    where
        N: RenderedNode,
        F: FnMut(&N, &[String]),
    {
        let Some(root) = root else {
            return;
        };

        // Children are pushed in reverse so they pop in document order.
        let mut stack: Vec<N> = root.children();
        stack.reverse();

        while let Some(node) = stack.pop() {
            let classes = node.class_names();
            visit(&node, &classes);

            let mut children = node.children();
            children.reverse();
            stack.extend(children);
        }
    }
}
