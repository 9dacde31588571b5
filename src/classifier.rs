//! Token classification from style-class annotations.
//!
//! A node is classified as type `T` iff its class list contains the marker
//! for `T` (see [`MarkerPolicy`]). Nodes with no marker, including nodes with
//! no classes at all, are simply not highlighted tokens.

use crate::dom::RenderedNode;
use crate::policy::MarkerPolicy;
use crate::types::TokenType;

/// Maps a node's class list to canonical token types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenClassifier {
    policy: MarkerPolicy,
}

impl TokenClassifier {
    /// Create a classifier for the given marker policy.
    pub fn new(policy: MarkerPolicy) -> Self {
        Self { policy }
    }

    /// Get the policy.
    pub fn policy(&self) -> &MarkerPolicy {
        &self.policy
    }

    /// The marker class for a token type.
    pub fn marker(&self, ty: TokenType) -> String {
        self.policy.marker(ty)
    }

    /// The first token type (in canonical order) whose marker the node carries.
    pub fn classify<N: RenderedNode>(&self, node: &N) -> Option<TokenType> {
        let classes = node.class_names();
        TokenType::ALL
            .into_iter()
            .find(|ty| self.carries_marker(&classes, *ty))
    }

    /// Every token type whose marker the node carries, in canonical order.
    pub fn classify_all<N: RenderedNode>(&self, node: &N) -> Vec<TokenType> {
        self.classify_classes(&node.class_names()).collect()
    }

    /// Whether the node carries the marker for `ty`.
    pub fn has_class<N: RenderedNode>(&self, node: &N, ty: TokenType) -> bool {
        self.carries_marker(&node.class_names(), ty)
    }

    pub(crate) fn classify_classes<'a>(
        &'a self,
        classes: &'a [String],
    ) -> impl Iterator<Item = TokenType> + 'a {
        TokenType::ALL
            .into_iter()
            .filter(move |ty| self.carries_marker(classes, *ty))
    }

    fn carries_marker(&self, classes: &[String], ty: TokenType) -> bool {
        classes
            .iter()
            .any(|class| self.policy.is_marker_for(class, ty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::ElementNode;

    #[test]
    fn test_classify_single_marker() {
        let classifier = TokenClassifier::default();
        let node = ElementNode::span("cm-keyword", "resource");
        assert_eq!(classifier.classify(&&node), Some(TokenType::Keyword));
    }

    #[test]
    fn test_unclassified_nodes() {
        let classifier = TokenClassifier::default();

        let bare = ElementNode::text("plain");
        assert_eq!(classifier.classify(&&bare), None);

        let structural = ElementNode::element(["cm-line", "cm-activeLine"]);
        assert_eq!(classifier.classify(&&structural), None);

        let near_miss = ElementNode::element(["cm-keywords", "keyword", "cm-variable-2"]);
        assert_eq!(classifier.classify(&&near_miss), None);
    }

    #[test]
    fn test_multiple_markers_follow_canonical_order() {
        let classifier = TokenClassifier::default();
        let node = ElementNode::element(["cm-variable", "cm-string", "cm-keyword"]);

        assert_eq!(classifier.classify(&&node), Some(TokenType::Keyword));
        assert_eq!(
            classifier.classify_all(&&node),
            vec![TokenType::Keyword, TokenType::String, TokenType::Variable]
        );
    }

    #[test]
    fn test_has_class() {
        let classifier = TokenClassifier::default();
        let node = ElementNode::element(["cm-number", "cm-bool"]);
        assert!(classifier.has_class(&&node, TokenType::Number));
        assert!(classifier.has_class(&&node, TokenType::Bool));
        assert!(!classifier.has_class(&&node, TokenType::String));
    }

    #[test]
    fn test_custom_prefix() {
        let classifier = TokenClassifier::new(MarkerPolicy::new("tok-"));
        let node = ElementNode::element(["tok-comment", "cm-string"]);

        assert_eq!(classifier.classify(&&node), Some(TokenType::Comment));
        assert_eq!(classifier.classify_all(&&node), vec![TokenType::Comment]);
        assert_eq!(classifier.marker(TokenType::Operator), "tok-operator");
    }
}
