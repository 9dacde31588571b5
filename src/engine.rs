//! Expectation engine.
//!
//! Evaluates an [`ExpectationSet`] against a fresh summary of a rendered tree.
//!
//! ## Evaluation rules
//!
//! 1. Thresholded flags are checked in declared order: keywords, strings,
//!    comments, numbers.
//! 2. Disabled flags are skipped; their thresholds are never consulted.
//! 3. An enabled flag fails when `count < threshold`, so threshold 0 always
//!    passes.
//! 4. Every flag is checked: the failure list is exhaustive.

use crate::dom::RenderedNode;
use crate::policy::MarkerPolicy;
use crate::scanner::TreeScanner;
use crate::summary::HighlightSummary;
use crate::types::{
    ExpectationSet, KeywordReport, PartialExpectations, Summary, TestCase, TokenType,
    VerificationResult,
};

/// Checks highlighting expectations against rendered trees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpectationEngine {
    aggregator: HighlightSummary,
}

impl ExpectationEngine {
    /// Create an engine over the given aggregator.
    pub fn new(aggregator: HighlightSummary) -> Self {
        Self { aggregator }
    }

    /// Create an engine for a marker policy.
    pub fn with_policy(policy: MarkerPolicy) -> Self {
        Self::new(HighlightSummary::new(TreeScanner::with_policy(policy)))
    }

    /// Get the aggregator.
    pub fn aggregator(&self) -> &HighlightSummary {
        &self.aggregator
    }

    /// Get the scanner.
    pub fn scanner(&self) -> &TreeScanner {
        self.aggregator.scanner()
    }

    /// Verify a tree against an expectation set.
    pub fn verify<N: RenderedNode>(
        &self,
        root: Option<&N>,
        expectations: &ExpectationSet,
    ) -> VerificationResult {
        let summary = self.aggregator.summarize(root);
        Self::check_summary(&summary, expectations)
    }

    /// Verify a tree against a test case's expectations.
    pub fn verify_test_case<N: RenderedNode>(
        &self,
        root: Option<&N>,
        case: &TestCase,
    ) -> VerificationResult {
        let result = self.verify(root, &case.expectations);
        tracing::debug!(
            case = %case.name,
            passed = result.passed,
            failures = result.failures.len(),
            "verified test case"
        );
        result
    }

    /// Check an already computed summary against an expectation set.
    pub fn check_summary(summary: &Summary, expectations: &ExpectationSet) -> VerificationResult {
        let mut result = VerificationResult::pass();

        for check in expectations.checks().filter(|c| c.enabled) {
            let found = summary.count(check.token_type);
            if found < check.min_count {
                tracing::trace!(
                    token_type = %check.token_type,
                    threshold = check.min_count,
                    found,
                    "expectation not met"
                );
                result.record_shortfall(check.token_type, check.min_count, found);
            }
        }

        result
    }

    /// Split `keywords` into those highlighted as keywords and those missing.
    pub fn verify_keywords<N, S>(&self, root: Option<&N>, keywords: &[S]) -> KeywordReport
    where
        N: RenderedNode,
        S: AsRef<str>,
    {
        let mut report = KeywordReport::default();
        for keyword in keywords {
            let keyword = keyword.as_ref();
            if self.scanner().contains_text(root, keyword, TokenType::Keyword) {
                report.found.push(keyword.to_string());
            } else {
                report.missing.push(keyword.to_string());
            }
        }
        report
    }
}

/// Build a test case, filling every absent flag with `false` and every
/// absent threshold with `0`.
pub fn build_test_case(
    name: impl Into<String>,
    code: impl Into<String>,
    expectations: PartialExpectations,
) -> TestCase {
    TestCase::new(name, code, expectations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::ElementNode;

    fn tree(spans: &[(&str, &str)]) -> ElementNode {
        ElementNode::element(["cm-content"])
            .with_children(spans.iter().map(|(class, text)| ElementNode::span(*class, *text)))
    }

    #[test]
    fn test_keyword_shortfall() {
        let tree = tree(&[("cm-keyword", "resource"), ("cm-keyword", "variable")]);
        let expectations: ExpectationSet = PartialExpectations {
            has_keywords: Some(true),
            min_keyword_count: Some(5),
            ..Default::default()
        }
        .into();

        let result = ExpectationEngine::default().verify(Some(&&tree), &expectations);

        assert!(!result.passed);
        assert_eq!(result.failures, vec!["Expected at least 5 keywords, found 2"]);
    }

    #[test]
    fn test_failures_are_exhaustive_and_ordered() {
        let tree = tree(&[("cm-keyword", "output")]);
        let expectations: ExpectationSet = PartialExpectations::default()
            .expect(TokenType::Number, 1)
            .expect(TokenType::Keyword, 2)
            .expect(TokenType::String, 1)
            .into();

        let result = ExpectationEngine::default().verify(Some(&&tree), &expectations);

        assert!(!result.passed);
        assert_eq!(
            result.failures,
            vec![
                "Expected at least 2 keywords, found 1",
                "Expected at least 1 strings, found 0",
                "Expected at least 1 numbers, found 0",
            ]
        );
    }

    #[test]
    fn test_zero_threshold_always_passes() {
        let empty = ElementNode::new();
        let expectations: ExpectationSet = PartialExpectations {
            has_keywords: Some(true),
            has_strings: Some(true),
            has_comments: Some(true),
            has_numbers: Some(true),
            has_operators: Some(true),
            has_punctuation: Some(true),
            ..Default::default()
        }
        .into();

        let result = ExpectationEngine::default().verify(Some(&&empty), &expectations);
        assert_eq!(result, VerificationResult::pass());
    }

    #[test]
    fn test_disabled_flags_ignore_thresholds() {
        let empty = ElementNode::new();
        let expectations: ExpectationSet = PartialExpectations {
            has_keywords: Some(false),
            min_keyword_count: Some(10),
            min_comment_count: Some(3),
            ..Default::default()
        }
        .into();

        let result = ExpectationEngine::default().verify(Some(&&empty), &expectations);
        assert!(result.passed);
        assert!(result.failures.is_empty());
    }

    #[test]
    fn test_absent_root_counts_as_zero() {
        let expectations: ExpectationSet = PartialExpectations::default()
            .expect(TokenType::Comment, 1)
            .into();
        let result = ExpectationEngine::default().verify::<&ElementNode>(None, &expectations);
        assert_eq!(result.failures, vec!["Expected at least 1 comments, found 0"]);
    }

    #[test]
    fn test_meeting_threshold_exactly_passes() {
        let tree = tree(&[("cm-string", "\"a\""), ("cm-string", "\"b\"")]);
        let expectations: ExpectationSet = PartialExpectations::default()
            .expect(TokenType::String, 2)
            .into();
        assert!(ExpectationEngine::default().verify(Some(&&tree), &expectations).passed);
    }

    #[test]
    fn test_build_test_case_normalizes() {
        let case = build_test_case(
            "t1",
            "resource \"a\" \"b\" {}",
            PartialExpectations {
                has_strings: Some(true),
                ..Default::default()
            },
        );

        assert_eq!(case.name, "t1");
        assert!(case.expectations.is_enabled(TokenType::String));
        assert_eq!(case.expectations.min_count(TokenType::String), 0);
        assert!(!case.expectations.is_enabled(TokenType::Keyword));
        assert_eq!(case.expectations.min_count(TokenType::Keyword), 0);
    }

    #[test]
    fn test_verify_test_case_uses_case_expectations() {
        let tree = tree(&[("cm-comment", "# a")]);
        let case = build_test_case(
            "comments",
            "# a",
            PartialExpectations::default().expect(TokenType::Comment, 2),
        );
        let result = ExpectationEngine::default().verify_test_case(Some(&&tree), &case);
        assert_eq!(result.failures, vec!["Expected at least 2 comments, found 1"]);
    }

    #[test]
    fn test_verify_keywords() {
        let tree = tree(&[
            ("cm-keyword", "resource"),
            ("cm-string", "output"),
            ("cm-keyword", "variable"),
        ]);

        let report = ExpectationEngine::default()
            .verify_keywords(Some(&&tree), &["resource", "output", "variable", "module"]);

        assert_eq!(report.found, vec!["resource", "variable"]);
        assert_eq!(report.missing, vec!["output", "module"]);
        assert!(!report.is_complete());
    }

    #[test]
    fn test_custom_policy_engine() {
        let tree = tree(&[("hl-keyword", "locals"), ("cm-keyword", "data")]);
        let engine = ExpectationEngine::with_policy(MarkerPolicy::new("hl-"));
        let expectations: ExpectationSet = PartialExpectations::default()
            .expect(TokenType::Keyword, 2)
            .into();

        let result = engine.verify(Some(&&tree), &expectations);
        assert_eq!(result.failures, vec!["Expected at least 2 keywords, found 1"]);
    }
}
