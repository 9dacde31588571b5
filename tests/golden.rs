//! Golden tests for highlight verification.
//!
//! These tests pin the end-to-end behavior of scanning, summarizing and
//! verifying rendered trees.

use highlight_verify::{
    build_test_case, contains_text, scan_by_type, summarize, verify, ElementNode,
    ExpectationEngine, ExpectationSet, HtmlTree, MarkerPolicy, PartialExpectations,
    RenderedDocument, RenderedNode, TokenType, TreeScanner, VerificationResult,
};

// ─────────────────────────────────────────────────────────────────────────────
// Test Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn line(spans: &[(&str, &str)]) -> ElementNode {
    ElementNode::element(["cm-line"]).with_children(
        spans
            .iter()
            .map(|(class, text)| ElementNode::span(*class, *text)),
    )
}

fn editor(lines: Vec<ElementNode>) -> ElementNode {
    ElementNode::element(["cm-editor"])
        .with_child(ElementNode::element(["cm-content"]).with_children(lines))
}

/// Three keyword nodes: resource, variable, resource.
fn keyword_editor() -> ElementNode {
    editor(vec![
        line(&[("cm-keyword", "resource"), ("cm-string", "\"aws_instance\"")]),
        line(&[("cm-keyword", "variable"), ("cm-string", "\"region\"")]),
        line(&[("cm-keyword", "resource"), ("cm-punctuation", "{")]),
    ])
}

const RENDERED_HTML: &str = r#"<!DOCTYPE html>
<html><body>
<div class="cm-editor">
  <div class="cm-scroller">
    <div class="cm-gutters"><div class="cm-gutterElement">1</div></div>
    <div class="cm-content" contenteditable="true">
      <div class="cm-line"><span class="cm-comment"># web tier</span></div>
      <div class="cm-line"><span class="cm-keyword">resource</span> <span class="cm-string">"aws_instance"</span> <span class="cm-string">"web"</span> <span class="cm-punctuation">{</span></div>
      <div class="cm-line">  <span class="cm-property">count</span> <span class="cm-operator">=</span> <span class="cm-number">3</span></div>
      <div class="cm-line"><span class="cm-punctuation">}</span></div>
    </div>
  </div>
</div>
</body></html>"#;

// ─────────────────────────────────────────────────────────────────────────────
// SCANNING
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_keyword_scan_scenario() {
    let tree = keyword_editor();
    let root = Some(&&tree);

    let keywords = scan_by_type(root, TokenType::Keyword);
    assert_eq!(keywords.len(), 3);
    let texts: Vec<String> = keywords.iter().map(|n| n.text_content()).collect();
    assert_eq!(texts, vec!["resource", "variable", "resource"]);

    assert!(contains_text(root, "resource", TokenType::Keyword));
    assert!(!contains_text(root, "output", TokenType::Keyword));
}

#[test]
fn test_absent_root_is_neutral() {
    let root: Option<&&ElementNode> = None;
    let scanner = TreeScanner::default();

    assert!(scanner.scan_by_type(root, TokenType::Keyword).is_empty());
    assert!(scanner.collect_all(root).is_empty());
    assert!(summarize(root).is_empty());
    assert!(!contains_text(root, "resource", TokenType::Keyword));
}

#[test]
fn test_empty_tree_is_neutral() {
    let tree = ElementNode::new();
    let summary = summarize(Some(&&tree));
    assert_eq!(summary.total(), 0);
    assert!(summary.by_type().is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// SUMMARY
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_string_comment_summary_scenario() {
    let tree = editor(vec![
        line(&[("cm-comment", "# note")]),
        line(&[("cm-string", "\"a\""), ("cm-string", "\"b\"")]),
    ]);

    let summary = summarize(Some(&&tree));

    assert_eq!(summary.count(TokenType::String), 2);
    assert_eq!(summary.count(TokenType::Comment), 1);
    assert_eq!(summary.total(), 3);
    assert_eq!(summary.by_type().len(), 2);
    assert_eq!(
        serde_json::to_value(&summary).unwrap(),
        serde_json::json!({"total": 3, "byType": {"string": 2, "comment": 1}})
    );
}

#[test]
fn test_summary_deterministic_100_runs() {
    let tree = keyword_editor();
    let first = summarize(Some(&&tree));

    for i in 1..100 {
        let again = summarize(Some(&&tree));
        assert_eq!(first, again, "Summary must be deterministic (run {} differs)", i);
        assert_eq!(first.fingerprint(), again.fingerprint());
    }
}

#[test]
fn test_summary_tracks_rerender() {
    let mut tree = keyword_editor();
    let before = summarize(Some(&&tree));

    // The renderer replaces the content after an edit.
    tree.clear_children();
    tree.push_child(ElementNode::element(["cm-content"]).with_child(line(&[("cm-comment", "# gone")])));

    let after = summarize(Some(&&tree));
    assert_eq!(before.count(TokenType::Keyword), 3);
    assert_eq!(after.count(TokenType::Keyword), 0);
    assert_eq!(after.count(TokenType::Comment), 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// VERIFICATION
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_keyword_threshold_scenario() {
    let tree = editor(vec![line(&[("cm-keyword", "resource"), ("cm-keyword", "data")])]);
    let expectations = ExpectationSet::from_json(r#"{"hasKeywords": true, "minKeywordCount": 5}"#)
        .unwrap();

    let result = verify(Some(&&tree), &expectations);

    assert!(!result.passed);
    assert!(result
        .failures
        .contains(&"Expected at least 5 keywords, found 2".to_string()));
}

#[test]
fn test_two_independent_failures() {
    let tree = editor(vec![line(&[("cm-keyword", "resource")])]);
    let expectations: ExpectationSet = PartialExpectations::default()
        .expect(TokenType::Keyword, 2)
        .expect(TokenType::Comment, 1)
        .into();

    let result = verify(Some(&&tree), &expectations);
    assert_eq!(result.failures.len(), 2);
}

#[test]
fn test_build_test_case_scenario() {
    let case = build_test_case(
        "t1",
        "resource \"a\" \"b\" {}",
        PartialExpectations {
            has_strings: Some(true),
            ..Default::default()
        },
    );

    let normalized = serde_json::to_value(case.expectations).unwrap();
    assert_eq!(
        normalized,
        serde_json::json!({
            "hasKeywords": false,
            "hasStrings": true,
            "hasComments": false,
            "hasNumbers": false,
            "hasOperators": false,
            "hasPunctuation": false,
            "minKeywordCount": 0,
            "minStringCount": 0,
            "minCommentCount": 0,
            "minNumberCount": 0,
        })
    );

    // An enabled flag with no minimum passes even against an empty tree.
    let empty = ElementNode::new();
    assert_eq!(
        ExpectationEngine::default().verify_test_case(Some(&&empty), &case),
        VerificationResult::pass()
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML DUMPS
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_html_dump_summary() {
    let tree = HtmlTree::parse(RENDERED_HTML).unwrap();
    let root = tree.root();
    let summary = summarize(Some(&root));

    assert_eq!(summary.count(TokenType::Comment), 1);
    assert_eq!(summary.count(TokenType::Keyword), 1);
    assert_eq!(summary.count(TokenType::String), 2);
    assert_eq!(summary.count(TokenType::Punctuation), 2);
    assert_eq!(summary.count(TokenType::Property), 1);
    assert_eq!(summary.count(TokenType::Operator), 1);
    assert_eq!(summary.count(TokenType::Number), 1);
    assert_eq!(summary.total(), 9);
}

#[test]
fn test_html_dump_verification() {
    let tree = HtmlTree::parse(RENDERED_HTML).unwrap();
    let root = tree.root();
    let engine = ExpectationEngine::default();

    let passing = build_test_case(
        "web",
        "",
        PartialExpectations::default()
            .expect(TokenType::Keyword, 1)
            .expect(TokenType::String, 2)
            .expect(TokenType::Comment, 1)
            .expect(TokenType::Number, 1),
    );
    assert!(engine.verify_test_case(Some(&root), &passing).passed);

    let report = engine.verify_keywords(Some(&root), &["resource", "count", "variable"]);
    assert_eq!(report.found, vec!["resource"]);
    assert_eq!(report.missing, vec!["count", "variable"]);

    assert!(engine.scanner().has_syntax_highlighting(Some(&root)));
}

#[test]
fn test_html_dump_custom_prefix_sees_nothing() {
    let tree = HtmlTree::parse(RENDERED_HTML).unwrap();
    let root = tree.root();
    let scanner = TreeScanner::with_policy(MarkerPolicy::new("tok-"));

    assert!(scanner.collect_all(Some(&root)).is_empty());
    assert!(!scanner.has_syntax_highlighting(Some(&root)));
}
