//! Declarative highlighting expectations.
//!
//! ## Flags and thresholds
//!
//! | Flag | Threshold | Token type |
//! |------|-----------|------------|
//! | `hasKeywords` | `minKeywordCount` | keyword |
//! | `hasStrings` | `minStringCount` | string |
//! | `hasComments` | `minCommentCount` | comment |
//! | `hasNumbers` | `minNumberCount` | number |
//! | `hasOperators` | none | operator |
//! | `hasPunctuation` | none | punctuation |
//!
//! A flag without a threshold (or with threshold 0) documents intent only and
//! can never fail a verification.

use serde::{Deserialize, Serialize};

use super::token::TokenType;

/// Caller-supplied expectations where any field may be missing.
///
/// Normalized into an [`ExpectationSet`] by filling absent flags with `false`
/// and absent thresholds with `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialExpectations {
    /// Keywords should be highlighted.
    pub has_keywords: Option<bool>,
    /// Strings should be highlighted.
    pub has_strings: Option<bool>,
    /// Comments should be highlighted.
    pub has_comments: Option<bool>,
    /// Numbers should be highlighted.
    pub has_numbers: Option<bool>,
    /// Operators should be highlighted.
    pub has_operators: Option<bool>,
    /// Punctuation should be highlighted.
    pub has_punctuation: Option<bool>,
    /// Minimum keyword nodes.
    pub min_keyword_count: Option<usize>,
    /// Minimum string nodes.
    pub min_string_count: Option<usize>,
    /// Minimum comment nodes.
    pub min_comment_count: Option<usize>,
    /// Minimum number nodes.
    pub min_number_count: Option<usize>,
}

impl PartialExpectations {
    /// Enable the flag for `ty` and require at least `min` nodes.
    ///
    /// Types without a threshold slot only have their flag enabled.
    pub fn expect(mut self, ty: TokenType, min: usize) -> Self {
        match ty {
            TokenType::Keyword => {
                self.has_keywords = Some(true);
                self.min_keyword_count = Some(min);
            }
            TokenType::String => {
                self.has_strings = Some(true);
                self.min_string_count = Some(min);
            }
            TokenType::Comment => {
                self.has_comments = Some(true);
                self.min_comment_count = Some(min);
            }
            TokenType::Number => {
                self.has_numbers = Some(true);
                self.min_number_count = Some(min);
            }
            TokenType::Operator => self.has_operators = Some(true),
            TokenType::Punctuation => self.has_punctuation = Some(true),
            _ => {}
        }
        self
    }
}

/// One thresholded check derived from an expectation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdCheck {
    /// Token type being counted.
    pub token_type: TokenType,
    /// Whether the flag is enabled.
    pub enabled: bool,
    /// Minimum number of nodes required when enabled.
    pub min_count: usize,
}

/// Fully normalized expectations: every flag and threshold is present.
///
/// Immutable once constructed; read through accessors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PartialExpectations")]
pub struct ExpectationSet {
    has_keywords: bool,
    has_strings: bool,
    has_comments: bool,
    has_numbers: bool,
    has_operators: bool,
    has_punctuation: bool,
    min_keyword_count: usize,
    min_string_count: usize,
    min_comment_count: usize,
    min_number_count: usize,
}

impl From<PartialExpectations> for ExpectationSet {
    fn from(partial: PartialExpectations) -> Self {
        Self {
            has_keywords: partial.has_keywords.unwrap_or(false),
            has_strings: partial.has_strings.unwrap_or(false),
            has_comments: partial.has_comments.unwrap_or(false),
            has_numbers: partial.has_numbers.unwrap_or(false),
            has_operators: partial.has_operators.unwrap_or(false),
            has_punctuation: partial.has_punctuation.unwrap_or(false),
            min_keyword_count: partial.min_keyword_count.unwrap_or(0),
            min_string_count: partial.min_string_count.unwrap_or(0),
            min_comment_count: partial.min_comment_count.unwrap_or(0),
            min_number_count: partial.min_number_count.unwrap_or(0),
        }
    }
}

impl ExpectationSet {
    /// Thresholded token types in evaluation order.
    pub const CHECKED_TYPES: [TokenType; 4] = [
        TokenType::Keyword,
        TokenType::String,
        TokenType::Comment,
        TokenType::Number,
    ];

    /// Normalize a partial expectation object.
    pub fn normalize(partial: PartialExpectations) -> Self {
        partial.into()
    }

    /// Parse from a JSON object; missing fields default to `false`/`0`.
    pub fn from_json(json: &str) -> Result<Self, ExpectationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether the flag for `ty` is enabled.
    pub fn is_enabled(&self, ty: TokenType) -> bool {
        match ty {
            TokenType::Keyword => self.has_keywords,
            TokenType::String => self.has_strings,
            TokenType::Comment => self.has_comments,
            TokenType::Number => self.has_numbers,
            TokenType::Operator => self.has_operators,
            TokenType::Punctuation => self.has_punctuation,
            _ => false,
        }
    }

    /// Minimum count for `ty` (0 for types without a threshold slot).
    pub fn min_count(&self, ty: TokenType) -> usize {
        match ty {
            TokenType::Keyword => self.min_keyword_count,
            TokenType::String => self.min_string_count,
            TokenType::Comment => self.min_comment_count,
            TokenType::Number => self.min_number_count,
            _ => 0,
        }
    }

    /// Thresholded checks in evaluation order.
    pub fn checks(&self) -> impl Iterator<Item = ThresholdCheck> + '_ {
        Self::CHECKED_TYPES.into_iter().map(move |ty| ThresholdCheck {
            token_type: ty,
            enabled: self.is_enabled(ty),
            min_count: self.min_count(ty),
        })
    }
}

/// Error decoding an expectation object.
#[derive(Debug, thiserror::Error)]
pub enum ExpectationError {
    /// Malformed JSON or wrongly typed field.
    #[error("Invalid expectations: {0}")]
    Json(#[from] serde_json::Error),
}

/// A named highlighting scenario: code to render plus its expectations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Test case name.
    pub name: String,
    /// Source code handed to the renderer.
    pub code: String,
    /// Normalized expectations.
    pub expectations: ExpectationSet,
}

impl TestCase {
    /// Build a test case, normalizing the partial expectations.
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        expectations: PartialExpectations,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            expectations: expectations.into(),
        }
    }
}
