//! Canonical token types emitted by the editor's highlighter.

use serde::{Deserialize, Serialize};

/// Canonical category of a highlighted code fragment.
///
/// Declaration order is the canonical order: classification, summaries and
/// expectation checks all walk types in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Language keywords (`resource`, `variable`, ...).
    Keyword,
    /// String literals.
    String,
    /// Line and block comments.
    Comment,
    /// Numeric literals.
    Number,
    /// Operators (`=`, `+`, `*`, ...).
    Operator,
    /// Braces, brackets, commas.
    Punctuation,
    /// Attribute names inside blocks.
    Property,
    /// Variable references.
    Variable,
    /// `true` / `false`.
    Bool,
    /// Atoms and other constants.
    Atom,
    /// Definitions.
    Def,
    /// Builtin functions and types.
    Builtin,
    /// Meta information (shebangs, annotations).
    Meta,
    /// Type names.
    Type,
    /// Brackets, when the mode tags them separately from punctuation.
    Bracket,
    /// Markup tag names.
    Tag,
    /// Markup attribute names.
    Attribute,
}

impl TokenType {
    /// Every known token type, in canonical order.
    pub const ALL: [TokenType; 17] = [
        Self::Keyword,
        Self::String,
        Self::Comment,
        Self::Number,
        Self::Operator,
        Self::Punctuation,
        Self::Property,
        Self::Variable,
        Self::Bool,
        Self::Atom,
        Self::Def,
        Self::Builtin,
        Self::Meta,
        Self::Type,
        Self::Bracket,
        Self::Tag,
        Self::Attribute,
    ];

    /// Canonical lowercase name, as used in class markers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::String => "string",
            Self::Comment => "comment",
            Self::Number => "number",
            Self::Operator => "operator",
            Self::Punctuation => "punctuation",
            Self::Property => "property",
            Self::Variable => "variable",
            Self::Bool => "bool",
            Self::Atom => "atom",
            Self::Def => "def",
            Self::Builtin => "builtin",
            Self::Meta => "meta",
            Self::Type => "type",
            Self::Bracket => "bracket",
            Self::Tag => "tag",
            Self::Attribute => "attribute",
        }
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known token type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown token type: {0}")]
pub struct ParseTokenTypeError(pub String);

impl std::str::FromStr for TokenType {
    type Err = ParseTokenTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|ty| ty.as_str() == lowered)
            .ok_or_else(|| ParseTokenTypeError(s.to_string()))
    }
}
