//! Verification outcomes.
//!
//! Verification failure is data, never an error: a failed threshold sets
//! `passed = false` and adds one message per violated expectation.

use serde::{Deserialize, Serialize};

use super::token::TokenType;

/// Outcome of checking one expectation set against one tree snapshot.
///
/// Created fresh per verification call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// True when no expectation was violated.
    pub passed: bool,
    /// One message per violated expectation, in evaluation order.
    pub failures: Vec<String>,
}

impl VerificationResult {
    /// A passing result with no failures.
    pub fn pass() -> Self {
        Self {
            passed: true,
            failures: Vec::new(),
        }
    }

    /// Record a threshold violation.
    pub fn record_shortfall(&mut self, ty: TokenType, threshold: usize, found: usize) {
        self.passed = false;
        self.failures.push(shortfall_message(ty, threshold, found));
    }
}

impl Default for VerificationResult {
    fn default() -> Self {
        Self::pass()
    }
}

/// `Expected at least {threshold} {type}s, found {count}`
pub fn shortfall_message(ty: TokenType, threshold: usize, found: usize) -> String {
    format!("Expected at least {} {}s, found {}", threshold, ty, found)
}

/// Which keywords were found highlighted as keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordReport {
    /// Keywords present in some keyword node, in input order.
    pub found: Vec<String>,
    /// Keywords absent from every keyword node, in input order.
    pub missing: Vec<String>,
}

impl KeywordReport {
    /// True when every requested keyword was found.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}
