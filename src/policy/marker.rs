//! Marker policy: how token types are spelled in the renderer's class names.
//!
//! The renderer tags each highlighted span with `<prefix><type>`, e.g.
//! `cm-keyword`. The prefix is a compatibility contract with the renderer and
//! must match exactly.

use serde::{Deserialize, Serialize};

use crate::types::TokenType;
use crate::DEFAULT_MARKER_PREFIX;

/// Class-name convention for token-type markers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarkerPolicy {
    /// Prefix prepended to the token type name.
    pub marker_prefix: String,
}

impl MarkerPolicy {
    /// Create a policy with a custom prefix.
    pub fn new(marker_prefix: impl Into<String>) -> Self {
        Self {
            marker_prefix: marker_prefix.into(),
        }
    }

    /// The canonical marker for a token type.
    pub fn marker(&self, ty: TokenType) -> String {
        format!("{}{}", self.marker_prefix, ty.as_str())
    }

    /// Whether `class` is exactly the marker for `ty`.
    pub fn is_marker_for(&self, class: &str, ty: TokenType) -> bool {
        class
            .strip_prefix(self.marker_prefix.as_str())
            .is_some_and(|rest| rest == ty.as_str())
    }

    /// Whether `class` starts with the marker prefix at all.
    pub fn is_prefixed(&self, class: &str) -> bool {
        class.starts_with(self.marker_prefix.as_str())
    }
}

impl Default for MarkerPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER_PREFIX)
    }
}
