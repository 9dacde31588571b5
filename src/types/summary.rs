//! Aggregate highlighting counts for a tree snapshot.

use std::collections::BTreeMap;

use serde::Serialize;

use super::token::TokenType;
use crate::canonical::canonical_hash_hex;

/// Per-type and total counts of classified nodes in a tree snapshot.
///
/// Only types that occur at least once appear in `by_type`. The total is
/// fixed at construction and always equals the sum of the per-type counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    total: usize,
    by_type: BTreeMap<TokenType, usize>,
}

impl Summary {
    /// Build a summary from per-type counts. Zero counts are dropped.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (TokenType, usize)>,
    {
        let mut by_type: BTreeMap<TokenType, usize> = BTreeMap::new();
        for (ty, count) in counts {
            if count > 0 {
                *by_type.entry(ty).or_insert(0) += count;
            }
        }
        let total = by_type.values().sum();
        Self { total, by_type }
    }

    /// Total number of classified nodes, summed over all types.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Count for a single type (0 when the type never occurred).
    pub fn count(&self, ty: TokenType) -> usize {
        self.by_type.get(&ty).copied().unwrap_or(0)
    }

    /// Per-type counts in canonical type order.
    pub fn by_type(&self) -> &BTreeMap<TokenType, usize> {
        &self.by_type
    }

    /// True if no classified node was seen.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Stable hash of the summary contents.
    ///
    /// Two summaries of an unchanged tree always share a fingerprint.
    pub fn fingerprint(&self) -> String {
        canonical_hash_hex(self)
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "total={}", self.total)?;
        for (ty, count) in &self.by_type {
            write!(f, " {}={}", ty, count)?;
        }
        Ok(())
    }
}
