//! Deterministic ranking of scored pairs.
//!
//! Pairs sort by descending shared-tag count. Ties are broken by the pair's
//! canonical name key: the lexicographically smaller name first, then the
//! larger one, both ascending. Card names are unique, so no two pairs share
//! a key and the order is total; ranking the same pairs in any input order
//! gives the same output.

use std::cmp::Ordering;

use super::pair::SynergyPair;

/// Ranks scored pairs.
pub struct Ranker;

impl Ranker {
    /// Ranking comparator: shared count descending, then canonical names.
    #[must_use]
    pub fn compare(a: &SynergyPair, b: &SynergyPair) -> Ordering {
        b.shared
            .cmp(&a.shared)
            .then_with(|| a.canonical_names().cmp(&b.canonical_names()))
    }

    /// Sort all pairs.
    #[must_use]
    pub fn rank_all(mut pairs: Vec<SynergyPair>) -> Vec<SynergyPair> {
        pairs.sort_by(Self::compare);
        pairs
    }

    /// The `k` best pairs. `k == 0` yields nothing; `k` beyond the pair
    /// count yields every pair.
    #[must_use]
    pub fn top_k(pairs: Vec<SynergyPair>, k: usize) -> Vec<SynergyPair> {
        if k == 0 {
            return Vec::new();
        }
        let mut ranked = Self::rank_all(pairs);
        ranked.truncate(k);
        ranked
    }

    /// Ranked pairs that include the named card.
    #[must_use]
    pub fn involving(pairs: &[SynergyPair], name: &str) -> Vec<SynergyPair> {
        let matching = pairs.iter().filter(|p| p.involves(name)).cloned().collect();
        Self::rank_all(matching)
    }

    /// Check that a slice is in ranking order.
    #[must_use]
    pub fn is_ranked(pairs: &[SynergyPair]) -> bool {
        pairs
            .windows(2)
            .all(|w| Self::compare(&w[0], &w[1]) != Ordering::Greater)
    }
}
