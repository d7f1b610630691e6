//! Pairwise synergy scoring.
//!
//! Every unordered pair of distinct cards is scored by the number of tags
//! the two cards share. Pairs are enumerated with the classic double loop
//! (`i < j` over catalog order), so each pair appears exactly once and the
//! output order is fixed by the catalog.
//!
//! ## Tag Interning
//!
//! Before scoring, tag names are interned to integer ids and each card's
//! tags become a sorted id list. Intersections are then a linear merge of
//! two short sorted lists instead of string comparisons.
//!
//! ## Parallelism
//!
//! Rows (the outer index) are independent. Large catalogs score rows on the
//! rayon pool and concatenate them in row order, so the output is identical
//! to the sequential path.

use std::time::Instant;

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::cards::Catalog;

use super::config::ScorerConfig;
use super::pair::SynergyPair;
use super::stats::ScoreStats;

type TagIds = SmallVec<[u32; 8]>;

/// Scores all card pairs of a catalog.
///
/// ## Example
///
/// ```
/// use joker_synergy::cards::{Catalog, CardRow};
/// use joker_synergy::synergy::PairwiseSynergyScorer;
/// use joker_synergy::tagging::{PatternRuleSet, RuleSpec};
///
/// let rules = PatternRuleSet::new(vec![RuleSpec::keyword("flush", "flush")]).unwrap();
/// let catalog = Catalog::build(
///     vec![
///         CardRow::new("A", "gains mult for each flush"),
///         CardRow::new("B", "flush bonus"),
///         CardRow::new("C", "no relation"),
///     ],
///     &rules,
/// ).unwrap();
///
/// let pairs = PairwiseSynergyScorer::new().score(&catalog);
/// let scores: Vec<_> = pairs.iter().map(|p| p.shared).collect();
/// assert_eq!(scores, vec![1, 0, 0]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PairwiseSynergyScorer {
    config: ScorerConfig,
}

impl PairwiseSynergyScorer {
    /// Create a scorer with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer with a custom configuration.
    #[must_use]
    pub fn with_config(config: ScorerConfig) -> Self {
        Self { config }
    }

    /// The scorer configuration.
    #[must_use]
    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Score every unordered pair, in enumeration order.
    #[must_use]
    pub fn score(&self, catalog: &Catalog) -> Vec<SynergyPair> {
        self.score_with_stats(catalog).0
    }

    /// Score every unordered pair and collect statistics.
    #[must_use]
    pub fn score_with_stats(&self, catalog: &Catalog) -> (Vec<SynergyPair>, ScoreStats) {
        let start = Instant::now();
        let cards = catalog.all();
        let n = cards.len();
        let (ids, distinct_tags) = intern_tags(catalog);
        let parallel = self.config.runs_parallel(n);

        let row = |i: usize| -> Vec<SynergyPair> {
            (i + 1..n)
                .map(|j| {
                    SynergyPair::new(
                        cards[i].name.as_str(),
                        cards[j].name.as_str(),
                        shared_count(&ids[i], &ids[j]),
                    )
                })
                .collect()
        };

        let pairs: Vec<SynergyPair> = if parallel {
            let rows: Vec<Vec<SynergyPair>> = (0..n).into_par_iter().map(row).collect();
            rows.into_iter().flatten().collect()
        } else {
            (0..n).flat_map(row).collect()
        };

        let stats = ScoreStats {
            cards: n,
            pairs: pairs.len(),
            zero_pairs: pairs.iter().filter(|p| p.shared == 0).count(),
            max_shared: pairs.iter().map(|p| p.shared).max().unwrap_or(0),
            distinct_tags,
            parallel,
            time_us: start.elapsed().as_micros() as u64,
        };

        debug!(cards = n, parallel, "scored catalog rows");
        info!(
            pairs = stats.pairs,
            overlapping = stats.overlapping_pairs(),
            max_shared = stats.max_shared,
            time_us = stats.time_us,
            "pairwise scoring complete"
        );

        (pairs, stats)
    }

    /// Shared-tag count for two named cards.
    ///
    /// Returns `None` if either name is missing. Counts are symmetric.
    #[must_use]
    pub fn score_pair(catalog: &Catalog, a: &str, b: &str) -> Option<usize> {
        let a = catalog.get(a).ok()?;
        let b = catalog.get(b).ok()?;
        Some(a.tags.shared_count(&b.tags))
    }
}

/// Map each card's tags to a sorted list of interned ids.
fn intern_tags(catalog: &Catalog) -> (Vec<TagIds>, usize) {
    let mut interner: FxHashMap<&str, u32> = FxHashMap::default();
    let ids: Vec<TagIds> = catalog
        .iter()
        .map(|card| {
            let mut ids: TagIds = card
                .tags
                .iter()
                .map(|tag| {
                    let next = interner.len() as u32;
                    *interner.entry(tag).or_insert(next)
                })
                .collect();
            ids.sort_unstable();
            ids
        })
        .collect();
    (ids, interner.len())
}

/// Size of the intersection of two sorted, duplicate-free id lists.
fn shared_count(a: &[u32], b: &[u32]) -> usize {
    let (mut i, mut j, mut count) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
        }
    }
    count
}
