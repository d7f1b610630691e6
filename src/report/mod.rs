//! Report outputs consumed by the reporting layer.
//!
//! ## Outputs
//!
//! - `TagCensus`: tag -> number of cards carrying it
//! - synergy-less list: cards tagged exactly `{"universal"}`
//! - ranked pairs with a top-K slice

pub mod census;

pub use census::{TagCensus, TagCount};

use serde::{Deserialize, Serialize};

use crate::cards::Catalog;
use crate::synergy::{AnalysisConfig, PairwiseSynergyScorer, Ranker, ScoreStats, SynergyPair};

/// Everything the reporting layer needs from one analysis run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SynergyReport {
    /// Cards analysed.
    pub card_count: usize,

    /// Tag census, most common first.
    pub census: TagCensus,

    /// Names of cards that matched no rule, in catalog order.
    pub synergy_less: Vec<String>,

    /// Total pairs scored.
    pub pair_count: usize,

    /// Best pairs, ranked.
    pub top_pairs: Vec<SynergyPair>,

    /// Scoring diagnostics.
    pub stats: ScoreStats,
}

impl SynergyReport {
    /// Score and rank a catalog.
    #[must_use]
    pub fn build(catalog: &Catalog, config: &AnalysisConfig) -> Self {
        let scorer = PairwiseSynergyScorer::with_config(config.scorer.clone());
        let (pairs, stats) = scorer.score_with_stats(catalog);

        Self {
            card_count: catalog.len(),
            census: catalog.tag_census(),
            synergy_less: catalog.synergy_less().map(|c| c.name.clone()).collect(),
            pair_count: pairs.len(),
            top_pairs: Ranker::top_k(pairs, config.top_k),
            stats,
        }
    }
}

impl std::fmt::Display for SynergyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Cards: {}", self.card_count)?;
        writeln!(f)?;
        writeln!(f, "Tag census:")?;
        for row in self.census.iter() {
            writeln!(f, "  {:<24} {}", row.tag, row.cards)?;
        }
        writeln!(f)?;
        writeln!(f, "Synergy-less cards ({}):", self.synergy_less.len())?;
        for name in &self.synergy_less {
            writeln!(f, "  {}", name)?;
        }
        writeln!(f)?;
        writeln!(f, "Top {} of {} pairs:", self.top_pairs.len(), self.pair_count)?;
        for (rank, pair) in self.top_pairs.iter().enumerate() {
            writeln!(f, "  {:>3}. {}", rank + 1, pair)?;
        }
        Ok(())
    }
}
