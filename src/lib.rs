//! # joker-synergy
//!
//! Pattern-based tagging of joker cards and pairwise synergy ranking.
//!
//! ## Design Principles
//!
//! 1. **Taxonomy as Data**: Tags come from an ordered list of declarative
//!    `(tag, matcher)` rules. Swapping the rule list never touches the
//!    tagger or the scorer.
//!
//! 2. **Never Empty**: Every card carries at least one tag. Cards matching
//!    no rule carry exactly the reserved `"universal"` tag.
//!
//! 3. **Deterministic Output**: Pairs are enumerated in catalog order and
//!    ranked with a total order, so repeated runs give identical results,
//!    parallel or not.
//!
//! ## Pipeline
//!
//! ```text
//! CardRow -> Tagger (PatternRuleSet) -> Catalog -> PairwiseSynergyScorer -> Ranker
//! ```
//!
//! ## Modules
//!
//! - `tagging`: rule specs, compiled rule sets, tag sets and the tagger
//! - `cards`: input rows, tagged cards, and the catalog
//! - `synergy`: pair scoring, ranking, configuration and statistics
//! - `report`: tag census and the combined report
//! - `error`: the crate error type

pub mod cards;
pub mod error;
pub mod report;
pub mod synergy;
pub mod tagging;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::error::{Result, SynergyError};

pub use crate::tagging::{
    MatcherSpec, PatternRuleSet, RuleSpec, TagSet, Tagger, UNIVERSAL_TAG,
};

pub use crate::cards::{Card, CardRow, CardType, Catalog};

pub use crate::synergy::{
    AnalysisConfig, PairwiseSynergyScorer, Ranker, ScoreStats, ScorerConfig, SynergyPair,
};

pub use crate::report::{SynergyReport, TagCensus};
