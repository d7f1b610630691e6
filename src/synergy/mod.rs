//! Pairwise synergy scoring and ranking.
//!
//! A synergy between two cards is approximated by the number of tags they
//! share, nothing more.
//!
//! ## Key Types
//!
//! - `SynergyPair`: two card names plus their shared-tag count
//! - `PairwiseSynergyScorer`: scores every unordered pair of a catalog
//! - `Ranker`: deterministic ordering and top-K selection
//! - `ScorerConfig` / `AnalysisConfig`: parallelism and report settings
//! - `ScoreStats`: diagnostics from a scoring pass

pub mod config;
pub mod pair;
pub mod ranker;
pub mod scorer;
pub mod stats;

pub use config::{AnalysisConfig, ScorerConfig};
pub use pair::SynergyPair;
pub use ranker::Ranker;
pub use scorer::PairwiseSynergyScorer;
pub use stats::ScoreStats;
