//! Scoring and analysis configuration.

use serde::{Deserialize, Serialize};

/// Pair scorer configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Catalog size at which rows are scored on the rayon pool.
    /// Smaller catalogs are scored on the calling thread.
    pub parallel_threshold: usize,

    /// Allow parallel scoring at all.
    pub parallel: bool,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 256,
            parallel: true,
        }
    }
}

impl ScorerConfig {
    /// Always score on the calling thread.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Set the parallel threshold.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Enable or disable parallel scoring.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Whether a catalog of `cards` cards is scored in parallel.
    #[must_use]
    pub fn runs_parallel(&self, cards: usize) -> bool {
        self.parallel && cards >= self.parallel_threshold
    }
}

/// End-to-end analysis configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of top pairs kept in the report (default: 5).
    pub top_k: usize,

    /// Pair scorer settings.
    #[serde(default)]
    pub scorer: ScorerConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            scorer: ScorerConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Set the number of top pairs.
    #[must_use]
    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = k;
        self
    }

    /// Set the scorer configuration.
    #[must_use]
    pub fn with_scorer(mut self, scorer: ScorerConfig) -> Self {
        self.scorer = scorer;
        self
    }
}
