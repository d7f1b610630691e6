//! Scoring statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected during a scoring pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreStats {
    /// Cards in the scored catalog.
    pub cards: usize,

    /// Pairs produced (n * (n - 1) / 2).
    pub pairs: usize,

    /// Pairs sharing no tag.
    pub zero_pairs: usize,

    /// Highest shared-tag count seen.
    pub max_shared: usize,

    /// Distinct tags across the catalog.
    pub distinct_tags: usize,

    /// Whether rows were scored on the rayon pool.
    pub parallel: bool,

    /// Time spent scoring (microseconds).
    pub time_us: u64,
}

impl ScoreStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs sharing at least one tag.
    #[must_use]
    pub fn overlapping_pairs(&self) -> usize {
        self.pairs.saturating_sub(self.zero_pairs)
    }

    /// Fraction of pairs sharing at least one tag.
    #[must_use]
    pub fn overlap_ratio(&self) -> f64 {
        if self.pairs == 0 {
            0.0
        } else {
            self.overlapping_pairs() as f64 / self.pairs as f64
        }
    }

    /// Pairs scored per second.
    #[must_use]
    pub fn pairs_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.pairs as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = ScoreStats::new();
        assert_eq!(stats.pairs, 0);
        assert_eq!(stats.overlap_ratio(), 0.0);
        assert_eq!(stats.pairs_per_second(), 0.0);
    }

    #[test]
    fn test_overlap_ratio() {
        let stats = ScoreStats {
            pairs: 10,
            zero_pairs: 6,
            ..ScoreStats::default()
        };
        assert_eq!(stats.overlapping_pairs(), 4);
        assert!((stats.overlap_ratio() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_overlap_never_underflows() {
        let stats: ScoreStats =
            serde_json::from_str(r#"{"cards":2,"pairs":1,"zero_pairs":5,"max_shared":0,
                "distinct_tags":1,"parallel":false,"time_us":0}"#)
                .unwrap();
        assert_eq!(stats.overlapping_pairs(), 0);
        assert_eq!(stats.overlap_ratio(), 0.0);
    }

    #[test]
    fn test_pairs_per_second() {
        let stats = ScoreStats {
            pairs: 1000,
            time_us: 1_000_000,
            ..ScoreStats::default()
        };
        assert_eq!(stats.pairs_per_second(), 1000.0);
    }
}
