//! Scored card pairs.

use serde::{Deserialize, Serialize};

/// An unordered pair of distinct cards and the number of tags they share.
///
/// `first` is the card that comes earlier in catalog order. The pair has no
/// identity beyond its two names; it is recomputed from the catalog on demand.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SynergyPair {
    pub first: String,
    pub second: String,
    pub shared: usize,
}

impl SynergyPair {
    /// Create a scored pair.
    pub fn new(first: impl Into<String>, second: impl Into<String>, shared: usize) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            shared,
        }
    }

    /// Names ordered lexicographically, independent of catalog order.
    #[must_use]
    pub fn canonical_names(&self) -> (&str, &str) {
        if self.first <= self.second {
            (&self.first, &self.second)
        } else {
            (&self.second, &self.first)
        }
    }

    /// Check whether a card is one side of this pair.
    #[must_use]
    pub fn involves(&self, name: &str) -> bool {
        self.first == name || self.second == name
    }

    /// The other card of the pair, if `name` is one side of it.
    #[must_use]
    pub fn partner_of(&self, name: &str) -> Option<&str> {
        if self.first == name {
            Some(&self.second)
        } else if self.second == name {
            Some(&self.first)
        } else {
            None
        }
    }

    /// `(first, second, shared)` tuple for reporting.
    #[must_use]
    pub fn to_tuple(&self) -> (String, String, usize) {
        (self.first.clone(), self.second.clone(), self.shared)
    }
}

impl std::fmt::Display for SynergyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {} ({})", self.first, self.second, self.shared)
    }
}
