//! Tag census: how many cards carry each tag.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// One census row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub cards: usize,
}

/// Card counts per tag, most common first.
///
/// Ties are ordered by tag name so the census is reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagCensus {
    counts: Vec<TagCount>,
}

impl TagCensus {
    /// Flatten every card's tags and count them.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut totals: FxHashMap<&str, usize> = FxHashMap::default();
        for card in cards {
            for tag in card.tags.iter() {
                *totals.entry(tag).or_insert(0) += 1;
            }
        }

        let mut counts: Vec<TagCount> = totals
            .into_iter()
            .map(|(tag, cards)| TagCount {
                tag: tag.to_string(),
                cards,
            })
            .collect();
        counts.sort_by(|a, b| b.cards.cmp(&a.cards).then_with(|| a.tag.cmp(&b.tag)));

        Self { counts }
    }

    /// Cards carrying a tag (0 if none).
    #[must_use]
    pub fn get(&self, tag: &str) -> usize {
        self.counts
            .iter()
            .find(|c| c.tag == tag)
            .map_or(0, |c| c.cards)
    }

    /// Rows, most common tag first.
    pub fn iter(&self) -> impl Iterator<Item = &TagCount> {
        self.counts.iter()
    }

    /// Number of distinct tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no tags were counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total tag assignments across all cards.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.cards).sum()
    }
}
