//! Card catalog.
//!
//! The `Catalog` stores every tagged joker in input order and provides
//! O(1) lookup by name. Names must be unique and non-empty; a duplicate
//! is a construction error, never silently dropped.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::error::{Result, SynergyError};
use crate::report::TagCensus;
use crate::tagging::{PatternRuleSet, Tagger, UNIVERSAL_TAG};

use super::definition::{Card, CardRow};

/// Tagged cards indexed by name.
///
/// ## Example
///
/// ```
/// use joker_synergy::cards::{Catalog, CardRow};
/// use joker_synergy::tagging::{PatternRuleSet, RuleSpec};
///
/// let rules = PatternRuleSet::new(vec![RuleSpec::keyword("flush", "flush")]).unwrap();
/// let catalog = Catalog::build(
///     vec![CardRow::new("A", "flush bonus"), CardRow::new("B", "no relation")],
///     &rules,
/// ).unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert!(catalog.get("B").unwrap().tags.is_universal());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: Vec<Card>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Tag every row and index the result.
    ///
    /// Fails with `DuplicateKey` when two rows share a name and with
    /// `EmptyName` when a row has a blank name.
    pub fn build(rows: impl IntoIterator<Item = CardRow>, rules: &PatternRuleSet) -> Result<Self> {
        let tagger = Tagger::new(rules);
        let mut cards = Vec::new();
        let mut index = FxHashMap::default();

        for (row_number, row) in rows.into_iter().enumerate() {
            if row.name.trim().is_empty() {
                return Err(SynergyError::EmptyName { row: row_number });
            }
            if index.contains_key(&row.name) {
                return Err(SynergyError::DuplicateKey { name: row.name });
            }
            if row.card_type.is_other() && !row.card_type.label().is_empty() {
                warn!(card = %row.name, card_type = %row.card_type, "unrecognized card type");
            }

            let card = Card::from_row(row, &tagger);
            index.insert(card.name.clone(), cards.len());
            cards.push(card);
        }

        debug!(
            cards = cards.len(),
            synergy_less = cards.iter().filter(|c| c.is_synergy_less()).count(),
            "built catalog"
        );

        Ok(Self { cards, index })
    }

    /// Build with the built-in taxonomy.
    pub fn build_builtin(rows: impl IntoIterator<Item = CardRow>) -> Result<Self> {
        Self::build(rows, PatternRuleSet::builtin())
    }

    /// Parse rows from a JSON array and build.
    pub fn from_json(json: &str, rules: &PatternRuleSet) -> Result<Self> {
        let rows: Vec<CardRow> = serde_json::from_str(json)?;
        Self::build(rows, rules)
    }

    /// All cards in input order.
    #[must_use]
    pub fn all(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by name.
    pub fn get(&self, name: &str) -> Result<&Card> {
        self.index
            .get(name)
            .map(|&i| &self.cards[i])
            .ok_or_else(|| SynergyError::NotFound {
                name: name.to_string(),
            })
    }

    /// Check if a name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Position of a card in input order.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Cards whose tags do not include `tag`, in input order.
    pub fn filter_excluding<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Card> + 'a {
        self.cards.iter().filter(move |c| !c.tags.contains(tag))
    }

    /// Cards tagged exactly `{"universal"}`.
    pub fn synergy_less(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.tags.is_universal())
    }

    /// Cards that matched at least one rule.
    pub fn synergistic(&self) -> impl Iterator<Item = &Card> {
        self.filter_excluding(UNIVERSAL_TAG)
    }

    /// Tag name to card count.
    #[must_use]
    pub fn tag_census(&self) -> TagCensus {
        TagCensus::from_cards(&self.cards)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in input order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagging::RuleSpec;

    fn flush_rules() -> PatternRuleSet {
        PatternRuleSet::new(vec![RuleSpec::keyword("flush", "flush")]).unwrap()
    }

    fn sample() -> Catalog {
        Catalog::build(
            vec![
                CardRow::new("A", "gains mult for each flush"),
                CardRow::new("B", "flush bonus"),
                CardRow::new("C", "no relation"),
            ],
            &flush_rules(),
        )
        .unwrap()
    }

    #[test]
    fn test_build_and_get() {
        let catalog = sample();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.get("A").unwrap().tags.contains("flush"));
        assert!(catalog.get("C").unwrap().tags.is_universal());
    }

    #[test]
    fn test_get_missing() {
        let catalog = sample();
        let err = catalog.get("Z").unwrap_err();
        assert!(matches!(err, SynergyError::NotFound { ref name } if name == "Z"));
    }

    #[test]
    fn test_all_preserves_order() {
        let catalog = sample();
        let names: Vec<_> = catalog.all().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(catalog.position("C"), Some(2));
    }

    #[test]
    fn test_duplicate_name_fails() {
        let err = Catalog::build(
            vec![CardRow::new("A", "flush"), CardRow::new("A", "other")],
            &flush_rules(),
        )
        .unwrap_err();
        assert!(matches!(err, SynergyError::DuplicateKey { ref name } if name == "A"));
    }

    #[test]
    fn test_empty_name_fails() {
        let err = Catalog::build(vec![CardRow::new(" ", "flush")], &flush_rules()).unwrap_err();
        assert!(matches!(err, SynergyError::EmptyName { row: 0 }));
    }

    #[test]
    fn test_filter_excluding() {
        let catalog = sample();
        let non_flush: Vec<_> = catalog.filter_excluding("flush").map(|c| c.name.as_str()).collect();
        assert_eq!(non_flush, vec!["C"]);

        let tagged: Vec<_> = catalog.synergistic().map(|c| c.name.as_str()).collect();
        assert_eq!(tagged, vec!["A", "B"]);
    }

    #[test]
    fn test_synergy_less() {
        let catalog = sample();
        let names: Vec<_> = catalog.synergy_less().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["C"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::build(Vec::new(), &flush_rules()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.synergy_less().count(), 0);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"name": "A", "effect": "Flush!", "cost": "$4", "rarity": "Common",
             "unlock_requirement": "", "type": "+m", "activation": "On Played"},
            {"name": "B"}
        ]"#;
        let catalog = Catalog::from_json(json, &flush_rules()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("A").unwrap().tags.contains("flush"));
        assert!(catalog.get("B").unwrap().is_synergy_less());
    }
}
