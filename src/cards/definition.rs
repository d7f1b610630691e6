//! Card rows and tagged cards.
//!
//! `CardRow` is one row of the scraped joker table, exactly as the upstream
//! cleanup step hands it over. `Card` is the same row after tagging: the
//! descriptive fields are carried through unchanged and the effect text has
//! been classified into a `TagSet`.

use serde::{Deserialize, Serialize};

use crate::tagging::{TagSet, Tagger};

use super::card_type::CardType;

/// Raw input row.
///
/// Every field except `name` may be missing; a missing `effect` is treated
/// as empty text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRow {
    pub name: String,
    #[serde(default)]
    pub effect: Option<String>,
    #[serde(default)]
    pub cost: String,
    #[serde(default)]
    pub rarity: String,
    #[serde(default)]
    pub unlock_requirement: String,
    #[serde(default, rename = "type")]
    pub card_type: CardType,
    #[serde(default)]
    pub activation: String,
}

impl CardRow {
    /// Create a row with a name and effect text.
    #[must_use]
    pub fn new(name: impl Into<String>, effect: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            effect: Some(effect.into()),
            ..Self::default()
        }
    }

    /// Set the cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: impl Into<String>) -> Self {
        self.cost = cost.into();
        self
    }

    /// Set the rarity (builder pattern).
    #[must_use]
    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = rarity.into();
        self
    }

    /// Set the effect category (builder pattern).
    #[must_use]
    pub fn with_type(mut self, card_type: impl Into<CardType>) -> Self {
        self.card_type = card_type.into();
        self
    }

    /// Set the unlock requirement (builder pattern).
    #[must_use]
    pub fn with_unlock(mut self, requirement: impl Into<String>) -> Self {
        self.unlock_requirement = requirement.into();
        self
    }

    /// Set the activation timing (builder pattern).
    #[must_use]
    pub fn with_activation(mut self, activation: impl Into<String>) -> Self {
        self.activation = activation.into();
        self
    }

    /// Effect text, empty when missing.
    #[must_use]
    pub fn effect_text(&self) -> &str {
        self.effect.as_deref().unwrap_or("")
    }
}

/// A tagged card.
///
/// Built once from a `CardRow` and never mutated afterwards.
///
/// ## Example
///
/// ```
/// use joker_synergy::cards::{Card, CardRow};
/// use joker_synergy::tagging::Tagger;
///
/// let row = CardRow::new("Droll Joker", "+10 Mult if played hand contains a Flush")
///     .with_cost("$6");
/// let card = Card::from_row(row, &Tagger::builtin());
///
/// assert!(card.tags.contains("flush"));
/// assert_eq!(card.cost_value(), Some(6));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique card name.
    pub name: String,

    /// Effect text, the only input to tagging.
    pub effect: String,

    pub cost: String,
    pub rarity: String,
    pub unlock_requirement: String,

    #[serde(rename = "type")]
    pub card_type: CardType,

    pub activation: String,

    /// Tags assigned from the effect text.
    pub tags: TagSet,
}

impl Card {
    /// Tag a row.
    #[must_use]
    pub fn from_row(row: CardRow, tagger: &Tagger<'_>) -> Self {
        let effect = row.effect.unwrap_or_default();
        let tags = tagger.tag(&effect);
        Self {
            name: row.name,
            effect,
            cost: row.cost,
            rarity: row.rarity,
            unlock_requirement: row.unlock_requirement,
            card_type: row.card_type,
            activation: row.activation,
            tags,
        }
    }

    /// Numeric part of the cost, e.g. `"$5"` -> 5.
    #[must_use]
    pub fn cost_value(&self) -> Option<u32> {
        let digits: String = self
            .cost
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }

    /// True when the card matched no rule.
    #[must_use]
    pub fn is_synergy_less(&self) -> bool {
        self.tags.is_universal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_builder() {
        let row = CardRow::new("Joker", "+4 Mult")
            .with_cost("$2")
            .with_rarity("Common")
            .with_type("+m")
            .with_unlock("Available from start")
            .with_activation("Independent");

        assert_eq!(row.effect_text(), "+4 Mult");
        assert_eq!(row.card_type, CardType::AdditiveMult);
        assert_eq!(row.rarity, "Common");
    }

    #[test]
    fn test_missing_effect_is_empty() {
        let row: CardRow = serde_json::from_str(r#"{"name": "Blank"}"#).unwrap();
        assert_eq!(row.effect, None);
        assert_eq!(row.effect_text(), "");

        let card = Card::from_row(row, &Tagger::builtin());
        assert_eq!(card.effect, "");
        assert!(card.is_synergy_less());
    }

    #[test]
    fn test_null_effect_is_empty() {
        let row: CardRow = serde_json::from_str(r#"{"name": "Blank", "effect": null}"#).unwrap();
        assert_eq!(row.effect_text(), "");
    }

    #[test]
    fn test_fields_carried_through() {
        let row = CardRow::new("Greedy Joker", "Played cards with Diamond suit give +3 Mult")
            .with_cost("$5")
            .with_rarity("Common")
            .with_type("Strange Label");
        let card = Card::from_row(row, &Tagger::builtin());

        assert_eq!(card.name, "Greedy Joker");
        assert_eq!(card.rarity, "Common");
        assert_eq!(card.card_type, CardType::Other("Strange Label".into()));
        assert!(card.tags.contains("diamonds"));
    }

    #[test]
    fn test_cost_value() {
        let card = Card::from_row(CardRow::new("A", "").with_cost("$10"), &Tagger::builtin());
        assert_eq!(card.cost_value(), Some(10));

        let card = Card::from_row(CardRow::new("B", "").with_cost("free"), &Tagger::builtin());
        assert_eq!(card.cost_value(), None);
    }

    #[test]
    fn test_row_deserializes_type_field() {
        let row: CardRow = serde_json::from_str(
            r#"{"name": "Joker", "effect": "+4 Mult", "cost": "$2", "type": "Additive Mult"}"#,
        )
        .unwrap();
        assert_eq!(row.card_type, CardType::AdditiveMult);
    }

    #[test]
    fn test_card_json_keeps_tag_invariant() {
        let card = Card::from_row(CardRow::new("Blank", ""), &Tagger::builtin());
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
        assert!(back.tags.is_universal());

        let emptied = json.replace(r#""tags":["universal"]"#, r#""tags":[]"#);
        assert_ne!(emptied, json);
        assert!(serde_json::from_str::<Card>(&emptied).is_err());
    }
}
