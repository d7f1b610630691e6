//! Joker effect categories.
//!
//! The scraped card table labels each joker with the kind of bonus it gives.
//! Known labels map to variants; anything else is kept verbatim in
//! `CardType::Other` so unusual rows pass through instead of failing.
//!
//! ## Accepted Labels
//!
//! | Variant                | Label                     | Legend code |
//! |------------------------|---------------------------|-------------|
//! | `Chips`                | Chips                     | `+c`        |
//! | `AdditiveMult`         | Additive Mult             | `+m`        |
//! | `MultiplicativeMult`   | Multiplicative Mult       | `Xm`        |
//! | `ChipsAndAdditiveMult` | Chips and Additive Mult   | `++`        |
//! | `Effect`               | Effect                    | `!!`        |
//! | `Retrigger`            | Retrigger                 | `...`       |
//! | `Economy`              | Economy                   | `+$`        |

use serde::{Deserialize, Serialize};

/// Effect category of a joker.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CardType {
    Chips,
    AdditiveMult,
    MultiplicativeMult,
    ChipsAndAdditiveMult,
    Effect,
    Retrigger,
    Economy,
    /// Unrecognized label, kept unchanged.
    Other(String),
}

impl CardType {
    /// Normalize a raw label. Never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let label = raw.trim();
        match label.to_ascii_lowercase().as_str() {
            "chips" | "+c" => CardType::Chips,
            "additive mult" | "+m" => CardType::AdditiveMult,
            "multiplicative mult" | "xm" => CardType::MultiplicativeMult,
            "chips and additive mult" | "chips & additive mult" | "++" => {
                CardType::ChipsAndAdditiveMult
            }
            "effect" | "!!" => CardType::Effect,
            "retrigger" | "..." => CardType::Retrigger,
            "economy" | "+$" => CardType::Economy,
            _ => CardType::Other(raw.to_string()),
        }
    }

    /// Canonical label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            CardType::Chips => "Chips",
            CardType::AdditiveMult => "Additive Mult",
            CardType::MultiplicativeMult => "Multiplicative Mult",
            CardType::ChipsAndAdditiveMult => "Chips and Additive Mult",
            CardType::Effect => "Effect",
            CardType::Retrigger => "Retrigger",
            CardType::Economy => "Economy",
            CardType::Other(raw) => raw,
        }
    }

    /// True for labels that were not recognized.
    #[must_use]
    pub fn is_other(&self) -> bool {
        matches!(self, CardType::Other(_))
    }
}

impl Default for CardType {
    fn default() -> Self {
        CardType::Other(String::new())
    }
}

impl From<String> for CardType {
    fn from(raw: String) -> Self {
        CardType::parse(&raw)
    }
}

impl From<&str> for CardType {
    fn from(raw: &str) -> Self {
        CardType::parse(raw)
    }
}

impl From<CardType> for String {
    fn from(card_type: CardType) -> Self {
        card_type.label().to_string()
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!(CardType::parse("Chips"), CardType::Chips);
        assert_eq!(CardType::parse("additive mult"), CardType::AdditiveMult);
        assert_eq!(CardType::parse("Multiplicative Mult"), CardType::MultiplicativeMult);
        assert_eq!(CardType::parse("Chips and Additive Mult"), CardType::ChipsAndAdditiveMult);
        assert_eq!(CardType::parse(" Effect "), CardType::Effect);
        assert_eq!(CardType::parse("Retrigger"), CardType::Retrigger);
        assert_eq!(CardType::parse("Economy"), CardType::Economy);
    }

    #[test]
    fn test_parse_legend_codes() {
        assert_eq!(CardType::parse("+c"), CardType::Chips);
        assert_eq!(CardType::parse("Xm"), CardType::MultiplicativeMult);
        assert_eq!(CardType::parse("++"), CardType::ChipsAndAdditiveMult);
        assert_eq!(CardType::parse("..."), CardType::Retrigger);
        assert_eq!(CardType::parse("+$"), CardType::Economy);
    }

    #[test]
    fn test_unknown_passes_through_unchanged() {
        let card_type = CardType::parse("  Weird Thing");
        assert_eq!(card_type, CardType::Other("  Weird Thing".to_string()));
        assert_eq!(card_type.label(), "  Weird Thing");
        assert!(card_type.is_other());
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&CardType::AdditiveMult).unwrap();
        assert_eq!(json, r#""Additive Mult""#);

        let parsed: CardType = serde_json::from_str(r#""Xm""#).unwrap();
        assert_eq!(parsed, CardType::MultiplicativeMult);

        let other: CardType = serde_json::from_str(r#""Mystery""#).unwrap();
        assert_eq!(other, CardType::Other("Mystery".into()));
    }
}
