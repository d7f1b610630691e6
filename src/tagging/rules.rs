//! Pattern rule sets: the synergy taxonomy.
//!
//! A `PatternRuleSet` is an ordered list of `(tag, matcher)` rules compiled
//! once and then shared read-only. The built-in taxonomy lives in a
//! process-wide `LazyLock`; custom taxonomies are loaded from JSON.
//!
//! ## Evaluation
//!
//! Keyword rules are scanned together with a single `RegexSet` pass.
//! Compound rules are tested one by one afterwards. Matched tags are
//! reported in rule declaration order regardless of which pass found them.

use std::sync::LazyLock;

use regex::{RegexSet, RegexSetBuilder};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::error::{Result, SynergyError};

use super::matcher::{Matcher, MatcherSpec};
use super::tag_set::UNIVERSAL_TAG;

/// Declarative rule entry, as found in taxonomy files.
///
/// ```json
/// {"tag": "flush", "kind": "keyword", "pattern": "flush"}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Tag assigned when the matcher fires.
    pub tag: String,

    /// Matcher configuration.
    #[serde(flatten)]
    pub matcher: MatcherSpec,
}

impl RuleSpec {
    /// Create a keyword rule.
    pub fn keyword(tag: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            matcher: MatcherSpec::keyword(pattern),
        }
    }

    /// Create a compound context-and-token rule.
    pub fn compound<C, T>(tag: impl Into<String>, context: C, tokens: T) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            tag: tag.into(),
            matcher: MatcherSpec::compound(context, tokens),
        }
    }
}

/// A compiled rule.
///
/// `evaluate` scans keyword rules through the set-wide `RegexSet`; the
/// per-rule matcher tests one rule on its own, as `explain` does.
#[derive(Clone, Debug)]
pub struct TagRule {
    /// Tag name.
    pub tag: String,
    /// Compiled matcher.
    pub matcher: Matcher,
}

/// Ordered, immutable set of tagging rules.
///
/// ## Example
///
/// ```
/// use joker_synergy::tagging::{PatternRuleSet, RuleSpec};
///
/// let rules = PatternRuleSet::new(vec![
///     RuleSpec::keyword("flush", "flush"),
///     RuleSpec::keyword("mult", r"\bmult\b"),
/// ]).unwrap();
///
/// assert_eq!(rules.evaluate("+4 Mult if hand is a Flush").as_slice(), ["flush", "mult"]);
/// ```
#[derive(Clone, Debug)]
pub struct PatternRuleSet {
    specs: Vec<RuleSpec>,
    rules: Vec<TagRule>,
    keyword_set: RegexSet,
    /// Rule index for each pattern in `keyword_set`.
    keyword_rules: Vec<usize>,
    /// Indices of compound rules.
    compound_rules: Vec<usize>,
}

impl PatternRuleSet {
    /// Compile a rule set.
    ///
    /// Fails on invalid patterns, empty or duplicate tag names, and rules
    /// claiming the reserved `"universal"` tag.
    pub fn new(specs: Vec<RuleSpec>) -> Result<Self> {
        let mut seen = FxHashSet::default();
        let mut rules = Vec::with_capacity(specs.len());
        let mut keyword_patterns = Vec::new();
        let mut keyword_rules = Vec::new();
        let mut compound_rules = Vec::new();

        for (index, spec) in specs.iter().enumerate() {
            let tag = spec.tag.trim();
            if tag.is_empty() {
                return Err(SynergyError::InvalidRule {
                    tag: spec.tag.clone(),
                    reason: format!("rule {} has an empty tag name", index),
                });
            }
            if tag.eq_ignore_ascii_case(UNIVERSAL_TAG) {
                return Err(SynergyError::ReservedTag {
                    tag: tag.to_string(),
                });
            }
            if !seen.insert(tag.to_string()) {
                return Err(SynergyError::DuplicateTag {
                    tag: tag.to_string(),
                });
            }

            let matcher = spec.matcher.compile(tag)?;
            match &spec.matcher {
                MatcherSpec::Keyword { pattern } => {
                    keyword_patterns.push(pattern.as_str());
                    keyword_rules.push(index);
                }
                MatcherSpec::Compound { .. } => compound_rules.push(index),
            }

            rules.push(TagRule {
                tag: tag.to_string(),
                matcher,
            });
        }

        let keyword_set = RegexSetBuilder::new(&keyword_patterns)
            .case_insensitive(true)
            .build()
            .map_err(|e| SynergyError::InvalidRule {
                tag: "keyword set".to_string(),
                reason: e.to_string(),
            })?;

        debug!(
            rules = rules.len(),
            keyword = keyword_rules.len(),
            compound = compound_rules.len(),
            "compiled pattern rule set"
        );

        Ok(Self {
            specs,
            rules,
            keyword_set,
            keyword_rules,
            compound_rules,
        })
    }

    /// Load a rule set from a JSON array of rule entries.
    pub fn from_json(json: &str) -> Result<Self> {
        let specs: Vec<RuleSpec> = serde_json::from_str(json)?;
        Self::new(specs)
    }

    /// The built-in taxonomy, compiled once per process.
    #[must_use]
    pub fn builtin() -> &'static PatternRuleSet {
        &BUILTIN_RULES
    }

    /// Evaluate every rule against effect text.
    ///
    /// Returns the tags of all rules that fired, in declaration order.
    /// An empty result is valid; the fallback is applied by the tagger.
    #[must_use]
    pub fn evaluate(&self, effect: &str) -> SmallVec<[&str; 8]> {
        let mut fired = vec![false; self.rules.len()];

        for hit in self.keyword_set.matches(effect).iter() {
            fired[self.keyword_rules[hit]] = true;
        }
        for &index in &self.compound_rules {
            if self.rules[index].matcher.is_match(effect) {
                fired[index] = true;
            }
        }

        self.rules
            .iter()
            .zip(fired)
            .filter(|(_, hit)| *hit)
            .map(|(rule, _)| rule.tag.as_str())
            .collect()
    }

    /// Rules whose matcher fires on its own against `effect`, in declaration
    /// order. Agrees with `evaluate`, rule by rule.
    pub fn explain<'a>(&'a self, effect: &'a str) -> impl Iterator<Item = &'a TagRule> + 'a {
        self.rules.iter().filter(move |rule| rule.matcher.is_match(effect))
    }

    /// Rules in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[TagRule] {
        &self.rules
    }

    /// The specs this set was compiled from.
    #[must_use]
    pub fn specs(&self) -> &[RuleSpec] {
        &self.specs
    }

    /// Tag names in declaration order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.tag.as_str())
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if the set has no rules (every card becomes universal).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Serialize the specs back to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.specs)?)
    }
}

/// Context phrases shared by the even/odd value rules.
const VALUE_CONTEXT: [&str; 5] = [
    "each played",
    "each card",
    "played cards",
    "cards of value",
    "card with value",
];

const EVEN_TOKENS: [&str; 5] = ["2", "4", "6", "8", "10"];
const ODD_TOKENS: [&str; 5] = ["1", "3", "5", "7", "9"];

/// Keyword rules of the built-in taxonomy.
const BUILTIN_KEYWORDS: &[(&str, &str)] = &[
    // Poker hands
    ("flush", r"flush"),
    ("straight", r"straight"),
    ("pair", r"\bpair\b"),
    ("two pair", r"two pair"),
    ("three of a kind", r"three of a kind"),
    ("four of a kind", r"four of a kind"),
    ("full house", r"full house"),
    ("high card", r"high card"),
    // Suits
    ("hearts", r"\bhearts?\b"),
    ("diamonds", r"\bdiamonds?\b"),
    ("spades", r"\bspades?\b"),
    ("clubs", r"\bclubs?\b"),
    // Ranks
    ("face card", r"face cards?"),
    ("ace", r"\baces?\b"),
    // Scoring
    ("chips", r"\bchips\b"),
    ("mult", r"\bmult\b"),
    ("xmult", r"\bx\s?\d+(?:\.\d+)?\s+mult\b"),
    ("retrigger", r"retrigger"),
    ("scaling", r"this joker gains|gains? \+?x?\d"),
    ("probability", r"\d+ in \d+ chance|probabilit"),
    // Economy
    ("money", r"\$\d+|\bmoney\b|sell value|\bearn\b"),
    ("shop", r"\bshop\b|\breroll"),
    ("discard", r"discard"),
    ("hand size", r"hand size"),
    ("blind", r"\bblind\b"),
    // Consumables
    ("tarot", r"\btarot\b"),
    ("planet", r"\bplanet\b"),
    ("spectral", r"\bspectral\b"),
    // Enhancements
    ("enhanced card", r"\benhance(?:d|ment)"),
    ("stone card", r"stone cards?"),
    ("glass card", r"glass cards?"),
    ("steel card", r"steel cards?"),
    ("gold card", r"gold cards?"),
    ("lucky card", r"lucky cards?"),
    ("wild card", r"wild cards?"),
    ("seal", r"\bseals?\b"),
    // Jokers
    ("joker interaction", r"other jokers?|each joker|joker to the (?:left|right)|copies the ability"),
    ("destroy", r"destroy"),
];

/// Specs of the built-in taxonomy.
#[must_use]
pub fn builtin_specs() -> Vec<RuleSpec> {
    let mut specs: Vec<RuleSpec> = BUILTIN_KEYWORDS
        .iter()
        .map(|(tag, pattern)| RuleSpec::keyword(*tag, *pattern))
        .collect();
    specs.push(RuleSpec::compound("even card synergy", VALUE_CONTEXT, EVEN_TOKENS));
    specs.push(RuleSpec::compound("odd card synergy", VALUE_CONTEXT, ODD_TOKENS));
    specs
}

static BUILTIN_RULES: LazyLock<PatternRuleSet> = LazyLock::new(|| {
    PatternRuleSet::new(builtin_specs()).expect("built-in taxonomy must compile")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_in_declaration_order() {
        let rules = PatternRuleSet::new(vec![
            RuleSpec::keyword("mult", r"\bmult\b"),
            RuleSpec::keyword("flush", "flush"),
        ])
        .unwrap();

        let tags = rules.evaluate("Flush gives +8 Mult");
        assert_eq!(tags.as_slice(), ["mult", "flush"]);
    }

    #[test]
    fn test_evaluate_no_match_is_empty() {
        let rules = PatternRuleSet::new(vec![RuleSpec::keyword("flush", "flush")]).unwrap();
        assert!(rules.evaluate("nothing here").is_empty());
        assert!(rules.evaluate("").is_empty());
    }

    #[test]
    fn test_keyword_and_compound_mix() {
        let rules = PatternRuleSet::new(vec![
            RuleSpec::compound("even card synergy", VALUE_CONTEXT, EVEN_TOKENS),
            RuleSpec::keyword("chips", r"\bchips\b"),
        ])
        .unwrap();

        let tags = rules.evaluate("Each played card with value 8 gives +20 Chips");
        assert_eq!(tags.as_slice(), ["even card synergy", "chips"]);
    }

    #[test]
    fn test_duplicate_tag_rejected() {
        let err = PatternRuleSet::new(vec![
            RuleSpec::keyword("flush", "flush"),
            RuleSpec::keyword("flush", "suit"),
        ])
        .unwrap_err();
        assert!(matches!(err, SynergyError::DuplicateTag { ref tag } if tag == "flush"));
    }

    #[test]
    fn test_reserved_tag_rejected() {
        let err = PatternRuleSet::new(vec![RuleSpec::keyword("Universal", "x")]).unwrap_err();
        assert!(matches!(err, SynergyError::ReservedTag { .. }));
    }

    #[test]
    fn test_empty_tag_rejected() {
        let err = PatternRuleSet::new(vec![RuleSpec::keyword("  ", "x")]).unwrap_err();
        assert!(matches!(err, SynergyError::InvalidRule { .. }));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = PatternRuleSet::new(vec![RuleSpec::keyword("bad", "[a-")]).unwrap_err();
        assert!(matches!(err, SynergyError::InvalidPattern { .. }));
    }

    #[test]
    fn test_empty_rule_set() {
        let rules = PatternRuleSet::new(Vec::new()).unwrap();
        assert!(rules.is_empty());
        assert!(rules.evaluate("flush").is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let json = r#"[
            {"tag": "flush", "kind": "keyword", "pattern": "flush"},
            {"tag": "odd", "kind": "compound", "context": ["each card"], "tokens": ["3"]}
        ]"#;
        let rules = PatternRuleSet::from_json(json).unwrap();
        assert_eq!(rules.tags().collect::<Vec<_>>(), vec!["flush", "odd"]);

        let reloaded = PatternRuleSet::from_json(&rules.to_json().unwrap()).unwrap();
        assert_eq!(reloaded.specs(), rules.specs());
    }

    #[test]
    fn test_builtin_compiles() {
        let rules = PatternRuleSet::builtin();
        assert_eq!(rules.len(), builtin_specs().len());
        assert!(rules.tags().any(|t| t == "even card synergy"));
        assert!(rules.tags().any(|t| t == "odd card synergy"));
        assert!(rules
            .rules()
            .iter()
            .filter(|r| r.tag.ends_with("card synergy"))
            .all(|r| r.matcher.keyword_pattern().is_none()));
    }

    #[test]
    fn test_explain_agrees_with_evaluate() {
        let rules = PatternRuleSet::builtin();
        let effects = [
            "Played cards with Heart suit give +3 Mult when scored",
            "Each played 2, 4, 6, 8 or 10 gives +4 Mult when scored",
            "X3 Mult if played hand contains a Flush",
            "Sell this card to create a free Double Tag",
            "",
        ];

        for effect in effects {
            let explained: Vec<&str> = rules.explain(effect).map(|r| r.tag.as_str()).collect();
            assert_eq!(explained.as_slice(), rules.evaluate(effect).as_slice(), "{}", effect);
        }
    }

    #[test]
    fn test_builtin_samples() {
        let rules = PatternRuleSet::builtin();

        let tags = rules.evaluate("Played cards with Heart suit give +3 Mult when scored");
        assert!(tags.contains(&"hearts"));
        assert!(tags.contains(&"mult"));

        let tags = rules.evaluate("X3 Mult if played hand contains a Straight");
        assert!(tags.contains(&"xmult"));
        assert!(tags.contains(&"straight"));

        let tags = rules.evaluate("Earn $4 at end of round");
        assert!(tags.contains(&"money"));
    }
}
