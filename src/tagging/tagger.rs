//! Card tagger.

use super::rules::PatternRuleSet;
use super::tag_set::TagSet;

/// Applies a rule set to effect text.
///
/// Cards matching no rule receive the `{"universal"}` fallback, so the
/// result is always a valid, non-empty `TagSet`.
///
/// ## Example
///
/// ```
/// use joker_synergy::tagging::{PatternRuleSet, RuleSpec, Tagger};
///
/// let rules = PatternRuleSet::new(vec![RuleSpec::keyword("flush", "flush")]).unwrap();
/// let tagger = Tagger::new(&rules);
///
/// assert!(tagger.tag("Flush bonus").contains("flush"));
/// assert!(tagger.tag("no relation").is_universal());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Tagger<'r> {
    rules: &'r PatternRuleSet,
}

impl<'r> Tagger<'r> {
    /// Create a tagger over a rule set.
    #[must_use]
    pub fn new(rules: &'r PatternRuleSet) -> Self {
        Self { rules }
    }

    /// The rule set this tagger applies.
    #[must_use]
    pub fn rules(&self) -> &'r PatternRuleSet {
        self.rules
    }

    /// Tag a single effect text.
    #[must_use]
    pub fn tag(&self, effect: &str) -> TagSet {
        let matched = self.rules.evaluate(effect);
        if matched.is_empty() {
            TagSet::universal()
        } else {
            TagSet::from_matches(matched)
        }
    }
}

impl Tagger<'static> {
    /// Tagger over the built-in taxonomy.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(PatternRuleSet::builtin())
    }
}
