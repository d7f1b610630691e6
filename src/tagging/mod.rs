//! Tagging engine: pattern rules, matchers and the tagger.
//!
//! ## Key Types
//!
//! - `RuleSpec` / `MatcherSpec`: declarative taxonomy entries (JSON-loadable)
//! - `PatternRuleSet`: compiled, immutable, ordered rule list
//! - `Tagger`: applies a rule set to effect text with the universal fallback
//! - `TagSet`: the non-empty set of tags carried by a card

pub mod matcher;
pub mod rules;
pub mod tag_set;
pub mod tagger;

pub use matcher::{Matcher, MatcherSpec};
pub use rules::{builtin_specs, PatternRuleSet, RuleSpec, TagRule};
pub use tag_set::{TagSet, UNIVERSAL_TAG};
pub use tagger::Tagger;
