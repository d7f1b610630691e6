//! Rule matchers.
//!
//! A `MatcherSpec` is the declarative, serializable form of a rule's test.
//! Compiling it yields a `Matcher`, which is what evaluation runs against
//! effect text.
//!
//! ## Matcher Kinds
//!
//! - `Keyword`: a regex that fires when it occurs anywhere in the text
//! - `Compound`: a context phrase AND a word-bounded value token must both occur

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SynergyError};

/// Declarative matcher configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatcherSpec {
    /// Case-insensitive regex searched anywhere in the effect text.
    Keyword { pattern: String },

    /// Fires only when one of `context` occurs as a literal phrase and one of
    /// `tokens` occurs as a whole token.
    Compound {
        context: Vec<String>,
        tokens: Vec<String>,
    },
}

impl MatcherSpec {
    /// Create a keyword matcher spec.
    pub fn keyword(pattern: impl Into<String>) -> Self {
        Self::Keyword {
            pattern: pattern.into(),
        }
    }

    /// Create a compound matcher spec.
    pub fn compound<C, T>(context: C, tokens: T) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self::Compound {
            context: context.into_iter().map(Into::into).collect(),
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Compile into a runnable matcher. `tag` is only used for error reports.
    pub fn compile(&self, tag: &str) -> Result<Matcher> {
        match self {
            MatcherSpec::Keyword { pattern } => {
                if pattern.trim().is_empty() {
                    return Err(invalid(tag, "keyword pattern is blank"));
                }
                Ok(Matcher::Keyword(case_insensitive(tag, pattern)?))
            }
            MatcherSpec::Compound { context, tokens } => {
                if context.is_empty() {
                    return Err(invalid(tag, "compound rule has no context phrases"));
                }
                if tokens.is_empty() {
                    return Err(invalid(tag, "compound rule has no value tokens"));
                }
                // A blank alternative would match anywhere.
                if context.iter().any(|c| c.trim().is_empty()) {
                    return Err(invalid(tag, "compound rule has a blank context phrase"));
                }
                if tokens.iter().any(|t| t.trim().is_empty()) {
                    return Err(invalid(tag, "compound rule has a blank value token"));
                }

                let context_pattern = alternation(context);
                let token_pattern = format!(r"\b(?:{})\b", alternation(tokens));

                Ok(Matcher::Compound {
                    context: case_insensitive(tag, &context_pattern)?,
                    token: case_insensitive(tag, &token_pattern)?,
                })
            }
        }
    }
}

/// A compiled matcher.
#[derive(Clone, Debug)]
pub enum Matcher {
    Keyword(Regex),
    Compound { context: Regex, token: Regex },
}

impl Matcher {
    /// Test the matcher against effect text.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Matcher::Keyword(regex) => regex.is_match(text),
            // Both passes must succeed.
            Matcher::Compound { context, token } => context.is_match(text) && token.is_match(text),
        }
    }

    /// Raw keyword pattern, if this is a keyword matcher.
    #[must_use]
    pub fn keyword_pattern(&self) -> Option<&str> {
        match self {
            Matcher::Keyword(regex) => Some(regex.as_str()),
            Matcher::Compound { .. } => None,
        }
    }
}

fn case_insensitive(tag: &str, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| SynergyError::InvalidPattern {
            tag: tag.to_string(),
            source,
        })
}

fn alternation(items: &[String]) -> String {
    items
        .iter()
        .map(|item| regex::escape(item.trim()))
        .collect::<Vec<_>>()
        .join("|")
}

fn invalid(tag: &str, reason: &str) -> SynergyError {
    SynergyError::InvalidRule {
        tag: tag.to_string(),
        reason: reason.to_string(),
    }
}
