//! Tag sets assigned to cards.
//!
//! A `TagSet` is never empty. Cards that match no rule carry exactly the
//! reserved [`UNIVERSAL_TAG`], and that tag never appears next to any other.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::SynergyError;

/// Fallback tag for cards matching no rule.
pub const UNIVERSAL_TAG: &str = "universal";

/// Set of tag names, kept in rule order for display.
///
/// Membership is what matters for scoring and equality; the order is only
/// the order in which the rules that fired were declared.
///
/// Deserialization validates the list: it must be non-empty, and
/// [`UNIVERSAL_TAG`] may only appear alone.
///
/// ## Example
///
/// ```
/// use joker_synergy::tagging::TagSet;
///
/// let tags = TagSet::from_matches(["flush", "mult"]);
/// assert!(tags.contains("flush"));
/// assert!(!tags.is_universal());
///
/// let none = TagSet::from_matches(Vec::<String>::new());
/// assert!(none.is_universal());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet {
    tags: SmallVec<[String; 4]>,
}

impl TagSet {
    /// The singleton `{"universal"}` set.
    #[must_use]
    pub fn universal() -> Self {
        let mut tags = SmallVec::new();
        tags.push(UNIVERSAL_TAG.to_string());
        Self { tags }
    }

    /// Build a set from matched tag names, falling back to `{"universal"}`
    /// when nothing matched. Repeated names are kept once, and the fallback
    /// tag is dropped when any real tag is present.
    #[must_use]
    pub fn from_matches<I, S>(matches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tags: SmallVec<[String; 4]> = SmallVec::new();
        for tag in matches {
            let tag = tag.into();
            if tag != UNIVERSAL_TAG && !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        if tags.is_empty() {
            Self::universal()
        } else {
            Self { tags }
        }
    }

    /// Check whether the set contains a tag.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// True when the card matched no rule.
    #[must_use]
    pub fn is_universal(&self) -> bool {
        self.tags.len() == 1 && self.tags[0] == UNIVERSAL_TAG
    }

    /// Number of tags. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Always false; present for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate over tag names in rule order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Count tags present in both sets.
    #[must_use]
    pub fn shared_count(&self, other: &TagSet) -> usize {
        self.tags.iter().filter(|t| other.contains(t)).count()
    }
}

impl PartialEq for TagSet {
    fn eq(&self, other: &Self) -> bool {
        // Entries are unique, so equal length plus containment is set equality.
        self.tags.len() == other.tags.len() && self.iter().all(|t| other.contains(t))
    }
}

impl Eq for TagSet {}

impl TryFrom<Vec<String>> for TagSet {
    type Error = SynergyError;

    fn try_from(list: Vec<String>) -> Result<Self, Self::Error> {
        if list.is_empty() {
            return Err(SynergyError::InvalidTagSet {
                reason: "tag list is empty".to_string(),
            });
        }
        if list.iter().any(|t| t.trim().is_empty()) {
            return Err(SynergyError::InvalidTagSet {
                reason: "tag list contains a blank tag".to_string(),
            });
        }
        if list.len() > 1 && list.iter().any(|t| t == UNIVERSAL_TAG) {
            return Err(SynergyError::InvalidTagSet {
                reason: format!("'{}' cannot be combined with other tags", UNIVERSAL_TAG),
            });
        }
        Ok(Self::from_matches(list))
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.tags.into_vec()
    }
}

impl std::fmt::Display for TagSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.tags.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_matches_fall_back_to_universal() {
        let tags = TagSet::from_matches(Vec::<&str>::new());
        assert!(tags.is_universal());
        assert_eq!(tags.len(), 1);
        assert!(tags.contains(UNIVERSAL_TAG));
    }

    #[test]
    fn test_duplicates_collapse() {
        let tags = TagSet::from_matches(["flush", "mult", "flush"]);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["flush", "mult"]);
    }

    #[test]
    fn test_shared_count() {
        let a = TagSet::from_matches(["flush", "mult", "hearts"]);
        let b = TagSet::from_matches(["hearts", "chips", "flush"]);
        assert_eq!(a.shared_count(&b), 2);
        assert_eq!(b.shared_count(&a), 2);
        assert_eq!(a.shared_count(&TagSet::universal()), 0);
    }

    #[test]
    fn test_display() {
        let tags = TagSet::from_matches(["flush", "mult"]);
        assert_eq!(tags.to_string(), "{flush, mult}");
    }

    #[test]
    fn test_serializes_as_list() {
        let tags = TagSet::from_matches(["flush", "mult"]);
        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#"["flush","mult"]"#);

        let back: TagSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tags);
    }

    #[test]
    fn test_universal_dropped_next_to_real_tags() {
        let tags = TagSet::from_matches(["universal", "flush"]);
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["flush"]);
        assert!(!tags.contains(UNIVERSAL_TAG));

        assert!(TagSet::from_matches([UNIVERSAL_TAG]).is_universal());
    }

    #[test]
    fn test_deserialize_rejects_invalid_lists() {
        assert!(serde_json::from_str::<TagSet>("[]").is_err());
        assert!(serde_json::from_str::<TagSet>(r#"["universal","flush"]"#).is_err());
        assert!(serde_json::from_str::<TagSet>(r#"["flush",""]"#).is_err());

        let universal: TagSet = serde_json::from_str(r#"["universal"]"#).unwrap();
        assert!(universal.is_universal());

        let repeated: TagSet = serde_json::from_str(r#"["flush","flush"]"#).unwrap();
        assert_eq!(repeated.len(), 1);
    }

    #[test]
    fn test_equality_ignores_order() {
        let ab = TagSet::from_matches(["flush", "mult"]);
        let ba = TagSet::from_matches(["mult", "flush"]);
        assert_eq!(ab, ba);
        assert_ne!(ab, TagSet::from_matches(["flush"]));
        assert_ne!(ab, TagSet::from_matches(["flush", "chips"]));
    }
}
