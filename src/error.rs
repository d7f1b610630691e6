//! Error types for catalog construction and taxonomy loading.
//!
//! Tagging, scoring and ranking never fail once their inputs are built;
//! every error here is raised at a construction or lookup boundary.

use thiserror::Error;

/// Errors raised while building a taxonomy or catalog, or looking up cards.
#[derive(Error, Debug)]
pub enum SynergyError {
    /// Two input rows share the same card name.
    #[error("duplicate card name: {name}")]
    DuplicateKey { name: String },

    /// Lookup by a name that is not in the catalog.
    #[error("card not found: {name}")]
    NotFound { name: String },

    /// An input row has an empty name.
    #[error("row {row} has an empty card name")]
    EmptyName { row: usize },

    /// A rule pattern failed to compile.
    #[error("invalid pattern for tag '{tag}': {source}")]
    InvalidPattern {
        tag: String,
        #[source]
        source: regex::Error,
    },

    /// A rule entry is structurally unusable.
    #[error("invalid rule '{tag}': {reason}")]
    InvalidRule { tag: String, reason: String },

    /// Two rules declare the same tag name.
    #[error("duplicate tag in rule set: {tag}")]
    DuplicateTag { tag: String },

    /// A rule tries to claim the fallback tag.
    #[error("tag '{tag}' is reserved for cards matching no rule")]
    ReservedTag { tag: String },

    /// A serialized tag set is empty or mixes the fallback tag with others.
    #[error("invalid tag set: {reason}")]
    InvalidTagSet { reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, SynergyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SynergyError::DuplicateKey { name: "Joker".into() };
        assert_eq!(err.to_string(), "duplicate card name: Joker");

        let err = SynergyError::NotFound { name: "Nope".into() };
        assert_eq!(err.to_string(), "card not found: Nope");

        let err = SynergyError::ReservedTag { tag: "universal".into() };
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<Vec<u32>, _> = serde_json::from_str("[1,");
        let err: SynergyError = parse.unwrap_err().into();
        assert!(matches!(err, SynergyError::Json(_)));
    }
}
