//! Card system: input rows, tagged cards, and the catalog.
//!
//! ## Key Types
//!
//! - `CardRow`: one row of the scraped joker table
//! - `CardType`: effect category, with passthrough for unknown labels
//! - `Card`: a row after tagging, immutable from then on
//! - `Catalog`: tagged cards in input order with lookup by name

pub mod card_type;
pub mod catalog;
pub mod definition;

pub use card_type::CardType;
pub use catalog::Catalog;
pub use definition::{Card, CardRow};
