//! Card types.
//!
//! - `CardId`: string identity, unique within a round
//! - `Card`: face value, variant, and the id of its partner

pub mod card;

pub use card::{Card, CardId, CardValue, CardVariant};
