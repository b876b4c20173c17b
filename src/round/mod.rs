//! Round generation.
//!
//! - `RoundGenerator`: builds the pairs for a mode and shuffles them
//! - `Round`: the shuffled cards, with lookup by id and by partner

mod board;
mod generator;

pub use board::Round;
pub use generator::RoundGenerator;
