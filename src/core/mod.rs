//! Core types: RNG, configuration, errors.
//!
//! Nothing in here knows about turns or events; the round generator and the
//! match engine build on top of these.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{Difficulty, GameConfig, RoundMode, MAX_LETTER_PAIRS, MAX_NUMBER_PAIRS};
pub use error::GameError;
pub use rng::GameRng;
