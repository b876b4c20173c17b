//! # memory-match
//!
//! The rules core of a memory-matching (concentration) card game.
//!
//! A round is a shuffled grid of face-down cards made of pairs. The player
//! reveals two cards per turn; a pair stays face-up, a mismatch is shown and
//! then turned back. The round ends when every pair is found.
//!
//! ## Design Principles
//!
//! 1. **No presentation**: Rendering, animation, audio and accessibility
//!    announcements belong to the caller. The core emits events and exposes
//!    snapshots.
//!
//! 2. **No timers**: A mismatch locks the board until the caller invokes
//!    `resolve_mismatch`, typically after its own visual delay.
//!
//! 3. **Deterministic**: Rounds come from a seeded ChaCha8 stream, so a
//!    session can be replayed from its seed.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Card identity, face value, partner reference
//! - `round`: Round generation (pair building + Fisher–Yates shuffle)
//! - `engine`: Turn state machine and outcome events
//! - `session`: Owned game session and render snapshots

pub mod cards;
pub mod core;
pub mod engine;
pub mod round;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Difficulty, GameConfig, GameError, GameRng, RoundMode};

pub use crate::cards::{Card, CardId, CardValue, CardVariant};

pub use crate::round::{Round, RoundGenerator};

pub use crate::engine::{Events, MatchEngine, MatchEvent, Tally, TurnPhase, TurnState};

pub use crate::session::{CardView, GameSession, SessionSnapshot};
