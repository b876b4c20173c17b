//! Turn state machine.
//!
//! - `MatchEngine`: accepts reveals, compares pairs, enforces the lock
//! - `TurnState` / `Tally`: what is face-up, what is matched, the counters
//! - `MatchEvent`: outcome notifications for the presentation layer

#[allow(clippy::module_inception)]
mod engine;
mod event;
mod state;

pub use engine::MatchEngine;
pub use event::{Events, MatchEvent};
pub use state::{Tally, TurnPhase, TurnState};
