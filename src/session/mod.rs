//! Game sessions.
//!
//! A `GameSession` is the single owner of everything one player's game
//! needs: settings, the seeded generator, and the current round's engine.
//! The presentation layer maps UI input to `reveal` / `resolve_mismatch`
//! and redraws from `snapshot`.

mod game;
mod snapshot;

pub use game::GameSession;
pub use snapshot::{CardView, SessionSnapshot};
