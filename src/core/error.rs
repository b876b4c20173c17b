//! Error types for round generation and configuration.

use super::config::RoundMode;

/// Errors that can occur when setting up a round.
///
/// Reveal input is never an error: stale, duplicate or locked reveals are
/// ignored by the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The requested pair count is zero or larger than the mode's symbol set.
    #[error("invalid pair count {requested} for {mode} mode (expected 1..={max})")]
    InvalidPairCount {
        mode: RoundMode,
        requested: usize,
        max: usize,
    },
}
