//! Turn state and tally.
//!
//! ## TurnState
//!
//! Which cards are face-up this turn, whether the board is locked, and which
//! ids are permanently matched. The matched set is an `im::HashSet` so
//! snapshots share structure with the live engine.
//!
//! ## Tally
//!
//! Match and attempt counters for the round.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// Observable phase of a turn.
///
/// The transient "resolving" step (comparing two revealed cards) completes
/// inside a single `reveal` call, so it never shows up here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    /// No card revealed.
    Idle,
    /// One card face-up, waiting for the second.
    OneRevealed,
    /// Mismatch on display; waiting for `resolve_mismatch`.
    Locked,
    /// All pairs found. Terminal until a new round starts.
    Complete,
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::OneRevealed => write!(f, "OneRevealed"),
            Self::Locked => write!(f, "Locked"),
            Self::Complete => write!(f, "Complete"),
        }
    }
}

/// Per-turn reveal state.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TurnState {
    /// First card revealed this turn.
    pub first_revealed: Option<Card>,

    /// Second card revealed this turn (only held while locked).
    pub second_revealed: Option<Card>,

    /// No reveals accepted while set.
    pub locked: bool,

    /// Ids of cards already paired.
    pub matched_ids: ImHashSet<CardId>,
}

impl TurnState {
    /// Fresh state for a new round.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear both revealed cards and release the lock.
    pub fn clear_revealed(&mut self) {
        self.first_revealed = None;
        self.second_revealed = None;
        self.locked = false;
    }

    /// Is this id currently one of the revealed cards?
    #[must_use]
    pub fn is_revealed(&self, id: &str) -> bool {
        let held = |slot: &Option<Card>| slot.as_ref().is_some_and(|c| c.id.as_str() == id);
        held(&self.first_revealed) || held(&self.second_revealed)
    }

    /// Has this id been paired?
    #[must_use]
    pub fn is_matched(&self, id: &str) -> bool {
        self.matched_ids.contains(id)
    }
}

/// Round counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Pairs found.
    pub matches: u32,

    /// Two-card comparisons made.
    pub attempts: u32,
}

impl Tally {
    /// Fraction of pairs found, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, pair_count: usize) -> f32 {
        if pair_count == 0 {
            return 0.0;
        }
        (self.matches as f32 / pair_count as f32).min(1.0)
    }
}
