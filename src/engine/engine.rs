//! The match engine: reveal handling, lock protocol, outcome evaluation.
//!
//! ## Turn protocol
//!
//! ```text
//! Idle --reveal--> OneRevealed --reveal--> (resolving)
//!                                            |-- match ----> Idle | Complete
//!                                            '-- mismatch -> Locked --resolve_mismatch--> Idle
//! ```
//!
//! Anything the engine cannot act on (locked board, same card twice, matched
//! card, card from another round, finished round) is ignored and yields no
//! events.

use tracing::{debug, info, trace};

use crate::cards::{Card, CardId};
use crate::round::Round;

use super::event::{Events, MatchEvent};
use super::state::{Tally, TurnPhase, TurnState};

/// Owns one round and its turn state.
///
/// Cloning is cheap (the round and matched set are persistent structures),
/// which is what `GameSession::snapshot` relies on.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    round: Round,
    turn: TurnState,
    tally: Tally,
}

impl MatchEngine {
    /// Start tracking a freshly generated round.
    #[must_use]
    pub fn new(round: Round) -> Self {
        Self {
            round,
            turn: TurnState::new(),
            tally: Tally::default(),
        }
    }

    /// The round being played.
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Current turn state.
    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Current counters.
    #[must_use]
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Pair count as reported in events.
    fn pair_total(&self) -> u32 {
        self.round.pair_count() as u32
    }

    /// Have all pairs been found?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tally.matches >= self.pair_total()
    }

    /// Observable phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if self.is_complete() {
            TurnPhase::Complete
        } else if self.turn.locked {
            TurnPhase::Locked
        } else if self.turn.first_revealed.is_some() {
            TurnPhase::OneRevealed
        } else {
            TurnPhase::Idle
        }
    }

    /// Should the presentation layer draw this card face-up?
    #[must_use]
    pub fn is_face_up(&self, id: &str) -> bool {
        self.turn.is_matched(id) || self.turn.is_revealed(id)
    }

    /// Reveal a card.
    ///
    /// Returns the events produced, in order. An empty list means the reveal
    /// was ignored and state is unchanged.
    pub fn reveal(&mut self, id: &str) -> Events {
        let mut events = Events::new();

        if let Some(reason) = self.reject_reason(id) {
            trace!(card = id, reason, "reveal ignored");
            return events;
        }

        let Some(card) = self.round.card(id).cloned() else {
            return events;
        };

        let Some(first) = self.turn.first_revealed.clone() else {
            debug!(card = %card.id, "card flipped");
            self.turn.first_revealed = Some(card.clone());
            events.push(MatchEvent::CardFlipped { card });
            return events;
        };

        self.turn.second_revealed = Some(card.clone());
        self.turn.locked = true;
        self.tally.attempts += 1;
        debug!(attempts = self.tally.attempts, "attempt recorded");
        events.push(MatchEvent::AttemptRecorded {
            attempts: self.tally.attempts,
        });

        self.evaluate(&first, &card, &mut events);
        events
    }

    /// Turn a mismatched pair back face-down and release the lock.
    ///
    /// Returns the ids of the two cards to hide, or `None` if no mismatch was
    /// pending.
    pub fn resolve_mismatch(&mut self) -> Option<(CardId, CardId)> {
        if !self.turn.locked {
            trace!("resolve_mismatch with nothing pending");
            return None;
        }

        let first = self.turn.first_revealed.take()?;
        let second = self.turn.second_revealed.take()?;
        self.turn.clear_revealed();

        debug!(first = %first.id, second = %second.id, "mismatch resolved");
        Some((first.id, second.id))
    }

    fn reject_reason(&self, id: &str) -> Option<&'static str> {
        if self.is_complete() {
            Some("round complete")
        } else if self.turn.locked {
            Some("board locked")
        } else if !self.round.contains(id) {
            Some("card not in round")
        } else if self.turn.is_matched(id) {
            Some("card already matched")
        } else if self.turn.is_revealed(id) {
            Some("card already revealed")
        } else {
            None
        }
    }

    fn evaluate(&mut self, first: &Card, second: &Card, events: &mut Events) {
        if !first.matches(second) {
            debug!(first = %first.id, second = %second.id, "mismatch found");
            events.push(MatchEvent::MismatchFound);
            return;
        }

        self.turn.matched_ids.insert(first.id.clone());
        self.turn.matched_ids.insert(second.id.clone());
        self.tally.matches += 1;
        debug!(
            first = %first.id,
            second = %second.id,
            matches = self.tally.matches,
            "match found"
        );
        events.push(MatchEvent::MatchFound {
            matches: self.tally.matches,
            pair_count: self.pair_total(),
        });

        if self.is_complete() {
            info!(attempts = self.tally.attempts, "round complete");
            events.push(MatchEvent::RoundComplete {
                attempts: self.tally.attempts,
            });
        }

        self.turn.clear_revealed();
    }
}
