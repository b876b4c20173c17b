//! Serializable view of a session for rendering.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::RoundMode;
use crate::engine::{MatchEngine, Tally, TurnPhase};

/// A card as it should currently be drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub card: Card,
    pub face_up: bool,
    pub matched: bool,
}

/// Board state at one point in time.
///
/// Plain data: the presentation layer can diff two snapshots or ship one
/// across a process boundary as JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub mode: RoundMode,
    pub pair_count: usize,
    pub phase: TurnPhase,
    pub tally: Tally,
    pub progress: f32,
    /// Cards in board order.
    pub cards: Vec<CardView>,
}

impl SessionSnapshot {
    pub(crate) fn capture(engine: &MatchEngine) -> Self {
        let round = engine.round();
        let turn = engine.turn();

        let cards = round
            .iter()
            .map(|card| CardView {
                card: card.clone(),
                face_up: engine.is_face_up(card.id.as_str()),
                matched: turn.is_matched(card.id.as_str()),
            })
            .collect();

        Self {
            mode: round.mode(),
            pair_count: round.pair_count(),
            phase: engine.phase(),
            tally: engine.tally(),
            progress: engine.tally().progress(round.pair_count()),
            cards,
        }
    }

    /// Ids of cards currently face-up, in board order.
    pub fn face_up_ids(&self) -> impl Iterator<Item = &str> {
        self.cards
            .iter()
            .filter(|view| view.face_up)
            .map(|view| view.card.id.as_str())
    }
}
