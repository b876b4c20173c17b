//! Card and event bindings for Python.

use pyo3::prelude::*;

use crate::cards::{Card, CardVariant};
use crate::engine::MatchEvent;

fn variant_name(variant: CardVariant) -> &'static str {
    match variant {
        CardVariant::Uppercase => "uppercase",
        CardVariant::Lowercase => "lowercase",
        CardVariant::NumberSymbol => "number-symbol",
        CardVariant::NumberCount => "number-count",
    }
}

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    #[getter]
    fn id(&self) -> String {
        self.0.id.to_string()
    }

    /// Face value as text (`"A"`, `"a"`, `"3"`).
    #[getter]
    fn value(&self) -> String {
        self.0.value.to_string()
    }

    #[getter]
    fn variant(&self) -> &'static str {
        variant_name(self.0.variant)
    }

    #[getter]
    fn match_id(&self) -> String {
        self.0.match_id.to_string()
    }

    /// Marks to draw for count cards, else None.
    #[getter]
    fn marks(&self) -> Option<u8> {
        self.0.marks()
    }

    /// Accessible description of the card face.
    fn label(&self) -> String {
        self.0.label()
    }

    fn __repr__(&self) -> String {
        format!("Card(id={}, match_id={})", self.0.id, self.0.match_id)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for MatchEvent.
///
/// Flattened: `kind` names the event, the other fields are set when the
/// event carries them.
#[pyclass(name = "MatchEvent")]
#[derive(Clone, Debug)]
pub struct PyMatchEvent(pub MatchEvent);

#[pymethods]
impl PyMatchEvent {
    /// One of `card_flipped`, `attempt_recorded`, `match_found`,
    /// `mismatch_found`, `round_complete`.
    #[getter]
    fn kind(&self) -> &'static str {
        match self.0 {
            MatchEvent::CardFlipped { .. } => "card_flipped",
            MatchEvent::AttemptRecorded { .. } => "attempt_recorded",
            MatchEvent::MatchFound { .. } => "match_found",
            MatchEvent::MismatchFound => "mismatch_found",
            MatchEvent::RoundComplete { .. } => "round_complete",
        }
    }

    #[getter]
    fn card(&self) -> Option<PyCard> {
        match &self.0 {
            MatchEvent::CardFlipped { card } => Some(PyCard(card.clone())),
            _ => None,
        }
    }

    #[getter]
    fn attempts(&self) -> Option<u32> {
        match self.0 {
            MatchEvent::AttemptRecorded { attempts } | MatchEvent::RoundComplete { attempts } => {
                Some(attempts)
            }
            _ => None,
        }
    }

    #[getter]
    fn matches(&self) -> Option<u32> {
        match self.0 {
            MatchEvent::MatchFound { matches, .. } => Some(matches),
            _ => None,
        }
    }

    #[getter]
    fn pair_count(&self) -> Option<u32> {
        match self.0 {
            MatchEvent::MatchFound { pair_count, .. } => Some(pair_count),
            _ => None,
        }
    }

    fn __repr__(&self) -> String {
        format!("MatchEvent({:?})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
