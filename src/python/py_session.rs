//! Session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameConfig, GameError, RoundMode};
use crate::session::GameSession;

use super::py_core::{PyCard, PyMatchEvent};

fn parse_mode(mode: &str) -> PyResult<RoundMode> {
    match mode {
        "letters" => Ok(RoundMode::Letters),
        "numbers" => Ok(RoundMode::Numbers),
        other => Err(PyErr::new::<PyValueError, _>(format!(
            "unknown mode {:?} (expected \"letters\" or \"numbers\")",
            other
        ))),
    }
}

fn to_py_err(err: GameError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Python wrapper for GameSession.
#[pyclass(name = "GameSession")]
pub struct PyGameSession {
    inner: GameSession,
}

#[pymethods]
impl PyGameSession {
    /// Create a new session.
    ///
    /// # Arguments
    /// - mode: "letters" or "numbers"
    /// - pair_count: pairs on the board (letters: 1-13, numbers: 1-9)
    /// - seed: RNG seed; omit for an OS-seeded session
    #[new]
    #[pyo3(signature = (mode = "letters", pair_count = 6, seed = None))]
    fn new(mode: &str, pair_count: usize, seed: Option<u64>) -> PyResult<Self> {
        let config = GameConfig::new()
            .with_mode(parse_mode(mode)?)
            .with_pair_count(pair_count);

        let inner = match seed {
            Some(seed) => GameSession::with_seed(config, seed),
            None => GameSession::new(config),
        }
        .map_err(to_py_err)?;

        Ok(Self { inner })
    }

    /// Reveal a card by id. Returns the events produced (empty if ignored).
    fn reveal(&mut self, card_id: &str) -> Vec<PyMatchEvent> {
        self.inner
            .reveal(card_id)
            .into_iter()
            .map(PyMatchEvent)
            .collect()
    }

    /// Turn a displayed mismatch face-down. Returns the two ids, or None.
    fn resolve_mismatch(&mut self) -> Option<(String, String)> {
        self.inner
            .resolve_mismatch()
            .map(|(first, second)| (first.to_string(), second.to_string()))
    }

    /// Discard the current round and deal a new one.
    #[pyo3(signature = (mode = "letters", pair_count = 6))]
    fn start_new_round(&mut self, mode: &str, pair_count: usize) -> PyResult<Vec<PyCard>> {
        let round = self
            .inner
            .start_new_round(parse_mode(mode)?, pair_count)
            .map_err(to_py_err)?;
        Ok(round.iter().cloned().map(PyCard).collect())
    }

    /// Play again with the current settings.
    fn restart(&mut self) -> PyResult<Vec<PyCard>> {
        let round = self.inner.restart().map_err(to_py_err)?;
        Ok(round.iter().cloned().map(PyCard).collect())
    }

    /// Cards in board order.
    #[getter]
    fn cards(&self) -> Vec<PyCard> {
        self.inner.round().iter().cloned().map(PyCard).collect()
    }

    fn is_face_up(&self, card_id: &str) -> bool {
        self.inner.engine().is_face_up(card_id)
    }

    #[getter]
    fn phase(&self) -> String {
        self.inner.phase().to_string()
    }

    #[getter]
    fn matches(&self) -> u32 {
        self.inner.tally().matches
    }

    #[getter]
    fn attempts(&self) -> u32 {
        self.inner.tally().attempts
    }

    #[getter]
    fn pair_count(&self) -> usize {
        self.inner.config().pair_count
    }

    #[getter]
    fn progress(&self) -> f32 {
        self.inner.progress()
    }

    #[getter]
    fn is_complete(&self) -> bool {
        self.inner.is_complete()
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.inner.seed()
    }

    fn __repr__(&self) -> String {
        let tally = self.inner.tally();
        format!(
            "GameSession(mode={}, pairs={}, matches={}, attempts={}, phase={})",
            self.inner.config().mode,
            self.inner.config().pair_count,
            tally.matches,
            tally.attempts,
            self.inner.phase()
        )
    }
}
