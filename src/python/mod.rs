//! Python bindings for the memory-match core.
//!
//! Lets a scripted front-end drive a session without reimplementing the
//! rules.
//!
//! # Quick Start
//!
//! ```python
//! import memory_match as mm
//!
//! session = mm.GameSession(mode="numbers", pair_count=6, seed=42)
//!
//! for event in session.reveal("num-3"):
//!     print(event.kind)
//!
//! events = session.reveal("count-5")
//! if any(e.kind == "mismatch_found" for e in events):
//!     session.resolve_mismatch()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

/// memory_match: core of a memory-matching card game.
#[pymodule]
fn memory_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyMatchEvent>()?;
    m.add_class::<PyGameSession>()?;

    Ok(())
}
