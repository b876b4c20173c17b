//! Events emitted by the match engine.
//!
//! The presentation layer consumes these to flip cards, update counters,
//! play sounds and show the success screen.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// Something that happened during a reveal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchEvent {
    /// First card of a turn turned face-up.
    CardFlipped { card: Card },

    /// A second card was revealed and a comparison counted.
    AttemptRecorded { attempts: u32 },

    /// The two revealed cards form a pair.
    MatchFound { matches: u32, pair_count: u32 },

    /// The two revealed cards differ. The board stays locked until
    /// `resolve_mismatch` is called.
    MismatchFound,

    /// Every pair has been found.
    RoundComplete { attempts: u32 },
}

/// Events produced by a single call, in emission order.
///
/// A reveal yields at most three (attempt, match, round complete), so they
/// stay inline.
pub type Events = SmallVec<[MatchEvent; 3]>;
