//! Game configuration types.
//!
//! The settings surface is small:
//! - `RoundMode`: letters (upper/lower pairs) or numbers (symbol/count pairs)
//! - `Difficulty`: the two preset pair counts offered by the front-end
//! - `GameConfig`: mode plus pair count, validated before a round is built

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Highest pair count accepted in letters mode.
pub const MAX_LETTER_PAIRS: usize = 13;

/// Highest pair count accepted in numbers mode (numerals 1..=9).
pub const MAX_NUMBER_PAIRS: usize = 9;

/// Which kind of symbols a round is built from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundMode {
    /// Uppercase letter paired with its lowercase form.
    #[default]
    Letters,
    /// Numeral paired with a card showing that many marks.
    Numbers,
}

impl RoundMode {
    /// Largest pair count this mode can produce.
    #[must_use]
    pub const fn max_pairs(self) -> usize {
        match self {
            Self::Letters => MAX_LETTER_PAIRS,
            Self::Numbers => MAX_NUMBER_PAIRS,
        }
    }

    /// Check a pair count against this mode's symbol set.
    pub fn check_pair_count(self, pair_count: usize) -> Result<(), GameError> {
        if pair_count == 0 || pair_count > self.max_pairs() {
            return Err(GameError::InvalidPairCount {
                mode: self,
                requested: pair_count,
                max: self.max_pairs(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for RoundMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Letters => write!(f, "letters"),
            Self::Numbers => write!(f, "numbers"),
        }
    }
}

/// Preset board sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 6 pairs (12 cards).
    #[default]
    Easy,
    /// 9 pairs (18 cards).
    Medium,
}

impl Difficulty {
    /// Number of pairs on the board.
    #[must_use]
    pub const fn pair_count(self) -> usize {
        match self {
            Self::Easy => 6,
            Self::Medium => 9,
        }
    }
}

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use memory_match::core::{Difficulty, GameConfig, RoundMode};
///
/// let config = GameConfig::new()
///     .with_mode(RoundMode::Numbers)
///     .with_difficulty(Difficulty::Medium);
///
/// assert_eq!(config.pair_count, 9);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Symbol set for the round.
    pub mode: RoundMode,

    /// Number of pairs (board holds twice as many cards).
    pub pair_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: RoundMode::Letters,
            pair_count: Difficulty::Easy.pair_count(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration (letters, 6 pairs).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the round mode.
    #[must_use]
    pub fn with_mode(mut self, mode: RoundMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set an explicit pair count.
    #[must_use]
    pub fn with_pair_count(mut self, pair_count: usize) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Set the pair count from a preset.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.pair_count = difficulty.pair_count();
        self
    }

    /// Check that the pair count fits the mode.
    pub fn validate(&self) -> Result<(), GameError> {
        self.mode.check_pair_count(self.pair_count)
    }
}
