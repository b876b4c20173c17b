//! Round generation: build the pairs for a mode, then shuffle.

use tracing::info;

use crate::cards::Card;
use crate::core::{GameError, GameRng, RoundMode};

use super::board::Round;

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Builds shuffled rounds.
///
/// Owns the RNG so consecutive rounds from the same seed are reproducible.
///
/// ## Example
///
/// ```
/// use memory_match::core::RoundMode;
/// use memory_match::round::RoundGenerator;
///
/// let mut generator = RoundGenerator::new(7);
/// let round = generator.generate(RoundMode::Numbers, 6).unwrap();
///
/// assert_eq!(round.len(), 12);
/// assert!(generator.generate(RoundMode::Numbers, 10).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct RoundGenerator {
    rng: GameRng,
}

impl RoundGenerator {
    /// Create a generator with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create a generator seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    /// Create a generator around an existing RNG.
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Seed of the underlying RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Generate a shuffled round.
    ///
    /// Fails with `InvalidPairCount` before any card is built if the count
    /// is zero or exceeds the mode's symbol set.
    pub fn generate(&mut self, mode: RoundMode, pair_count: usize) -> Result<Round, GameError> {
        mode.check_pair_count(pair_count)?;

        let mut cards = ordered_pairs(mode, pair_count);
        self.rng.shuffle(&mut cards);

        info!(%mode, pair_count, seed = self.rng.seed(), "round generated");
        Ok(Round::from_cards(mode, pair_count, cards))
    }
}

/// Unshuffled pairs, partner adjacent to partner.
///
/// `pair_count` must already be validated against `mode`.
fn ordered_pairs(mode: RoundMode, pair_count: usize) -> Vec<Card> {
    let mut cards = Vec::with_capacity(pair_count * 2);

    match mode {
        RoundMode::Letters => {
            for letter in ALPHABET.chars().take(pair_count) {
                let (upper, lower) = Card::letter_pair(letter);
                cards.push(upper);
                cards.push(lower);
            }
        }
        RoundMode::Numbers => {
            for number in (1u8..).take(pair_count) {
                let (symbol, count) = Card::number_pair(number);
                cards.push(symbol);
                cards.push(count);
            }
        }
    }

    cards
}
