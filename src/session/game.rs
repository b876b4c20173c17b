//! Game session: configuration, generator, and the current round's engine.

use tracing::info;

use crate::cards::CardId;
use crate::core::{GameConfig, GameError, RoundMode};
use crate::engine::{Events, MatchEngine, Tally, TurnPhase};
use crate::round::{Round, RoundGenerator};

use super::snapshot::SessionSnapshot;

/// One player's game.
///
/// All mutable game state lives here; starting a new round replaces the
/// engine wholesale, so nothing carries over between rounds.
///
/// ## Example
///
/// ```
/// use memory_match::{GameConfig, GameSession, MatchEvent, RoundMode};
///
/// let config = GameConfig::new().with_mode(RoundMode::Letters).with_pair_count(1);
/// let mut session = GameSession::with_seed(config, 3).unwrap();
///
/// session.reveal("upper-A");
/// let events = session.reveal("lower-a");
///
/// assert_eq!(events.last(), Some(&MatchEvent::RoundComplete { attempts: 1 }));
/// assert!(session.is_complete());
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    generator: RoundGenerator,
    engine: MatchEngine,
    rounds_started: u32,
}

impl GameSession {
    /// Start a session with an OS-seeded generator.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_generator(config, RoundGenerator::from_entropy())
    }

    /// Start a session with a fixed seed (reproducible rounds).
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_generator(config, RoundGenerator::new(seed))
    }

    /// Start a session around an existing generator.
    pub fn with_generator(
        config: GameConfig,
        mut generator: RoundGenerator,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let round = generator.generate(config.mode, config.pair_count)?;
        info!(mode = %config.mode, pair_count = config.pair_count, "session started");

        Ok(Self {
            config,
            generator,
            engine: MatchEngine::new(round),
            rounds_started: 1,
        })
    }

    /// Replace the current round with a new one.
    ///
    /// On error the current round is left untouched.
    pub fn start_new_round(
        &mut self,
        mode: RoundMode,
        pair_count: usize,
    ) -> Result<&Round, GameError> {
        let config = self.config.with_mode(mode).with_pair_count(pair_count);
        config.validate()?;

        let round = self.generator.generate(mode, pair_count)?;
        self.config = config;
        self.engine = MatchEngine::new(round);
        self.rounds_started += 1;
        info!(round = self.rounds_started, %mode, pair_count, "new round started");

        Ok(self.engine.round())
    }

    /// Play again with the current settings.
    pub fn restart(&mut self) -> Result<&Round, GameError> {
        let GameConfig { mode, pair_count } = self.config;
        self.start_new_round(mode, pair_count)
    }

    /// Forward a reveal to the engine.
    pub fn reveal(&mut self, id: impl AsRef<str>) -> Events {
        self.engine.reveal(id.as_ref())
    }

    /// Settle a displayed mismatch; see [`MatchEngine::resolve_mismatch`].
    pub fn resolve_mismatch(&mut self) -> Option<(CardId, CardId)> {
        self.engine.resolve_mismatch()
    }

    /// Settings of the current round.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// The current round.
    #[must_use]
    pub fn round(&self) -> &Round {
        self.engine.round()
    }

    /// The current engine.
    #[must_use]
    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Current match and attempt counters.
    #[must_use]
    pub fn tally(&self) -> Tally {
        self.engine.tally()
    }

    /// Observable turn phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.engine.phase()
    }

    /// Have all pairs been found?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.engine.is_complete()
    }

    /// Fraction of pairs found.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.engine.tally().progress(self.config.pair_count)
    }

    /// Rounds started in this session, including the first.
    #[must_use]
    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    /// Seed of the round generator.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }

    /// Everything the presentation layer needs to redraw the board.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.engine)
    }
}
