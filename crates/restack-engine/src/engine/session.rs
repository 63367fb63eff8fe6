use std::time::{Duration, Instant};

use chrono::Utc;
use rand::{Rng as _, SeedableRng as _, seq::IndexedRandom as _};
use rand_pcg::Pcg32;

use crate::{
    EmptyTierError, MoveError, SkipError,
    core::{BlockId, Board, BoardShape, Column, Level, LevelCatalog, Move, Tier},
    engine::{RoundRecord, SessionSeed, difficulty, scoring},
};

/// Number of rounds in one session.
pub const SESSION_LENGTH: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Idle,
    RoundInProgress,
    SessionComplete,
}

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    /// The move was applied; the round continues.
    Applied,
    /// The move solved the level. The record is final; the session has
    /// already adapted difficulty and either loaded the next round or
    /// entered [`SessionState::SessionComplete`].
    RoundWon(RoundRecord),
}

#[derive(Debug, Clone)]
struct ActiveRound {
    level: Level,
    board: Board,
    moves_taken: u32,
    started_at: Instant,
}

/// Orchestrates a fixed-length sequence of rounds.
///
/// Each round draws a level uniformly at random from the current difficulty
/// tier's pool, accepts validated moves until the board matches the level's
/// target (or the round is skipped), scores the outcome, and feeds the solve
/// time back into the next round's difficulty.
///
/// All transitions run synchronously on the caller's thread in response to a
/// move or skip request; the only clock is a wall-clock reading per round.
///
/// # Example
///
/// ```
/// use restack_engine::{BoardShape, GameSession, LevelCatalog};
///
/// let mut session =
///     GameSession::new(LevelCatalog::standard(), BoardShape::STANDARD).unwrap();
/// session.start_session();
///
/// let record = session.skip_round().unwrap();
/// assert_eq!(record.score, 0);
/// assert_eq!(session.round(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    catalog: LevelCatalog,
    shape: BoardShape,
    rng: Pcg32,
    state: SessionState,
    round: u32,
    cumulative_score: u32,
    difficulty: Tier,
    current: Option<ActiveRound>,
}

impl GameSession {
    /// Creates a session with a random seed.
    ///
    /// Fails if any catalog tier is empty; a session must always be able to
    /// draw a level for whichever tier adaptation lands on.
    pub fn new(catalog: LevelCatalog, shape: BoardShape) -> Result<Self, EmptyTierError> {
        Self::with_seed(catalog, shape, rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic level draws.
    pub fn with_seed(
        catalog: LevelCatalog,
        shape: BoardShape,
        seed: SessionSeed,
    ) -> Result<Self, EmptyTierError> {
        catalog.validate()?;
        Ok(Self {
            catalog,
            shape,
            rng: Pcg32::from_seed(seed.into_bytes()),
            state: SessionState::Idle,
            round: 0,
            cumulative_score: 0,
            difficulty: Tier::Medium,
            current: None,
        })
    }

    /// Starts (or restarts) a session: round counter and cumulative score
    /// reset, difficulty back to `medium`, round 1 loaded.
    pub fn start_session(&mut self) {
        self.round = 0;
        self.cumulative_score = 0;
        self.difficulty = Tier::Medium;
        self.load_round();
    }

    fn load_round(&mut self) {
        self.round += 1;
        let level = self
            .catalog
            .levels(self.difficulty)
            .choose(&mut self.rng)
            .expect("catalog tiers are validated non-empty at construction")
            .clone();
        let board = Board::from_layout(self.shape, &level.initial);
        self.current = Some(ActiveRound {
            level,
            board,
            moves_taken: 0,
            started_at: Instant::now(),
        });
        self.state = SessionState::RoundInProgress;
    }

    /// Validates and applies one block relocation.
    ///
    /// A rejected move leaves the board and move counter untouched. An
    /// accepted move increments the move counter and runs win detection; see
    /// [`MoveOutcome`].
    pub fn try_move(
        &mut self,
        block: BlockId,
        from: usize,
        to: usize,
    ) -> Result<MoveOutcome, MoveError> {
        let Some(round) = self.current.as_mut() else {
            return Err(MoveError::NoRoundInProgress);
        };
        round.board.apply_move(Move { block, from, to })?;
        round.moves_taken += 1;

        if !round.board.matches(&round.level.target) {
            return Ok(MoveOutcome::Applied);
        }
        let time_taken = round.started_at.elapsed();
        Ok(MoveOutcome::RoundWon(self.finish_round(Some(time_taken))))
    }

    /// Abandons the current round.
    ///
    /// Emits a zero-score record with the skip sentinel, steps difficulty
    /// down one tier, and advances the session exactly like a won round.
    pub fn skip_round(&mut self) -> Result<RoundRecord, SkipError> {
        if self.current.is_none() {
            return Err(SkipError);
        }
        Ok(self.finish_round(None))
    }

    /// Closes out the current round. `time_taken` is `None` for a skip.
    ///
    /// Scoring uses the tier the round was played at; adaptation then picks
    /// the tier for the next draw.
    fn finish_round(&mut self, time_taken: Option<Duration>) -> RoundRecord {
        let round = self
            .current
            .take()
            .expect("finish_round is only reached with a round in progress");

        let score = match time_taken {
            Some(_) => scoring::round_score(self.difficulty, round.moves_taken, round.level.optimal),
            None => 0,
        };
        self.cumulative_score += score;

        let record = RoundRecord {
            timestamp: Utc::now(),
            level_id: round.level.id.clone(),
            difficulty: self.difficulty,
            time_taken_secs: time_taken.map(|t| t.as_secs_f64()),
            moves_taken: round.moves_taken,
            optimal_moves: round.level.optimal,
            score,
        };

        self.difficulty = match time_taken {
            Some(time_taken) => difficulty::tier_after_win(self.difficulty, time_taken),
            None => difficulty::tier_after_skip(self.difficulty),
        };

        if self.round >= SESSION_LENGTH {
            self.state = SessionState::SessionComplete;
        } else {
            self.load_round();
        }
        record
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current round number, `1..=SESSION_LENGTH` once a session has started.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn cumulative_score(&self) -> u32 {
        self.cumulative_score
    }

    #[must_use]
    pub fn difficulty(&self) -> Tier {
        self.difficulty
    }

    /// The live board, when a round is in progress.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.current.as_ref().map(|round| &round.board)
    }

    /// The active level's target layout.
    #[must_use]
    pub fn target(&self) -> Option<&[Column]> {
        self.current.as_ref().map(|round| &*round.level.target)
    }

    #[must_use]
    pub fn level_id(&self) -> Option<&str> {
        self.current.as_ref().map(|round| &*round.level.id)
    }

    #[must_use]
    pub fn optimal_moves(&self) -> Option<u32> {
        self.current.as_ref().map(|round| round.level.optimal)
    }

    #[must_use]
    pub fn moves_taken(&self) -> Option<u32> {
        self.current.as_ref().map(|round| round.moves_taken)
    }

    /// Advisory elapsed time for display. The authoritative `time_taken` is
    /// read once, at the moment of win detection.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.current.as_ref().map(|round| round.started_at.elapsed())
    }
}
