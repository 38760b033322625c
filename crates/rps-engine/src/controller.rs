//! Match state controller
//!
//! Owns the single [`MatchState`] of a match and is its only writer. A
//! round runs in two steps so the presentation can stage a reveal:
//! [`MatchController::begin_round`] fixes the opponent's move and parks the
//! controller in [`RoundPhase::RoundPending`], [`MatchController::reveal_round`]
//! applies the result and returns to [`RoundPhase::Idle`].
//! [`MatchController::play_round`] does both at once.

use log::{debug, info};
use crate::error::{GameError, Result};
use crate::game::{MatchConfig, MatchState};
use crate::observer::{MatchObserver, StateUpdate};
use crate::random::RandomSource;
use crate::resolve_round;
use crate::strategy::{choose_opponent_move, Difficulty, Move};

/// Busy/idle guard for staged reveals
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundPhase {
    #[default]
    Idle,
    RoundPending,
}

#[derive(Clone, Copy, Debug)]
struct PendingRound {
    player_move: Move,
    opponent_move: Move,
}

pub struct MatchController<R: RandomSource> {
    config: MatchConfig,
    state: MatchState,
    difficulty: Difficulty,
    pending: Option<PendingRound>,
    rng: R,
    observers: Vec<Box<dyn MatchObserver>>,
}

impl<R: RandomSource> MatchController<R> {
    /// Create a controller for a standard match at medium difficulty
    pub fn new(rng: R) -> Self {
        Self::build(MatchConfig::default(), rng)
    }

    /// Create a controller for a custom match; rejects out-of-range lives
    pub fn with_config(config: MatchConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    fn build(config: MatchConfig, rng: R) -> Self {
        Self {
            config,
            state: MatchState::with_lives(config.starting_lives),
            difficulty: config.difficulty,
            pending: None,
            rng,
            observers: Vec::new(),
        }
    }

    /// Register a presentation collaborator
    pub fn subscribe<O: MatchObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn phase(&self) -> RoundPhase {
        if self.pending.is_some() {
            RoundPhase::RoundPending
        } else {
            RoundPhase::Idle
        }
    }

    pub fn is_match_over(&self) -> bool {
        self.state.is_over()
    }

    /// Opponent move already fixed for the pending round, if any
    pub fn pending_opponent_move(&self) -> Option<Move> {
        self.pending.map(|p| p.opponent_move)
    }

    /// Change the difficulty used by rounds started from now on
    pub fn set_difficulty(&mut self, level: Difficulty) {
        if level != self.difficulty {
            debug!("difficulty {} -> {}", self.difficulty, level);
        }
        self.difficulty = level;
    }

    /// Start a round: pick the opponent's move and wait for the reveal
    pub fn begin_round(&mut self, player_move: Move) -> Result<Move> {
        if self.state.is_over() {
            return Err(GameError::MatchAlreadyOver);
        }
        if self.pending.is_some() {
            return Err(GameError::RoundPending);
        }

        let opponent_move = choose_opponent_move(player_move, self.difficulty, &mut self.rng);
        debug!("round begun: {} vs {} ({})", player_move, opponent_move, self.difficulty);
        self.pending = Some(PendingRound { player_move, opponent_move });
        Ok(opponent_move)
    }

    /// Resolve the pending round, apply it and notify observers
    pub fn reveal_round(&mut self) -> Result<StateUpdate> {
        let round = self.pending.take().ok_or(GameError::NoPendingRound)?;

        let outcome = resolve_round(round.player_move, round.opponent_move);
        self.state.apply(outcome.winner);

        let update = StateUpdate {
            outcome,
            state: self.state,
            match_over: self.state.is_over(),
        };
        debug!(
            "round resolved: winner={:?} score={}-{} lives={}-{}",
            update.outcome.winner,
            self.state.player_score,
            self.state.opponent_score,
            self.state.player_lives,
            self.state.opponent_lives,
        );
        if let Some(verdict) = self.state.verdict() {
            info!("match over: {}", verdict);
        }

        for observer in self.observers.iter_mut() {
            observer.on_update(&update);
        }
        Ok(update)
    }

    /// Play a full round with no reveal delay
    pub fn play_round(&mut self, player_move: Move) -> Result<StateUpdate> {
        self.begin_round(player_move)?;
        self.reveal_round()
    }

    /// Start a fresh match, discarding any pending round
    pub fn reset(&mut self) {
        self.state = MatchState::with_lives(self.config.starting_lives);
        self.pending = None;
        info!("match reset at {} difficulty", self.difficulty);

        for observer in self.observers.iter_mut() {
            observer.on_reset(&self.state);
        }
    }
}
