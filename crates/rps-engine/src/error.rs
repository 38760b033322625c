//! Error taxonomy for the round engine

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid move {0:?}: expected rock, paper or scissors")]
    InvalidMove(String),

    #[error("invalid difficulty {0:?}: expected easy, medium or hard")]
    InvalidDifficulty(String),

    #[error("starting lives must be between 1 and 5, got {0}")]
    InvalidStartingLives(u8),

    #[error("match is already over; reset before playing again")]
    MatchAlreadyOver,

    #[error("a round is already awaiting reveal")]
    RoundPending,

    #[error("no round is awaiting reveal")]
    NoPendingRound,
}

pub type Result<T> = std::result::Result<T, GameError>;
