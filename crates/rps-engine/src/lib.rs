//! Round engine for Rock-Paper-Scissors
//!
//! Core game logic for the browser Rock-Paper-Scissors game: opponent move
//! selection, round adjudication and match bookkeeping.
//! This crate is compiled to:
//! - Native (for tests and native front ends)
//! - WASM (for the browser page)

mod error;
mod random;
mod strategy;
mod game;
mod observer;
mod controller;
mod preferences;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{GameError, Result};
pub use random::{seed_from_f64, RandomSource, ScriptedRng, SeededRng};
pub use strategy::{choose_opponent_move, describe_difficulty, Difficulty, Move};
pub use game::{MatchConfig, MatchState, RoundOutcome, Winner, STARTING_LIVES};
pub use observer::{MatchObserver, NoopObserver, RecordingObserver, StateUpdate, UpdateView};
pub use controller::{MatchController, RoundPhase};
pub use preferences::{MemoryStore, PreferenceStore, Preferences, DIFFICULTY_KEY, SOUND_KEY};

/// Phrase for a winning pairing, keyed by the winning move
fn action_phrase(winning_move: Move) -> &'static str {
    match winning_move {
        Move::Rock => "Rock smashes Scissors",
        Move::Paper => "Paper wraps Rock",
        Move::Scissors => "Scissors cuts Paper",
    }
}

/// Adjudicate one round
pub fn resolve_round(player_move: Move, opponent_move: Move) -> RoundOutcome {
    let (winner, description) = if player_move == opponent_move {
        (Winner::None, String::new())
    } else if player_move.beats(opponent_move) {
        (Winner::Player, action_phrase(player_move).to_string())
    } else {
        (Winner::Opponent, action_phrase(opponent_move).to_string())
    };

    RoundOutcome { player_move, opponent_move, winner, description }
}
