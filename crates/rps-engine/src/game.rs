//! Round outcomes and match state bookkeeping

use serde::{Deserialize, Serialize};
use crate::error::{GameError, Result};
use crate::preferences::Preferences;
use crate::strategy::{Difficulty, Move};

/// Lives each side starts a match with
pub const STARTING_LIVES: u8 = 5;

/// Which side took the round (or the match)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player,
    Opponent,
    None,
}

impl Winner {
    /// The same result seen from the other side of the table
    pub fn flipped(self) -> Winner {
        match self {
            Winner::Player => Winner::Opponent,
            Winner::Opponent => Winner::Player,
            Winner::None => Winner::None,
        }
    }
}

/// Result of a single round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundOutcome {
    pub player_move: Move,
    pub opponent_move: Move,
    pub winner: Winner,
    /// Phrase for the winning pairing, empty on a draw
    pub description: String,
}

impl RoundOutcome {
    pub fn is_draw(&self) -> bool {
        self.winner == Winner::None
    }

    /// One-line result text shown under the hands
    pub fn headline(&self) -> String {
        match self.winner {
            Winner::Player => format!("You win! {}.", self.description),
            Winner::Opponent => format!("You lose! {}.", self.description),
            Winner::None => format!("It's a draw! You both chose {}.", self.player_move),
        }
    }
}

/// Scores and lives for the current match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    pub player_score: u32,
    pub opponent_score: u32,
    pub player_lives: u8,
    pub opponent_lives: u8,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::with_lives(STARTING_LIVES)
    }
}

impl MatchState {
    pub fn with_lives(lives: u8) -> Self {
        Self {
            player_score: 0,
            opponent_score: 0,
            player_lives: lives,
            opponent_lives: lives,
        }
    }

    pub fn is_over(&self) -> bool {
        self.player_lives == 0 || self.opponent_lives == 0
    }

    /// Winner of the match, once it is over
    pub fn match_winner(&self) -> Option<Winner> {
        if self.player_lives == 0 {
            Some(Winner::Opponent)
        } else if self.opponent_lives == 0 {
            Some(Winner::Player)
        } else {
            None
        }
    }

    /// Closing message for a finished match
    pub fn verdict(&self) -> Option<&'static str> {
        self.match_winner().map(|winner| match winner {
            Winner::Opponent => "Game Over! CPU wins!",
            _ => "You win the game!",
        })
    }

    /// Credit the round winner and take a life from the loser
    pub(crate) fn apply(&mut self, winner: Winner) {
        match winner {
            Winner::Player => {
                self.player_score = self.player_score.saturating_add(1);
                self.opponent_lives = self.opponent_lives.saturating_sub(1);
            }
            Winner::Opponent => {
                self.opponent_score = self.opponent_score.saturating_add(1);
                self.player_lives = self.player_lives.saturating_sub(1);
            }
            Winner::None => {}
        }
    }
}

/// Configuration for a match controller
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchConfig {
    pub starting_lives: u8,
    pub difficulty: Difficulty,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { starting_lives: STARTING_LIVES, difficulty: Difficulty::default() }
    }
}

impl MatchConfig {
    /// Standard match at the given difficulty
    pub fn standard(difficulty: Difficulty) -> Self {
        Self { difficulty, ..Self::default() }
    }

    /// Standard match at the difficulty restored from saved preferences
    pub fn from_preferences(prefs: &Preferences) -> Self {
        Self::standard(prefs.difficulty)
    }

    /// Lives must allow at least one round and never exceed the standard count
    pub fn validate(&self) -> Result<()> {
        if (1..=STARTING_LIVES).contains(&self.starting_lives) {
            Ok(())
        } else {
            Err(GameError::InvalidStartingLives(self.starting_lives))
        }
    }
}
