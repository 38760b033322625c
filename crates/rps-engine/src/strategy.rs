//! Moves, difficulty levels and opponent move selection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use crate::error::GameError;
use crate::random::RandomSource;

/// A hand gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The unique move that defeats this one
    pub fn counter(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// Check if this move beats the other
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Paper, Move::Rock)
                | (Move::Scissors, Move::Paper)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            _ => Err(GameError::InvalidMove(s.to_string())),
        }
    }
}

/// How hard the opponent tries to counter the player
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Counters 20% of the time.
    Easy,
    /// Counters 50% of the time.
    #[default]
    Medium,
    /// Counters 80% of the time.
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Probability that the opponent deliberately plays the counter move
    pub fn counter_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.2,
            Difficulty::Medium => 0.5,
            Difficulty::Hard => 0.8,
        }
    }

    /// Opponent "thinking" time for the presentation's timed reveal
    pub fn reaction_delay_ms(self) -> u32 {
        match self {
            Difficulty::Easy => 1000,
            Difficulty::Medium => 600,
            Difficulty::Hard => 300,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(GameError::InvalidDifficulty(s.to_string())),
        }
    }
}

/// Pick the opponent's move for one round
///
/// One sample decides whether to counter `player_move`. When it does not,
/// a second sample picks uniformly from all three moves, which may still
/// happen to be the counter.
pub fn choose_opponent_move<R: RandomSource + ?Sized>(
    player_move: Move,
    difficulty: Difficulty,
    rng: &mut R,
) -> Move {
    if rng.next_unit() < difficulty.counter_probability() {
        return player_move.counter();
    }

    let index = ((rng.next_unit() * Move::ALL.len() as f64) as usize).min(Move::ALL.len() - 1);
    Move::ALL[index]
}

/// Get a human-readable description of a difficulty (used by WASM module)
pub fn describe_difficulty(difficulty: Difficulty) -> String {
    let base_desc = match difficulty {
        Difficulty::Easy => "A relaxed opponent that mostly guesses.",
        Difficulty::Medium => "Reads your hand about half the time.",
        Difficulty::Hard => "Usually sees your move coming.",
    };

    format!(
        "{} Counters {}% of the time and answers after {} ms.",
        base_desc,
        (difficulty.counter_probability() * 100.0).round() as u32,
        difficulty.reaction_delay_ms(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRng, SeededRng};

    #[test]
    fn test_counter_table() {
        assert_eq!(Move::Rock.counter(), Move::Paper);
        assert_eq!(Move::Paper.counter(), Move::Scissors);
        assert_eq!(Move::Scissors.counter(), Move::Rock);
    }

    #[test]
    fn test_counter_beats_move() {
        for m in Move::ALL {
            assert!(m.counter().beats(m));
            assert!(!m.beats(m.counter()));
            assert!(!m.beats(m));
        }
    }

    #[test]
    fn test_hard_with_zero_sample_always_counters() {
        let mut rng = ScriptedRng::constant(0.0);
        for m in Move::ALL {
            assert_eq!(choose_opponent_move(m, Difficulty::Hard, &mut rng), m.counter());
        }
    }

    #[test]
    fn test_every_difficulty_counters_on_low_roll() {
        for difficulty in Difficulty::ALL {
            let mut rng = ScriptedRng::constant(0.1);
            assert_eq!(
                choose_opponent_move(Move::Rock, difficulty, &mut rng),
                Move::Paper,
                "{} should counter on a 0.1 roll",
                difficulty
            );
        }
    }

    #[test]
    fn test_fallback_is_uniform_pick() {
        // first sample fails the counter roll, second picks the move
        let cases = [(0.0, Move::Rock), (0.34, Move::Paper), (0.99, Move::Scissors)];
        for (pick, expected) in cases {
            let mut rng = ScriptedRng::new(vec![0.9, pick]);
            assert_eq!(choose_opponent_move(Move::Rock, Difficulty::Hard, &mut rng), expected);
        }
    }

    #[test]
    fn test_roll_at_threshold_does_not_counter() {
        // 0.5 is not strictly below medium's 0.5
        let mut rng = ScriptedRng::new(vec![0.5, 0.0]);
        assert_eq!(choose_opponent_move(Move::Paper, Difficulty::Medium, &mut rng), Move::Rock);
    }

    #[test]
    fn test_counter_rate_tracks_difficulty() {
        let samples = 20_000;
        for difficulty in Difficulty::ALL {
            let mut rng = SeededRng::new(99);
            let countered = (0..samples)
                .filter(|_| choose_opponent_move(Move::Rock, difficulty, &mut rng) == Move::Paper)
                .count();
            // p + (1 - p) / 3
            let p = difficulty.counter_probability();
            let expected = p + (1.0 - p) / 3.0;
            let rate = countered as f64 / samples as f64;
            assert!(
                (rate - expected).abs() < 0.02,
                "{}: counter rate {} not ~{}",
                difficulty,
                rate,
                expected
            );
        }
    }

    #[test]
    fn test_move_parsing() {
        assert_eq!("rock".parse::<Move>(), Ok(Move::Rock));
        assert_eq!(" Paper ".parse::<Move>(), Ok(Move::Paper));
        assert_eq!("SCISSORS".parse::<Move>(), Ok(Move::Scissors));
        assert_eq!(
            "lizard".parse::<Move>(),
            Err(GameError::InvalidMove("lizard".to_string()))
        );
    }

    #[test]
    fn test_difficulty_parsing() {
        for d in Difficulty::ALL {
            assert_eq!(d.to_string().parse::<Difficulty>(), Ok(d));
        }
        assert!(matches!("insane".parse::<Difficulty>(), Err(GameError::InvalidDifficulty(_))));
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Move::Scissors).unwrap(), "\"scissors\"");
        assert_eq!(serde_json::from_str::<Difficulty>("\"hard\"").unwrap(), Difficulty::Hard);
    }

    #[test]
    fn test_reaction_delay_shrinks_with_difficulty() {
        assert!(Difficulty::Easy.reaction_delay_ms() > Difficulty::Medium.reaction_delay_ms());
        assert!(Difficulty::Medium.reaction_delay_ms() > Difficulty::Hard.reaction_delay_ms());
    }

    #[test]
    fn test_describe_difficulty() {
        let desc = describe_difficulty(Difficulty::Hard);
        assert!(desc.contains("80%"));
        assert!(desc.contains("300 ms"));
    }
}
