use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

/// Result of comparing two moves, from the point of view of the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    FirstWins,
    SecondWins,
    Tie,
}

impl Move {
    /// Menu order: 1 = rock, 2 = paper, 3 = scissors.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn beats(&self, other: &Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Paper) | (Move::Paper, Move::Rock)
        )
    }

    pub fn compare(first: Move, second: Move) -> RoundOutcome {
        if first == second {
            RoundOutcome::Tie
        } else if first.beats(&second) {
            RoundOutcome::FirstWins
        } else {
            RoundOutcome::SecondWins
        }
    }

    /// Maps a 1-based menu number to a move.
    pub fn from_choice(choice: usize) -> Option<Move> {
        choice
            .checked_sub(1)
            .and_then(|index| Move::ALL.get(index))
            .copied()
    }

    pub fn as_str(&self) -> &'static str {
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

/// Supplies moves for computer-controlled players.
#[cfg_attr(test, automock)]
pub trait MoveSource: Send + Sync {
    fn next_move(&self) -> Move;
}

/// Picks uniformly from [`Move::ALL`] with the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomMoveSource;

impl RandomMoveSource {
    pub fn new() -> Self {
        RandomMoveSource
    }
}

impl MoveSource for RandomMoveSource {
    fn next_move(&self) -> Move {
        let index = rand::thread_rng().gen_range(0..Move::ALL.len());
        Move::ALL[index]
    }
}
