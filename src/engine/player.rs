//! Player identities and seats.

use alloc::string::String;

/// Index of a player (and its board) within a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub const ALL: [Seat; 2] = [Seat::First, Seat::Second];

    /// The opposing seat.
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// A participant: a name, whether the computer drives it, and its hit count.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    name: String,
    automated: bool,
    score: usize,
}

impl Player {
    pub fn new(name: impl Into<String>, automated: bool) -> Self {
        Self {
            name: name.into(),
            automated,
            score: 0,
        }
    }

    /// A console-driven player.
    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    /// A player whose shots are picked at random.
    pub fn cpu(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_automated(&self) -> bool {
        self.automated
    }

    /// Successful hits landed on the opponent.
    pub fn score(&self) -> usize {
        self.score
    }

    pub(crate) fn record_hit(&mut self) {
        self.score += 1;
    }

    /// Overwrite the score. Intended for setting up scenarios.
    pub fn set_score(&mut self, score: usize) {
        self.score = score;
    }
}
