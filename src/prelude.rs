//! Commonly used types and utilities for ease of import.

pub use crate::{AiCommander, Board, CellState, Commander, Game, GuessResult, Player, Seat};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliCommander, GameController, GameSummary};
