//! Core battleship game engine (no_std compatible)
//!
//! This module contains the pure game logic: the grid model, random fleet
//! placement, turn resolution and win detection. It depends only on `rand`,
//! `log` and `alloc`.

pub mod board;
pub mod common;
pub mod config;
pub mod game;
pub mod grid;
pub mod placement;
pub mod player;
pub mod ship;

// Re-export commonly used types
pub use board::{Board, BoardGrid, BoardView};
pub use common::{BoardError, CellState, GuessResult};
pub use config::*;
pub use game::Game;
pub use grid::{Grid, GridError};
pub use placement::{is_valid_placement, place_fleet, place_ship, random_placement};
pub use player::{Player, Seat};
pub use ship::{Orientation, Placement, ShipType};
