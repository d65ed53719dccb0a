//! Common types for Battleship: cell states, guess results and board errors.

use crate::engine::grid::GridError;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Open water, never targeted.
    #[default]
    Empty,
    /// Part of a ship, never targeted.
    Occupied,
    /// Part of a ship that has been struck.
    Hit,
    /// Open water that has been targeted.
    Miss,
}

impl CellState {
    /// Console symbol for this state.
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => '~',
            CellState::Occupied => 'S',
            CellState::Hit => 'O',
            CellState::Miss => 'X',
        }
    }

    /// A cell can be targeted only while nobody has fired at it.
    pub fn is_untargeted(self) -> bool {
        matches!(self, CellState::Empty | CellState::Occupied)
    }
}

/// Result of a guess attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// Guess struck a ship segment; the shooter keeps the turn.
    Hit,
    /// Guess landed in open water; the turn passes.
    Miss,
}

/// Errors returned by board and game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column outside the board.
    OutOfBounds { row: usize, col: usize },
    /// The cell was already targeted.
    InvalidGuess { row: usize, col: usize },
    /// An orientation tag other than horizontal or vertical.
    InvalidOrientation,
    /// Ship would extend past the board edge.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// No valid placement exists for the ship.
    UnableToPlaceShip,
}

impl From<GridError> for BoardError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::OutOfBounds { row, col } => BoardError::OutOfBounds { row, col },
        }
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Cell out of bounds: row={}, col={}", row, col)
            }
            BoardError::InvalidGuess { row, col } => {
                write!(f, "Cell already targeted: row={}, col={}", row, col)
            }
            BoardError::InvalidOrientation => write!(f, "Orientation must be horizontal or vertical"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
