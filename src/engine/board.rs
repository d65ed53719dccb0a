//! Per-player board: a grid of cell states plus the strike logic.

use core::fmt;

use crate::engine::common::{BoardError, CellState, GuessResult};
use crate::engine::config::BOARD_SIZE;
use crate::engine::grid::Grid;

/// Board grid at the fixed game size.
pub type BoardGrid = Grid<BOARD_SIZE>;

/// One player's waters: ship segments, hits and misses.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    grid: BoardGrid,
}

impl Board {
    /// Create an empty board (no ships placed).
    pub const fn new() -> Self {
        Board {
            grid: Grid::new(),
        }
    }

    /// Side length of the board.
    pub const fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Immutable view of the underlying grid.
    pub fn grid(&self) -> &BoardGrid {
        &self.grid
    }

    /// State of the cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<CellState, BoardError> {
        Ok(self.grid.get(row, col)?)
    }

    /// Overwrite the cell at (row, col). Only bounds are checked.
    pub fn set_cell(&mut self, row: usize, col: usize, state: CellState) -> Result<(), BoardError> {
        Ok(self.grid.set(row, col, state)?)
    }

    /// Number of cells in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.grid.count(state)
    }

    /// Returns `true` if (row, col) has not been fired at yet.
    pub fn is_legal_target(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.cell(row, col)?.is_untargeted())
    }

    /// All coordinates that have not been fired at, row-major.
    pub fn legal_targets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.grid
            .cells()
            .filter(|(_, _, state)| state.is_untargeted())
            .map(|(r, c, _)| (r, c))
    }

    /// Fire at (row, col): `Occupied` becomes `Hit`, `Empty` becomes `Miss`.
    pub fn strike(&mut self, row: usize, col: usize) -> Result<GuessResult, BoardError> {
        match self.cell(row, col)? {
            CellState::Occupied => {
                self.set_cell(row, col, CellState::Hit)?;
                Ok(GuessResult::Hit)
            }
            CellState::Empty => {
                self.set_cell(row, col, CellState::Miss)?;
                Ok(GuessResult::Miss)
            }
            CellState::Hit | CellState::Miss => Err(BoardError::InvalidGuess { row, col }),
        }
    }

    /// Printable view; with `reveal == false` ship segments look like water.
    pub fn view(&self, reveal: bool) -> BoardView<'_> {
        BoardView {
            board: self,
            reveal,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board {{ {:?} }}", self.grid)
    }
}

/// Text rendering of a [`Board`] with column letters and 1-based row numbers.
pub struct BoardView<'a> {
    board: &'a Board,
    reveal: bool,
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("  ")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {}", (b'A' + c as u8) as char)?;
        }
        writeln!(f)?;
        for (r, c, state) in self.board.grid.cells() {
            if c == 0 {
                write!(f, "{:2}", r + 1)?;
            }
            let shown = match state {
                CellState::Occupied if !self.reveal => CellState::Empty,
                other => other,
            };
            write!(f, " {}", shown.symbol())?;
            if c == BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
