//! A fixed-size square grid of cell states using const generics.
//!
//! The type is `no_std` friendly and avoids heap allocations. Reads and
//! writes are bounds-checked; writes perform no other validation, so callers
//! are responsible for only making legal transitions.

use core::fmt;

use super::common::CellState;

/// Errors returned by grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index is out of bounds [0..N).
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { row, col } => {
                write!(f, "OutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// An N×N matrix of [`CellState`], indexed by `(row, col)`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid<const N: usize> {
    cells: [[CellState; N]; N],
}

impl<const N: usize> Grid<N> {
    /// Create a grid with every cell `Empty`.
    pub const fn new() -> Self {
        Grid {
            cells: [[CellState::Empty; N]; N],
        }
    }

    /// Side length of the grid.
    pub const fn size(&self) -> usize {
        N
    }

    /// Reads the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<CellState, GridError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Overwrites the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        self.cells[row][col] = state;
        Ok(())
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == state)
            .count()
    }

    /// Iterate over all cells in row-major order as `(row, col, state)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, &state)| (r, c, state))
        })
    }

    /// Returns `true` if (row, col) lies inside the grid.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < N && col < N
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if self.contains(row, col) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds { row, col })
        }
    }
}

impl<const N: usize> Default for Grid<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Grid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}> {{", N)?;
        for row in self.cells.iter() {
            f.write_str("  ")?;
            for cell in row.iter() {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
