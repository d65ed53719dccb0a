//! Random, collision-free ship placement.
//!
//! Candidates are drawn uniformly over (orientation, row, col) and rejected
//! until one fits. After `MAX_SAMPLING_ATTEMPTS` draws the remaining choice is
//! made over an exhaustive scan, which keeps the distribution uniform over
//! valid placements.

use log::debug;
use rand::Rng;

use crate::engine::board::Board;
use crate::engine::common::{BoardError, CellState};
use crate::engine::config::MAX_SAMPLING_ATTEMPTS;
use crate::engine::ship::{Orientation, Placement, ShipType};

/// `true` iff every cell of `placement` is on the board and currently `Empty`.
pub fn is_valid_placement(board: &Board, placement: &Placement) -> bool {
    check_placement(board, placement).is_ok()
}

fn check_placement(board: &Board, placement: &Placement) -> Result<(), BoardError> {
    let (end_row, end_col) = placement.end().ok_or(BoardError::ShipOutOfBounds)?;
    if !board.grid().contains(placement.row, placement.col) || !board.grid().contains(end_row, end_col)
    {
        return Err(BoardError::ShipOutOfBounds);
    }
    for (r, c) in placement.cells() {
        if board.cell(r, c)? != CellState::Empty {
            return Err(BoardError::ShipOverlaps);
        }
    }
    Ok(())
}

/// Returns a random valid placement for a ship of `length` on `board`.
pub fn random_placement<R: Rng + ?Sized>(
    rng: &mut R,
    board: &Board,
    length: usize,
) -> Result<Placement, BoardError> {
    let size = board.size();
    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        let orientation = Orientation::random(rng);
        let row = rng.random_range(0..size);
        let col = rng.random_range(0..size);
        let candidate = Placement::new(row, col, orientation, length);
        if is_valid_placement(board, &candidate) {
            return Ok(candidate);
        }
    }
    scan_placement(rng, board, length)
}

/// Uniform pick among all valid placements, found by enumeration.
fn scan_placement<R: Rng + ?Sized>(
    rng: &mut R,
    board: &Board,
    length: usize,
) -> Result<Placement, BoardError> {
    let size = board.size();
    let candidates = move || {
        Orientation::ALL.into_iter().flat_map(move |orientation| {
            (0..size).flat_map(move |row| {
                (0..size).map(move |col| Placement::new(row, col, orientation, length))
            })
        })
    };
    let valid = candidates().filter(|p| is_valid_placement(board, p)).count();
    if valid == 0 {
        return Err(BoardError::UnableToPlaceShip);
    }
    let pick = rng.random_range(0..valid);
    candidates()
        .filter(|p| is_valid_placement(board, p))
        .nth(pick)
        .ok_or(BoardError::UnableToPlaceShip)
}

/// Write `placement` onto `board`, marking every covered cell `Occupied`.
pub fn place_ship(board: &mut Board, placement: &Placement) -> Result<(), BoardError> {
    check_placement(board, placement)?;
    for (r, c) in placement.cells() {
        board.set_cell(r, c, CellState::Occupied)?;
    }
    Ok(())
}

/// Randomly place every ship of `ships` onto `board`, in order.
pub fn place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    board: &mut Board,
    ships: &[ShipType],
) -> Result<(), BoardError> {
    for ship in ships {
        let placement = random_placement(rng, board, ship.length())?;
        place_ship(board, &placement)?;
        debug!(
            "placed {} (length {}) at row {}, col {}, {}",
            ship.name(),
            ship.length(),
            placement.row + 1,
            (b'A' + placement.col as u8) as char,
            placement.orientation
        );
    }
    Ok(())
}
