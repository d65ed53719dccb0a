//! Ship catalog entries, orientations and transient placements.

use core::fmt;
use rand::Rng;

use super::common::BoardError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// Pick an orientation with equal probability.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

impl TryFrom<char> for Orientation {
    type Error = BoardError;

    /// Accepts `H` or `V`, ignoring case.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'H' => Ok(Orientation::Horizontal),
            'V' => Ok(Orientation::Vertical),
            _ => Err(BoardError::InvalidOrientation),
        }
    }
}

impl TryFrom<u8> for Orientation {
    type Error = BoardError;

    /// `0` is horizontal, `1` is vertical.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Orientation::Horizontal),
            1 => Ok(Orientation::Vertical),
            _ => Err(BoardError::InvalidOrientation),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("HORIZONTAL"),
            Orientation::Vertical => f.write_str("VERTICAL"),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub const fn length(&self) -> usize {
        self.length
    }
}

/// A candidate position for a ship: start cell, orientation and length.
///
/// Placements are produced by the placement engine, written to a board once
/// and then dropped; ships are not tracked after that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub length: usize,
}

impl Placement {
    pub fn new(row: usize, col: usize, orientation: Orientation, length: usize) -> Self {
        Self {
            row,
            col,
            orientation,
            length,
        }
    }

    /// Last covered cell, or `None` for a zero-length ship or on overflow.
    pub fn end(&self) -> Option<(usize, usize)> {
        let span = self.length.checked_sub(1)?;
        match self.orientation {
            Orientation::Horizontal => Some((self.row, self.col.checked_add(span)?)),
            Orientation::Vertical => Some((self.row.checked_add(span)?, self.col)),
        }
    }

    /// Covered cells from the start cell outward.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let Placement {
            row,
            col,
            orientation,
            length,
        } = *self;
        (0..length).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }
}
