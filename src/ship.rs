//! Ship classes and placed ships.

use core::fmt;

use crate::common::GameError;
use crate::config::{Mask, BOARD_SIZE, MAX_SHIP_SIZE};

/// Direction a ship extends from its origin cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends rightward (increasing column).
    #[default]
    Horizontal,
    /// Extends downward (increasing row).
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn rotated(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Class of ship in the fleet: display name, size and how many each player gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    size: usize,
    count: u8,
}

impl ShipClass {
    pub const fn new(name: &'static str, size: usize, count: u8) -> Self {
        Self { name, size, count }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of ships of this class in a full fleet.
    pub const fn count(&self) -> u8 {
        self.count
    }
}

/// Check that `size` is one of the fleet's ship sizes.
pub fn validate_size(size: usize) -> Result<(), GameError> {
    if (1..=MAX_SHIP_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(GameError::InvalidShipSize(size))
    }
}

/// A ship placed on a player's board. Its cells never move once placed; only
/// `hits_taken` changes.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    size: usize,
    row: usize,
    col: usize,
    orientation: Orientation,
    mask: Mask,
    hits_taken: usize,
}

impl Ship {
    /// Build a ship of `size` cells starting at (`row`, `col`).
    ///
    /// Fails with `OutOfBounds` when any cell would fall outside the grid.
    pub fn new(
        size: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<Self, GameError> {
        validate_size(size)?;
        let n = BOARD_SIZE as usize;
        let (last_row, last_col) = match orientation {
            Orientation::Horizontal => (Some(row), col.checked_add(size - 1)),
            Orientation::Vertical => (row.checked_add(size - 1), Some(col)),
        };
        match (last_row, last_col) {
            (Some(r), Some(c)) if r < n && c < n => {}
            _ => return Err(GameError::OutOfBounds { row, col }),
        }

        let mut ship = Ship {
            size,
            row,
            col,
            orientation,
            mask: Mask::new(),
            hits_taken: 0,
        };
        ship.mask = Mask::from_cells(ship.cells())?;
        Ok(ship)
    }

    /// Occupied cells in order from the origin.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (row, col, orientation) = (self.row, self.col, self.orientation);
        (0..self.size).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.mask.get(row, col).unwrap_or(false)
    }

    /// Record one hit. Returns `true` when this hit sinks the ship.
    pub(crate) fn register_hit(&mut self) -> bool {
        if self.hits_taken < self.size {
            self.hits_taken += 1;
        }
        self.is_sunk()
    }

    pub fn is_sunk(&self) -> bool {
        self.hits_taken == self.size
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn hits_taken(&self) -> usize {
        self.hits_taken
    }

    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> Mask {
        self.mask
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ size: {}, origin: ({}, {}), orientation: {:?}, hits: {}/{} }}",
            self.size, self.row, self.col, self.orientation, self.hits_taken, self.size,
        )
    }
}
