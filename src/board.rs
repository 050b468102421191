//! One player's grid: cell states plus the ships placed on it.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{AttackResult, GameError};
use crate::config::{Mask, BOARD_SIZE, MAX_SHIP_SIZE};
use crate::ship::{Orientation, Ship};

const N: usize = BOARD_SIZE as usize;

/// Random placement attempts per ship before giving up.
const PLACEMENT_ATTEMPTS: usize = 200;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    /// Unsunk ship segment of the given ship size.
    Ship(usize),
    /// Attacked, was empty.
    Miss,
    /// Attacked ship segment whose ship is still afloat.
    Hit,
    /// Segment of a ship whose every cell has been hit.
    Sunk,
}

impl Cell {
    /// Whether this cell has already been shot at.
    pub fn is_attacked(&self) -> bool {
        matches!(self, Cell::Miss | Cell::Hit | Cell::Sunk)
    }
}

/// Grid of cells and the ordered list of ships placed on it.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [[Cell; N]; N],
    ships: Vec<Ship>,
    ship_map: Mask,
}

impl Board {
    /// Create an empty board (no ships placed, nothing attacked).
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; N]; N],
            ships: Vec::new(),
            ship_map: Mask::new(),
        }
    }

    /// Cell at (row, col), or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// All rows of the grid.
    pub fn rows(&self) -> &[[Cell; N]; N] {
        &self.cells
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Occupancy mask of every placed ship.
    pub fn ship_map(&self) -> Mask {
        self.ship_map
    }

    /// Returns `true` when every placed ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Ships still afloat, counted per size (index `size - 1`).
    pub fn afloat_by_size(&self) -> [u8; MAX_SHIP_SIZE] {
        let mut afloat = [0; MAX_SHIP_SIZE];
        for ship in self.ships.iter().filter(|s| !s.is_sunk()) {
            afloat[ship.size() - 1] += 1;
        }
        afloat
    }

    /// Validate a placement without applying it.
    ///
    /// Checks run in order: bounds, every target cell empty, then no target
    /// cell touching an existing ship in any of the eight directions.
    pub fn check_placement(
        &self,
        size: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<Ship, GameError> {
        let ship = Ship::new(size, row, col, orientation)?;
        if ship.cells().any(|(r, c)| self.cells[r][c] != Cell::Empty) {
            return Err(GameError::Overlaps);
        }
        if !(ship.mask().halo() & self.ship_map).is_empty() {
            return Err(GameError::TouchesShip);
        }
        Ok(ship)
    }

    /// Place a ship; on error the board is untouched.
    pub fn place(
        &mut self,
        size: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<&Ship, GameError> {
        let ship = self.check_placement(size, row, col, orientation)?;
        for (r, c) in ship.cells() {
            self.cells[r][c] = Cell::Ship(size);
        }
        self.ship_map |= ship.mask();
        self.ships.push(ship);
        Ok(&self.ships[self.ships.len() - 1])
    }

    /// Returns a random valid (row, col, Orientation) for a ship of `size`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        size: usize,
    ) -> Result<(usize, usize, Orientation), GameError> {
        crate::ship::validate_size(size)?;
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orient {
                Orientation::Horizontal => (N - 1, N - size),
                Orientation::Vertical => (N - size, N - 1),
            };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            if self.check_placement(size, r, c, orient).is_ok() {
                return Ok((r, c, orient));
            }
        }
        Err(GameError::UnableToPlaceShip)
    }

    /// Resolve a shot at (row, col).
    ///
    /// A hit that completes a ship turns all of its cells `Sunk`. Cells that
    /// were already attacked are rejected without any change.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<AttackResult, GameError> {
        let cell = self
            .cell(row, col)
            .ok_or(GameError::OutOfBounds { row, col })?;
        match cell {
            Cell::Miss | Cell::Hit | Cell::Sunk => Err(GameError::AlreadyAttacked),
            Cell::Empty => {
                self.cells[row][col] = Cell::Miss;
                Ok(AttackResult::Miss)
            }
            Cell::Ship(size) => {
                let idx = self
                    .ships
                    .iter()
                    .position(|s| s.contains(row, col))
                    .ok_or(GameError::UnknownShipHit)?;
                self.cells[row][col] = Cell::Hit;
                if self.ships[idx].register_hit() {
                    let ship = self.ships[idx];
                    for (r, c) in ship.cells() {
                        self.cells[r][c] = Cell::Sunk;
                    }
                    Ok(AttackResult::Sunk { size })
                } else {
                    Ok(AttackResult::Hit)
                }
            }
        }
    }

    /// Coordinates that have not been shot at yet.
    pub fn unattacked_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..N)
            .flat_map(|r| (0..N).map(move |c| (r, c)))
            .filter(|&(r, c)| !self.cells[r][c].is_attacked())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.cells.iter() {
            write!(f, "  ")?;
            for cell in row.iter() {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Ship(_) => 'S',
                    Cell::Miss => 'o',
                    Cell::Hit => 'X',
                    Cell::Sunk => '#',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "  ships: {:?}\n}}", self.ships)
    }
}
