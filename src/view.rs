//! Information hiding between the two players sharing the device.
//!
//! Attack history (misses, hits, sunk ships) is public on both boards. Live
//! ship positions are only shown to their owner until the game ends, after
//! which everything is revealed.

use core::fmt;

use crate::board::{Board, Cell};
use crate::common::{Phase, Player};
use crate::config::BOARD_SIZE;

const N: usize = BOARD_SIZE as usize;

/// A cell as a particular viewer is allowed to see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellView {
    /// Nothing to show: open water, or a ship the viewer may not see.
    #[default]
    Unknown,
    Ship,
    Miss,
    Hit,
    Sunk,
}

impl CellView {
    fn symbol(self) -> char {
        match self {
            CellView::Unknown => '.',
            CellView::Ship => 'S',
            CellView::Miss => 'o',
            CellView::Hit => 'X',
            CellView::Sunk => '#',
        }
    }
}

/// Whether `viewer` may see the unattacked ship cells on `owner`'s board.
pub fn ships_visible(phase: Phase, viewer: Player, owner: Player) -> bool {
    phase == Phase::Ended || viewer == owner
}

/// Map a cell to what is shown, given whether ships are revealed.
pub fn reveal(cell: Cell, show_ships: bool) -> CellView {
    match cell {
        Cell::Empty => CellView::Unknown,
        Cell::Ship(_) if show_ships => CellView::Ship,
        Cell::Ship(_) => CellView::Unknown,
        Cell::Miss => CellView::Miss,
        Cell::Hit => CellView::Hit,
        Cell::Sunk => CellView::Sunk,
    }
}

/// A board filtered through the visibility rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardView {
    cells: [[CellView; N]; N],
}

impl BoardView {
    pub fn new(board: &Board, show_ships: bool) -> Self {
        let mut cells = [[CellView::Unknown; N]; N];
        for (r, row) in board.rows().iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                cells[r][c] = reveal(*cell, show_ships);
            }
        }
        Self { cells }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<CellView> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn rows(&self) -> &[[CellView; N]; N] {
        &self.cells
    }

    /// Number of cells showing `kind`.
    pub fn count(&self, kind: CellView) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == kind).count()
    }
}

/// Grid with column letters and 1-based row numbers.
impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..N {
            write!(f, " {}", (b'A' + c as u8) as char)?;
        }
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "\n{:2} ", r + 1)?;
            for cell in row.iter() {
                write!(f, " {}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
