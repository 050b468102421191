use crate::bitboard::BitBoard;
use crate::ship::ShipClass;

pub const BOARD_SIZE: u8 = 10;

/// Largest ship size; sizes run from 1 to this value.
pub const MAX_SHIP_SIZE: usize = 5;

/// Occupancy mask for one player's grid.
pub type Mask = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Fixed fleet handed to each player at the start of placement.
pub const FLEET: [ShipClass; MAX_SHIP_SIZE] = [
    ShipClass::new("Porta-aviões", 5, 1),
    ShipClass::new("Encouraçado", 4, 1),
    ShipClass::new("Cruzador", 3, 2),
    ShipClass::new("Destroyer", 2, 3),
    ShipClass::new("Submarino", 1, 4),
];

/// Number of ships each player places.
pub const NUM_SHIPS: usize = fleet_ship_count();

/// Total number of ship segments on a fully placed board.
pub const TOTAL_SHIP_CELLS: usize = fleet_cell_count();

/// Number of log entries a renderer typically shows.
pub const RECENT_LOG_ENTRIES: usize = 5;

const fn fleet_ship_count() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < FLEET.len() {
        total += FLEET[i].count() as usize;
        i += 1;
    }
    total
}

const fn fleet_cell_count() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < FLEET.len() {
        total += FLEET[i].count() as usize * FLEET[i].size();
        i += 1;
    }
    total
}

/// Look up the ship class for a given size.
pub fn ship_class(size: usize) -> Option<ShipClass> {
    FLEET.iter().copied().find(|class| class.size() == size)
}
