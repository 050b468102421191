#![allow(dead_code)]

use battleship::{GameEngine, Orientation, Phase, Player};

/// A legal full fleet: (size, row, col, orientation). No two ships touch.
pub const LAYOUT: [(usize, usize, usize, Orientation); 11] = [
    (5, 0, 0, Orientation::Horizontal),
    (4, 0, 6, Orientation::Horizontal),
    (3, 2, 0, Orientation::Horizontal),
    (3, 2, 4, Orientation::Horizontal),
    (2, 2, 8, Orientation::Horizontal),
    (2, 4, 0, Orientation::Horizontal),
    (2, 4, 3, Orientation::Horizontal),
    (1, 4, 6, Orientation::Horizontal),
    (1, 4, 8, Orientation::Horizontal),
    (1, 6, 0, Orientation::Horizontal),
    (1, 6, 2, Orientation::Horizontal),
];

/// Every cell occupied by [`LAYOUT`], in placement order.
pub fn layout_cells() -> Vec<(usize, usize)> {
    LAYOUT
        .iter()
        .flat_map(|&(size, row, col, _)| (0..size).map(move |i| (row, col + i)))
        .collect()
}

pub fn place_layout(engine: &mut GameEngine, player: Player) {
    for &(size, row, col, orient) in LAYOUT.iter() {
        engine.place_ship(player, row, col, size, orient).unwrap();
    }
}

/// Engine with both players on [`LAYOUT`], ready for battle.
pub fn battle_engine() -> GameEngine {
    let mut engine = GameEngine::new();
    place_layout(&mut engine, Player::One);
    engine.finish_placement().unwrap();
    place_layout(&mut engine, Player::Two);
    engine.finish_placement().unwrap();
    assert_eq!(engine.phase(), Phase::Battle);
    engine
}

/// A second legal fleet with a submarine at (5, 5) and open water at (0, 0).
pub const LAYOUT_B: [(usize, usize, usize, Orientation); 11] = [
    (1, 5, 5, Orientation::Horizontal),
    (5, 9, 0, Orientation::Horizontal),
    (4, 9, 6, Orientation::Horizontal),
    (3, 7, 0, Orientation::Horizontal),
    (3, 7, 4, Orientation::Horizontal),
    (2, 7, 8, Orientation::Horizontal),
    (2, 1, 0, Orientation::Horizontal),
    (2, 1, 3, Orientation::Horizontal),
    (1, 1, 6, Orientation::Horizontal),
    (1, 1, 8, Orientation::Horizontal),
    (1, 3, 0, Orientation::Horizontal),
];

pub fn place_layout_b(engine: &mut GameEngine, player: Player) {
    for &(size, row, col, orient) in LAYOUT_B.iter() {
        engine.place_ship(player, row, col, size, orient).unwrap();
    }
}
