use battleship::{AttackResult, Board, Cell, GameError, Orientation};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_place_marks_exact_cells() {
    let mut board = Board::new();
    let ship = *board.place(3, 2, 4, Orientation::Vertical).unwrap();
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(2, 4), (3, 4), (4, 4)]);
    for r in 0..10 {
        for c in 0..10 {
            let expected = if cells.contains(&(r, c)) {
                Cell::Ship(3)
            } else {
                Cell::Empty
            };
            assert_eq!(board.cell(r, c), Some(expected));
        }
    }
    assert_eq!(board.ships().len(), 1);
    assert_eq!(board.ship_map().count_ones(), 3);
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut board = Board::new();
    assert_eq!(
        board.place(5, 0, 6, Orientation::Horizontal).unwrap_err(),
        GameError::OutOfBounds { row: 0, col: 6 }
    );
    assert_eq!(
        board.place(2, 9, 0, Orientation::Vertical).unwrap_err(),
        GameError::OutOfBounds { row: 9, col: 0 }
    );
    assert_eq!(
        board.place(1, 10, 0, Orientation::Horizontal).unwrap_err(),
        GameError::OutOfBounds { row: 10, col: 0 }
    );
    assert_eq!(board, Board::new());
}

#[test]
fn test_overlap_and_touching_rejected() {
    let mut board = Board::new();
    board.place(3, 4, 4, Orientation::Horizontal).unwrap();
    let before = board.clone();

    assert_eq!(
        board.place(2, 3, 5, Orientation::Vertical).unwrap_err(),
        GameError::Overlaps
    );
    // orthogonal neighbour
    assert_eq!(
        board.place(1, 5, 5, Orientation::Horizontal).unwrap_err(),
        GameError::TouchesShip
    );
    // end-to-end
    assert_eq!(
        board.place(2, 4, 7, Orientation::Horizontal).unwrap_err(),
        GameError::TouchesShip
    );
    // diagonal only
    assert_eq!(
        board.place(1, 3, 3, Orientation::Horizontal).unwrap_err(),
        GameError::TouchesShip
    );
    assert_eq!(
        board.place(2, 5, 7, Orientation::Vertical).unwrap_err(),
        GameError::TouchesShip
    );
    assert_eq!(board, before);

    // one cell of clearance is enough
    board.place(1, 2, 2, Orientation::Horizontal).unwrap();
    board.place(2, 6, 7, Orientation::Horizontal).unwrap();
}

#[test]
fn test_fire_hit_then_sunk_overwrites_hits() {
    let mut board = Board::new();
    board.place(3, 0, 0, Orientation::Horizontal).unwrap();

    assert_eq!(board.fire(0, 0).unwrap(), AttackResult::Hit);
    assert_eq!(board.cell(0, 0), Some(Cell::Hit));
    assert_eq!(board.fire(0, 1).unwrap(), AttackResult::Hit);
    assert_eq!(board.ships()[0].hits_taken(), 2);
    assert!(!board.ships()[0].is_sunk());

    assert_eq!(board.fire(0, 2).unwrap(), AttackResult::Sunk { size: 3 });
    for c in 0..3 {
        assert_eq!(board.cell(0, c), Some(Cell::Sunk));
    }
    assert!(board.ships()[0].is_sunk());
    assert!(board.all_sunk());
}

#[test]
fn test_fire_miss_and_repeat() {
    let mut board = Board::new();
    board.place(2, 5, 5, Orientation::Horizontal).unwrap();

    assert_eq!(board.fire(0, 0).unwrap(), AttackResult::Miss);
    assert_eq!(board.cell(0, 0), Some(Cell::Miss));
    board.fire(5, 5).unwrap();

    let before = board.clone();
    assert_eq!(board.fire(0, 0).unwrap_err(), GameError::AlreadyAttacked);
    assert_eq!(board.fire(5, 5).unwrap_err(), GameError::AlreadyAttacked);
    assert_eq!(board, before);
    assert_eq!(board.ships()[0].hits_taken(), 1);

    board.fire(5, 6).unwrap();
    assert_eq!(board.fire(5, 6).unwrap_err(), GameError::AlreadyAttacked);
}

#[test]
fn test_fire_out_of_bounds() {
    let mut board = Board::new();
    assert_eq!(
        board.fire(10, 3).unwrap_err(),
        GameError::OutOfBounds { row: 10, col: 3 }
    );
}

#[test]
fn test_afloat_by_size_tracks_sinking() {
    let mut board = Board::new();
    board.place(1, 0, 0, Orientation::Horizontal).unwrap();
    board.place(1, 0, 2, Orientation::Horizontal).unwrap();
    board.place(2, 2, 0, Orientation::Vertical).unwrap();
    assert_eq!(board.afloat_by_size(), [2, 1, 0, 0, 0]);
    board.fire(0, 2).unwrap();
    assert_eq!(board.afloat_by_size(), [1, 1, 0, 0, 0]);
}

#[test]
fn test_random_placement_is_valid_and_reproducible() {
    let mut board1 = Board::new();
    let mut board2 = Board::new();
    let mut rng1 = SmallRng::seed_from_u64(42);
    let mut rng2 = SmallRng::seed_from_u64(42);
    for size in [5, 4, 3, 3, 2] {
        let (r, c, o) = board1.random_placement(&mut rng1, size).unwrap();
        assert_eq!(board2.random_placement(&mut rng2, size).unwrap(), (r, c, o));
        board1.place(size, r, c, o).unwrap();
        board2.place(size, r, c, o).unwrap();
    }
    assert_eq!(board1.ship_map().count_ones(), 17);
    assert_eq!(
        board1.random_placement(&mut rng1, 6).unwrap_err(),
        GameError::InvalidShipSize(6)
    );
}
