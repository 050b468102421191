use battleship::autoplay::{random_setup, random_target};
use battleship::{
    AttackResult, Cell, GameEngine, GameError, Orientation, Phase, Player, BOARD_SIZE, NUM_SHIPS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Engine in placement with `placed` random ships already down for player 1.
fn partly_placed(seed: u64, placed: usize) -> GameEngine {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new();
    for _ in 0..placed {
        let Some(size) = engine.fleet(Player::One).next_available() else {
            break;
        };
        let Ok((r, c, o)) = engine.board(Player::One).random_placement(&mut rng, size) else {
            break;
        };
        engine.place_ship(Player::One, r, c, size, o).unwrap();
    }
    engine
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// A placement either marks exactly the requested cells or changes nothing.
    #[test]
    fn placement_applies_fully_or_not_at_all(
        seed in any::<u64>(),
        placed in 0..NUM_SHIPS,
        size in 0usize..7,
        row in 0usize..12,
        col in 0usize..12,
        vertical in any::<bool>(),
    ) {
        let mut engine = partly_placed(seed, placed);
        let orient = if vertical { Orientation::Vertical } else { Orientation::Horizontal };
        let before = engine.state().clone();
        let before_count = before.fleet(Player::One).remaining(size);

        match engine.place_ship(Player::One, row, col, size, orient) {
            Ok(inv) => {
                prop_assert_eq!(inv.remaining(size), before_count - 1);
                let ship = *engine.ships(Player::One).last().unwrap();
                let requested: Vec<_> = (0..size)
                    .map(|i| if vertical { (row + i, col) } else { (row, col + i) })
                    .collect();
                prop_assert_eq!(ship.cells().collect::<Vec<_>>(), requested.clone());
                for r in 0..BOARD_SIZE as usize {
                    for c in 0..BOARD_SIZE as usize {
                        let was = before.board(Player::One).cell(r, c);
                        let now = engine.board(Player::One).cell(r, c);
                        if requested.contains(&(r, c)) {
                            prop_assert_eq!(was, Some(Cell::Empty));
                            prop_assert_eq!(now, Some(Cell::Ship(size)));
                        } else {
                            prop_assert_eq!(was, now);
                        }
                    }
                }
                // the new ship touches no earlier ship
                for other in &engine.ships(Player::One)[..engine.ships(Player::One).len() - 1] {
                    prop_assert!((other.mask().halo() & ship.mask()).is_empty());
                }
            }
            Err(_) => prop_assert_eq!(engine.state(), &before),
        }
    }

    /// Miss passes the turn, hit and sink keep it, and the final sink wins.
    #[test]
    fn random_games_follow_turn_rules(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = GameEngine::new();
        random_setup(&mut engine, &mut rng).unwrap();
        prop_assert_eq!(engine.phase(), Phase::Battle);

        let mut sunk_by = [0usize; 2];
        let mut last_attacker = None;
        while engine.phase() == Phase::Battle {
            let attacker = engine.current_player();
            let (r, c) = random_target(&engine, attacker.other(), &mut rng).unwrap();
            let log_len = engine.log().len();
            let result = engine.attack(attacker, r, c).unwrap();
            last_attacker = Some(attacker);
            match result {
                AttackResult::Miss => {
                    prop_assert_eq!(engine.current_player(), attacker.other());
                    prop_assert_eq!(engine.log().len(), log_len + 1);
                }
                AttackResult::Hit | AttackResult::Sunk { .. } => {
                    prop_assert_eq!(engine.current_player(), attacker);
                    if let AttackResult::Sunk { size } = result {
                        sunk_by[attacker.number() as usize - 1] += 1;
                        let ship = engine
                            .ships(attacker.other())
                            .iter()
                            .find(|s| s.contains(r, c))
                            .unwrap();
                        prop_assert_eq!(ship.size(), size);
                        prop_assert_eq!(ship.hits_taken(), size);
                        for (sr, sc) in ship.cells() {
                            prop_assert_eq!(engine.board(attacker.other()).cell(sr, sc), Some(Cell::Sunk));
                        }
                    }
                    let expected = if engine.phase() == Phase::Ended { 2 } else { 1 };
                    prop_assert_eq!(engine.log().len(), log_len + expected);
                }
            }
        }

        prop_assert_eq!(engine.phase(), Phase::Ended);
        let winner = engine.winner().unwrap();
        prop_assert_eq!(Some(winner), last_attacker);
        prop_assert!(engine.board(winner.other()).all_sunk());
        prop_assert!(!engine.board(winner).all_sunk());
        prop_assert_eq!(sunk_by[winner.number() as usize - 1], NUM_SHIPS);
    }

    /// Shooting an already resolved cell changes nothing.
    #[test]
    fn reattack_is_idempotent(seed in any::<u64>(), shots in 1usize..40) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = GameEngine::new();
        random_setup(&mut engine, &mut rng).unwrap();
        for _ in 0..shots {
            if engine.phase() != Phase::Battle {
                break;
            }
            let attacker = engine.current_player();
            let (r, c) = random_target(&engine, attacker.other(), &mut rng).unwrap();
            engine.attack(attacker, r, c).unwrap();
        }
        prop_assume!(engine.phase() == Phase::Battle);

        let attacker = engine.current_player();
        let target = engine.board(attacker.other());
        let attacked: Vec<_> = (0..BOARD_SIZE as usize)
            .flat_map(|r| (0..BOARD_SIZE as usize).map(move |c| (r, c)))
            .filter(|&(r, c)| target.cell(r, c).is_some_and(|cell| cell.is_attacked()))
            .collect();
        prop_assume!(!attacked.is_empty());
        let (r, c) = attacked[rng.random_range(0..attacked.len())];

        let before = engine.state().clone();
        prop_assert_eq!(engine.attack(attacker, r, c), Err(GameError::AlreadyAttacked));
        prop_assert_eq!(engine.state(), &before);
    }
}

