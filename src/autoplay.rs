//! Random self-play: both fleets placed at random, shots picked uniformly
//! among cells not yet attacked.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::{AttackResult, GameError, Phase, Player};
use crate::game::GameEngine;

/// One resolved shot of a simulated game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub attacker: Player,
    pub at: (usize, usize),
    pub result: AttackResult,
}

/// Place both fleets at random and advance the engine to the battle phase.
pub fn random_setup<R: Rng + ?Sized>(engine: &mut GameEngine, rng: &mut R) -> Result<(), GameError> {
    while engine.phase() == Phase::Placement {
        let player = engine.current_player();
        if engine.has_ships_left(player) {
            engine.auto_place(player, rng)?;
        }
        engine.finish_placement()?;
    }
    Ok(())
}

/// Pick a random cell of `target`'s board that has not been shot at.
pub fn random_target<R: Rng + ?Sized>(
    engine: &GameEngine,
    target: Player,
    rng: &mut R,
) -> Option<(usize, usize)> {
    let open: Vec<_> = engine.board(target).unattacked_cells().collect();
    if open.is_empty() {
        return None;
    }
    Some(open[rng.random_range(0..open.len())])
}

/// Fire random shots until the game ends, returning every shot in order.
pub fn random_battle<R: Rng + ?Sized>(
    engine: &mut GameEngine,
    rng: &mut R,
) -> Result<Vec<Shot>, GameError> {
    let mut shots = Vec::new();
    while engine.phase() == Phase::Battle {
        let attacker = engine.current_player();
        let (row, col) = random_target(engine, attacker.other(), rng)
            .ok_or(GameError::NoTargetsLeft)?;
        let result = engine.attack(attacker, row, col)?;
        shots.push(Shot {
            attacker,
            at: (row, col),
            result,
        });
    }
    Ok(shots)
}

/// Play a complete random game from a fresh engine.
pub fn random_game<R: Rng + ?Sized>(rng: &mut R) -> Result<(GameEngine, Vec<Shot>), GameError> {
    let mut engine = GameEngine::new();
    random_setup(&mut engine, rng)?;
    let shots = random_battle(&mut engine, rng)?;
    Ok((engine, shots))
}
