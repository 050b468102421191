use battleship::{autoplay, AttackResult, Player};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let (engine, shots) = autoplay::random_game(&mut rng).map_err(|e| anyhow::anyhow!(e))?;

    let summary = |p: Player| {
        let fired: Vec<_> = shots.iter().filter(|s| s.attacker == p).collect();
        let hits = fired
            .iter()
            .filter(|s| !matches!(s.result, AttackResult::Miss))
            .count();
        let sunk = fired
            .iter()
            .filter(|s| matches!(s.result, AttackResult::Sunk { .. }))
            .count();
        json!({"shots": fired.len(), "hits": hits, "sunk": sunk})
    };

    let result = json!({
        "seed": seed,
        "player1": summary(Player::One),
        "player2": summary(Player::Two),
        "winner": engine.winner().map(|w| format!("player{}", w)),
        "log_entries": engine.log().len(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
