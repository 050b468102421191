#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship::{autoplay, init_logging, HotseatSession, Player};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a two-player game passing this terminal between turns.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible random placement (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Place both fleets at random and go straight to battle")]
        auto_place: bool,
    },
    /// Watch a game of random shots between two randomly placed fleets.
    Simulate {
        #[arg(long, help = "Fix RNG seed for a reproducible game (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print every log entry instead of only the result")]
        verbose: bool,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, auto_place } => {
            let rng = make_rng(seed);
            let stdin = std::io::stdin();
            let mut session =
                HotseatSession::new(stdin.lock(), std::io::stdout(), rng).with_auto_place(auto_place);
            match session.run()? {
                Some(winner) => println!("Jogador {} venceu!", winner),
                None => println!("No winner."),
            }
        }
        Commands::Simulate { seed, verbose } => {
            let mut rng = make_rng(seed);
            let (engine, shots) = autoplay::random_game(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
            if verbose {
                for entry in engine.log().entries() {
                    println!("{}", entry);
                }
            }
            let winner = engine
                .winner()
                .ok_or_else(|| anyhow::anyhow!("simulated game ended without a winner"))?;
            let by = |p: Player| shots.iter().filter(|s| s.attacker == p).count();
            println!(
                "Jogador {} won after {} shots ({} by player 1, {} by player 2)",
                winner,
                shots.len(),
                by(Player::One),
                by(Player::Two)
            );
        }
    }
    Ok(())
}
