#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship::{
    init_logging, AiCommander, CliCommander, Commander, Game, GameController, Player,
    DEFAULT_PACING_MS,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::time::Duration;

/// Play Battleship against the computer.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_PACING_MS, help = "Pause before each shot lands, in milliseconds")]
    delay_ms: u64,
    #[arg(long, help = "Let the computer play both sides")]
    autoplay: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let first = if cli.autoplay {
        Player::cpu("Player1")
    } else {
        Player::human("Player1")
    };
    let game = Game::new(&mut rng, [first, Player::cpu("Player2")])?;

    let first_commander: Box<dyn Commander> = if cli.autoplay {
        Box::new(AiCommander::new())
    } else {
        Box::new(CliCommander::stdio())
    };
    let commanders = [first_commander, Box::new(AiCommander::new()) as Box<dyn Commander>];

    let mut controller = GameController::new(game, commanders, rng, std::io::stdout())
        .with_pacing(Duration::from_millis(cli.delay_ms));
    controller.run()?;
    Ok(())
}
