use std::io;
use std::time::Duration;

use battleship::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let game = Game::new(&mut rng, [Player::cpu("Player1"), Player::cpu("Player2")])?;
    let commanders: [Box<dyn Commander>; 2] =
        [Box::new(AiCommander::new()), Box::new(AiCommander::new())];

    let mut controller =
        GameController::new(game, commanders, rng, io::sink()).with_pacing(Duration::ZERO);
    let summary = controller.run()?;

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
