use crate::engine::Game;
use rand::rngs::SmallRng;

use super::Commander;

/// Computer opponent: fires at a uniformly random cell it has not tried.
#[derive(Debug, Default)]
pub struct AiCommander;

impl AiCommander {
    pub fn new() -> Self {
        Self
    }
}

impl Commander for AiCommander {
    fn select_target(&mut self, rng: &mut SmallRng, game: &Game) -> anyhow::Result<(usize, usize)> {
        game.random_guess(rng)
            .ok_or_else(|| anyhow::anyhow!("no untargeted cells left on the opponent board"))
    }
}
