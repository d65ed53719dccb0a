//! Sources of shots for each seat
//!
//! A [`Commander`] decides where the player in its seat fires next:
//! - AiCommander: uniformly random untargeted cell
//! - CliCommander: column and row typed at the console

use rand::rngs::SmallRng;

use crate::engine::Game;

/// Interface implemented by the different ways of driving a player.
pub trait Commander {
    /// Choose the next target `(row, col)` for the current player of `game`.
    ///
    /// Coordinates are in bounds; the controller rejects ones already fired at.
    fn select_target(&mut self, rng: &mut SmallRng, game: &Game) -> anyhow::Result<(usize, usize)>;
}

pub mod ai;
pub use ai::AiCommander;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliCommander;
