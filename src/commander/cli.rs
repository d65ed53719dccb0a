#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use rand::rngs::SmallRng;

use crate::cli::input::{read_column, read_row};
use crate::engine::Game;

use super::Commander;

/// Human player typing coordinates at a console.
pub struct CliCommander<R, W> {
    input: R,
    output: W,
}

impl CliCommander<StdinLock<'static>, Stdout> {
    /// Read from stdin and prompt on stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliCommander<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Commander for CliCommander<R, W> {
    fn select_target(&mut self, _rng: &mut SmallRng, _game: &Game) -> anyhow::Result<(usize, usize)> {
        let col = read_column(&mut self.input, &mut self.output)?;
        let row = read_row(&mut self.input, &mut self.output)?;
        Ok((row, col))
    }
}
