#![cfg(feature = "std")]

//! Drives a [`Game`] to completion: asks each seat's commander for shots,
//! resolves them and reports progress on a writer.

use std::io::Write;
use std::thread;
use std::time::Duration;

use log::{debug, info};
use rand::rngs::SmallRng;
use serde::Serialize;

use crate::cli::interface::{print_board, print_help, ALREADY_TRIED};
use crate::commander::Commander;
use crate::engine::{config::DEFAULT_PACING_MS, Game, GuessResult, Player, Seat};

/// Outcome of a finished game.
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub winner: Player,
    pub loser: Player,
    /// Resolved shots by both sides.
    pub shots: usize,
}

pub struct GameController<W> {
    game: Game,
    commanders: [Box<dyn Commander>; 2],
    rng: SmallRng,
    out: W,
    pacing: Duration,
}

impl<W: Write> GameController<W> {
    /// `commanders[i]` drives the player in seat `i`.
    pub fn new(game: Game, commanders: [Box<dyn Commander>; 2], rng: SmallRng, out: W) -> Self {
        Self {
            game,
            commanders,
            rng,
            out,
            pacing: Duration::from_millis(DEFAULT_PACING_MS),
        }
    }

    /// Pause inserted before each shot is resolved.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Play until one side wins, then reveal both boards.
    pub fn run(&mut self) -> anyhow::Result<GameSummary> {
        print_help(&mut self.out)?;
        self.print_boards()?;

        let mut shots = 0;
        let winner = loop {
            if self.play_turn()?.is_some() {
                shots += 1;
            }
            if let Some(seat) = self.game.winner_seat() {
                break seat;
            }
        };

        let summary = GameSummary {
            winner: self.game.player(winner).clone(),
            loser: self.game.player(winner.other()).clone(),
            shots,
        };
        info!("{} won after {} shots", summary.winner.name(), shots);
        writeln!(self.out, "Congratulations {}, YOU WIN!", summary.winner.name())?;
        self.print_boards()?;
        Ok(summary)
    }

    /// One request for a shot. Returns `None` if the coordinate was already
    /// targeted, in which case the turn is not consumed.
    fn play_turn(&mut self) -> anyhow::Result<Option<GuessResult>> {
        let shooter = self.game.current_seat();
        let target = shooter.other();
        let player = self.game.player(shooter);
        writeln!(self.out, "It's {}'s turn. Please enter your guess.", player.name())?;
        if !player.is_automated() {
            print_board(&mut self.out, player, self.game.board(shooter), true)?;
            print_board(
                &mut self.out,
                self.game.player(target),
                self.game.board(target),
                false,
            )?;
        }

        let (row, col) = self.commanders[shooter.index()].select_target(&mut self.rng, &self.game)?;
        if !self.game.is_legal_guess(row, col, target)? {
            if self.game.player(shooter).is_automated() {
                debug!("resampling repeated target ({}, {})", row, col);
            } else {
                writeln!(self.out, "{}", ALREADY_TRIED)?;
            }
            return Ok(None);
        }

        writeln!(self.out, "Launching attack...")?;
        self.out.flush()?;
        if !self.pacing.is_zero() {
            thread::sleep(self.pacing);
        }
        let result = self.game.resolve_guess(row, col)?;
        match result {
            GuessResult::Hit => writeln!(self.out, "SUCCESS!!")?,
            GuessResult::Miss => writeln!(self.out, "MISS!!")?,
        }
        Ok(Some(result))
    }

    fn print_boards(&mut self) -> anyhow::Result<()> {
        for seat in Seat::ALL {
            print_board(&mut self.out, self.game.player(seat), self.game.board(seat), true)?;
        }
        Ok(())
    }
}
