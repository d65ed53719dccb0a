//! Turn engine and win evaluation.
//!
//! A [`Game`] owns both players and their boards. The current seat fires at
//! the waiting seat's board; a hit keeps the turn, a miss passes it.

use log::debug;
use rand::Rng;

use crate::engine::{
    board::Board,
    common::{BoardError, GuessResult},
    config::{fleet_cells, BOARD_SIZE, MAX_SAMPLING_ATTEMPTS, SHIPS},
    placement::place_fleet,
    player::{Player, Seat},
    ship::ShipType,
};

/// Core game state: two players, their boards and whose turn it is.
#[derive(Debug, Clone)]
pub struct Game {
    players: [Player; 2],
    boards: [Board; 2],
    ships: &'static [ShipType],
    winning_score: usize,
    current: Seat,
}

impl Game {
    /// Start a game: place the standard fleet on a fresh board for each player.
    /// The first player moves first.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, players: [Player; 2]) -> Result<Self, BoardError> {
        let mut boards = [Board::new(), Board::new()];
        for (player, board) in players.iter().zip(boards.iter_mut()) {
            debug!("placing fleet for {}", player.name());
            place_fleet(rng, board, &SHIPS)?;
        }
        Ok(Self::from_boards(players, boards))
    }

    /// Build a game around prepared boards; board `i` belongs to player `i`.
    pub fn from_boards(players: [Player; 2], boards: [Board; 2]) -> Self {
        Self {
            players,
            boards,
            ships: &SHIPS,
            winning_score: fleet_cells(&SHIPS),
            current: Seat::First,
        }
    }

    pub fn board_size(&self) -> usize {
        BOARD_SIZE
    }

    /// Ship catalog each fleet was built from.
    pub fn ships(&self) -> &'static [ShipType] {
        self.ships
    }

    /// Hits needed to win.
    pub fn winning_score(&self) -> usize {
        self.winning_score
    }

    /// Players in seat order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.index()]
    }

    pub fn board(&self, seat: Seat) -> &Board {
        &self.boards[seat.index()]
    }

    pub fn board_mut(&mut self, seat: Seat) -> &mut Board {
        &mut self.boards[seat.index()]
    }

    /// Seat whose turn it is.
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// Seat being fired upon.
    pub fn waiting_seat(&self) -> Seat {
        self.current.other()
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn waiting_player(&self) -> &Player {
        self.player(self.waiting_seat())
    }

    /// `true` iff (row, col) on `target`'s board has not been fired at.
    pub fn is_legal_guess(&self, row: usize, col: usize, target: Seat) -> Result<bool, BoardError> {
        self.board(target).is_legal_target(row, col)
    }

    /// Fire the current player's shot at (row, col) on the waiting board.
    ///
    /// A hit scores a point and keeps the turn; a miss hands the turn over.
    /// Already-targeted cells are rejected with [`BoardError::InvalidGuess`]
    /// and leave the game untouched.
    pub fn resolve_guess(&mut self, row: usize, col: usize) -> Result<GuessResult, BoardError> {
        let shooter = self.current;
        let target = shooter.other();
        let result = self.boards[target.index()].strike(row, col)?;
        match result {
            GuessResult::Hit => self.players[shooter.index()].record_hit(),
            GuessResult::Miss => self.current = target,
        }
        debug!(
            "{} fired at row {}, col {}: {:?}",
            self.player(shooter).name(),
            row + 1,
            (b'A' + col as u8) as char,
            result
        );
        Ok(result)
    }

    /// A uniformly random coordinate the current player has not fired at.
    /// `None` once every cell of the waiting board has been targeted.
    pub fn random_guess<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(usize, usize)> {
        let board = self.board(self.waiting_seat());
        for _ in 0..MAX_SAMPLING_ATTEMPTS {
            let row = rng.random_range(0..board.size());
            let col = rng.random_range(0..board.size());
            if board.is_legal_target(row, col).unwrap_or(false) {
                return Some((row, col));
            }
        }
        let remaining = board.legal_targets().count();
        if remaining == 0 {
            return None;
        }
        board.legal_targets().nth(rng.random_range(0..remaining))
    }

    /// The current player, once its score reaches the winning score.
    pub fn check_winner(&self) -> Option<&Player> {
        self.winner_seat().map(|seat| self.player(seat))
    }

    /// Seat form of [`Game::check_winner`].
    pub fn winner_seat(&self) -> Option<Seat> {
        if self.current_player().score() == self.winning_score {
            Some(self.current)
        } else {
            None
        }
    }
}
