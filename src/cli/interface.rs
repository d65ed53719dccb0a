//! Console text: rules, board panels and turn messages.

use std::io::{self, Write};

use crate::engine::{Board, Player};

pub const HELP_TEXT: &str = "\
Welcome to Battleship!
Sink every ship in the enemy fleet before they sink yours.

Game Rules:
1. Grid: the game is played on a 10x10 grid, columns A-J and rows 1-10.
2. Ships: each side has a Carrier (5), Battleship (4), Cruiser (3),
   Submarine (3) and Destroyer (2), placed at random.
3. Turns: pick a column letter and a row number to fire at.
4. Hits and Misses: a hit lets you fire again, a miss passes the turn.
5. Winning: the first side to hit all 17 enemy ship cells wins.

Legend:
- ~ - Water: open water or an unexplored cell.
- S - Ship: part of one of your ships.
- O - Hit: a ship was hit at this location.
- X - Miss: a shot landed here but found nothing.

Good luck, Captain!
";

pub const ALREADY_TRIED: &str =
    "You have already tried that, Captain! Please, pick a valid coordinate to hit.";

const RULE: &str = "======================";

pub fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", HELP_TEXT)
}

/// Print `player`'s board under a name banner. Ships are hidden unless `reveal`.
pub fn print_board<W: Write>(
    out: &mut W,
    player: &Player,
    board: &Board,
    reveal: bool,
) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{}'s Board:", player.name())?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{}", board.view(reveal))
}
