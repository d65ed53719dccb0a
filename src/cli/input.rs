//! Console coordinate input: parsing and reprompt loops.

use std::io::{BufRead, Write};

use anyhow::bail;

use crate::engine::config::BOARD_SIZE;

pub const COLUMN_PROMPT: &str = "Enter the column letter: ";
pub const ROW_PROMPT: &str = "Enter the row number: ";
pub const COLUMN_ERROR: &str = "Only english letters (A-J) are allowed. (*Not case-sensitive)";
pub const ROW_ERROR: &str = "Only whole numbers between 1 and 10 are allowed";

/// Parse a single column letter (`A`-`J`, any case) into a zero-based index.
pub fn parse_column(input: &str) -> Option<usize> {
    let mut chars = input.trim().chars();
    let ch = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() || !ch.is_ascii_uppercase() {
        return None;
    }
    let col = (ch as u8 - b'A') as usize;
    (col < BOARD_SIZE).then_some(col)
}

/// Parse a 1-based row number (`1`-`10`) into a zero-based index.
pub fn parse_row(input: &str) -> Option<usize> {
    let row: usize = input.trim().parse().ok()?;
    (1..=BOARD_SIZE).contains(&row).then(|| row - 1)
}

/// Prompt until the user types a valid column.
pub fn read_column<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<usize> {
    prompt(input, output, COLUMN_PROMPT, COLUMN_ERROR, parse_column)
}

/// Prompt until the user types a valid row.
pub fn read_row<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<usize> {
    prompt(input, output, ROW_PROMPT, ROW_ERROR, parse_row)
}

fn prompt<R, W, T>(
    input: &mut R,
    output: &mut W,
    question: &str,
    error: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> anyhow::Result<T>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{}", question)?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed while waiting for a coordinate");
        }
        match parse(&line) {
            Some(value) => return Ok(value),
            None => writeln!(output, "{}", error)?,
        }
    }
}
