//! Command-line interface utilities and display functions
//!
//! - `input`: column/row parsing with reprompt loops
//! - `interface`: help text and board panels

#![cfg(feature = "std")]

pub mod input;
pub mod interface;

pub use input::{parse_column, parse_row, read_column, read_row};
pub use interface::{print_board, print_help, ALREADY_TRIED, HELP_TEXT};
