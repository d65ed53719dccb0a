#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod cli;
pub mod commander;
#[cfg(feature = "std")]
pub mod controller;
pub mod engine;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;

pub use commander::{AiCommander, Commander};
#[cfg(feature = "std")]
pub use commander::CliCommander;
#[cfg(feature = "std")]
pub use controller::{GameController, GameSummary};
pub use engine::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
