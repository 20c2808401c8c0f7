//! Perfect Play - terminal front end for the perfect tic-tac-toe engine.
//!
//! The game logic lives in [`perfect_tictactoe`]. This crate adds the pieces
//! around it: command-line parsing, configuration, tracing setup, the
//! interactive play loop, and one-shot analysis commands.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analysis;
pub mod cli;
pub mod config;
pub mod logging;
pub mod terminal;

pub use analysis::{BestMoveReport, SelfPlayGame, analyze, infer_to_move, self_play};
pub use cli::{Cli, Command};
pub use config::{ConfigError, PlayConfig};
pub use terminal::{Input, Session};
