//! Command-line interface for perfect_play.

use clap::{Parser, Subcommand};
use perfect_tictactoe::Player;
use std::path::PathBuf;

/// Perfect Play - tic-tac-toe against an opponent that cannot lose
#[derive(Parser, Debug)]
#[command(name = "perfect_play")]
#[command(about = "Play tic-tac-toe against a perfect minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = crate::config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game as X against the engine
    Play {
        /// Pause before the engine replies, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Show the engine's evaluation of each reply
        #[arg(long)]
        show_scores: bool,
    },

    /// Print the optimal move for a position
    BestMove {
        /// Nine cells in row-major order: X, O, and _ . or - for empty
        #[arg(short, long)]
        board: String,

        /// Side to move; inferred from the mark counts when omitted
        #[arg(short, long)]
        to_move: Option<Player>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides from an empty board
    SelfPlay {
        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            delay_ms: None,
            show_scores: false,
        }
    }
}
