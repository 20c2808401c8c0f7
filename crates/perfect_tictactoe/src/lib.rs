//! Perfect-play tic-tac-toe.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, move validation and status detection
//! - **Rules**: winning lines, full-board and draw checks shared by the
//!   board and the search
//! - **Search**: exhaustive minimax returning the optimal cell for either side
//! - **Game**: turn order, terminal states and the engine's replies
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! let report = game.place_human_move(0)?;
//! assert_eq!(report.reply().map(|reply| reply.index), Some(4));
//! assert_eq!(*report.status(), GameStatus::InProgress);
//! # Ok::<(), perfect_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod game;
pub mod invariants;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use action::Move;
pub use board::{Board, CELL_COUNT};
pub use error::{BoardParseError, InvalidMove, MoveError};
pub use game::{ENGINE, Game, HUMAN, TurnReport};
pub use position::Position;
pub use search::{Minimax, ScoredMove, SearchResult, SearchStats, best_move, evaluate_moves};
pub use types::{Cell, GameStatus, Player};
