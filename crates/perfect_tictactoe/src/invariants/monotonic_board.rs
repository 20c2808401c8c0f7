//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::{Board, Game};

/// Invariant: the board is exactly what the history builds.
///
/// Replaying the history onto an empty board must never hit an occupied
/// cell and must reproduce the current board, so no mark was overwritten
/// or removed.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = Board::new();

        for action in game.history() {
            if reconstructed.place(action.index, action.player).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
