//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The board's own status
//! check and the search engine's terminal test both go through here.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, has_won, winner};

use crate::{Board, GameStatus, Player};

/// Derives the game status from the cells on the board.
///
/// Both players are checked independently. A legal board can never show two
/// winners; if one is constructed by hand, X is reported.
pub fn status(board: &Board) -> GameStatus {
    if has_won(board, Player::X) {
        GameStatus::Won(Player::X)
    } else if has_won(board, Player::O) {
        GameStatus::Won(Player::O)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
