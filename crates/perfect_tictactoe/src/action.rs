//! Moves as first-class values.

use crate::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark on a cell.
///
/// Accepted moves are kept in the game's history so a game can be replayed
/// and checked against its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Cell index (0-8) the mark goes on.
    pub index: usize,
}

impl Move {
    /// Named position of the move's cell.
    pub fn position(&self) -> Option<Position> {
        Position::from_index(self.index)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position() {
            Some(position) => write!(f, "{} -> {}", self.player, position),
            None => write!(f, "{} -> cell {}", self.player, self.index),
        }
    }
}
