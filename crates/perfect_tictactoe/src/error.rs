//! Error types for move validation and board parsing.
//!
//! Every rejection is local and recoverable. Nothing is mutated when one of
//! these errors is returned.

use crate::{GameStatus, Player};
use derive_more::{Display, Error};

/// A placement the board cannot accept.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    /// The index is outside 0-8.
    #[display("Cell {index} is out of range (must be 0-8)")]
    OutOfRange {
        /// Rejected index.
        index: usize,
    },
    /// The cell already holds a mark.
    #[display("Cell {index} is already occupied")]
    Occupied {
        /// Rejected index.
        index: usize,
    },
}

impl InvalidMove {
    /// Returns the index that was rejected.
    pub fn index(&self) -> usize {
        match self {
            InvalidMove::OutOfRange { index } | InvalidMove::Occupied { index } => *index,
        }
    }
}

/// Error returned when a game rejects a move.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The board rejected the placement.
    #[display("{source}")]
    Invalid {
        /// Underlying placement error.
        source: InvalidMove,
    },

    /// A player moved when it was not their turn.
    #[display("It's not {player}'s turn ({expected} to move)")]
    OutOfTurn {
        /// Player that attempted the move.
        player: Player,
        /// Player whose turn it is.
        expected: Player,
    },

    /// The game already reached a terminal state.
    #[display("Game is already over: {status}")]
    GameOver {
        /// Terminal status of the game.
        status: GameStatus,
    },
}

impl From<InvalidMove> for MoveError {
    fn from(source: InvalidMove) -> Self {
        MoveError::Invalid { source }
    }
}

/// Error returned when text cannot be read as a board.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    /// The text does not describe exactly nine cells.
    #[display("Expected 9 cells, found {found}")]
    WrongLength {
        /// Number of cells found.
        found: usize,
    },
    /// A character is not a mark or an empty marker.
    #[display("Invalid cell character {character:?} at cell {position}")]
    InvalidCharacter {
        /// Offending character.
        character: char,
        /// Cell index the character would have filled.
        position: usize,
    },
}
