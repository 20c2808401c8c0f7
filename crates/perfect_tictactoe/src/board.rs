//! The 3x3 board.

use crate::error::{BoardParseError, InvalidMove};
use crate::{Cell, GameStatus, Player, rules};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// 3x3 tic-tac-toe board.
///
/// Cells are indexed 0-8 in row-major order. A cell only returns to
/// [`Cell::Empty`] through [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Places `player`'s mark at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::OutOfRange`] for an index past 8 and
    /// [`InvalidMove::Occupied`] for a taken cell. The board is untouched in
    /// both cases.
    #[instrument(level = "trace", skip(self))]
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), InvalidMove> {
        match self.get(index) {
            None => Err(InvalidMove::OutOfRange { index }),
            Some(Cell::Occupied(_)) => Err(InvalidMove::Occupied { index }),
            Some(Cell::Empty) => {
                self.cells[index] = Cell::Occupied(player);
                Ok(())
            }
        }
    }

    /// Derives the current status from the cells.
    pub fn status(&self) -> GameStatus {
        rules::status(self)
    }

    /// All empty cells in ascending index order.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| (*cell == Cell::Empty).then_some(index))
            .collect()
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Number of occupied cells, which equals the number of moves played.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell != Cell::Empty).count()
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Sets a known-empty cell during search.
    pub(crate) fn mark(&mut self, index: usize, player: Player) {
        debug_assert!(self.is_empty(index), "search marked occupied cell {index}");
        self.cells[index] = Cell::Occupied(player);
    }

    /// Undoes [`Board::mark`].
    pub(crate) fn unmark(&mut self, index: usize) {
        debug_assert!(!self.is_empty(index), "search cleared empty cell {index}");
        self.cells[index] = Cell::Empty;
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their 1-based number so a player can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => char::from(b'1' + index as u8),
                    Cell::Occupied(player) => player.symbol(),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Reads nine cells: `X`/`O` (any case) for marks, `_`, `.` or `-` for empty.
/// Whitespace, `|` and `/` are ignored so rows may be separated.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();

        if symbols.len() != CELL_COUNT {
            return Err(BoardParseError::WrongLength {
                found: symbols.len(),
            });
        }

        let mut board = Board::new();
        for (position, character) in symbols.into_iter().enumerate() {
            board.cells[position] = match character.to_ascii_uppercase() {
                'X' => Cell::Occupied(Player::X),
                'O' => Cell::Occupied(Player::O),
                '_' | '.' | '-' => Cell::Empty,
                _ => {
                    return Err(BoardParseError::InvalidCharacter {
                        character,
                        position,
                    });
                }
            };
        }

        Ok(board)
    }
}
