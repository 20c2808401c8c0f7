//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player};

/// The eight winning lines: rows, columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns true if `player` holds all three cells of at least one line.
pub fn has_won(board: &Board, player: Player) -> bool {
    let mark = Cell::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.cells()[i] == mark))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let cells = board.cells();
        if let Cell::Occupied(player) = cells[a]
            && cells[a] == cells[b]
            && cells[b] == cells[c]
        {
            return Some(player);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
        assert!(!has_won(&Board::new(), Player::X));
    }

    #[test]
    fn test_winner_top_row() {
        let board = board("XXX OO_ ___");
        assert_eq!(winner(&board), Some(Player::X));
        assert!(has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board("XXO XO_ O__");
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut board = Board::new();
            for index in line {
                board.place(index, Player::O).unwrap();
            }
            assert!(has_won(&board, Player::O), "line {line:?} not detected");
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(winner(&board("XX_ ___ ___")), None);
    }
}
