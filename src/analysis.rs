//! One-shot reports: best move for a position and engine self-play.

use perfect_tictactoe::search::Minimax;
use perfect_tictactoe::{Board, GameStatus, Move, Player, Position, ScoredMove, SearchResult};
use serde::Serialize;
use std::fmt::Write as _;
use tracing::{info, instrument};

/// Everything the search found for one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestMoveReport {
    /// Position that was searched.
    pub board: Board,
    /// Side the search played for.
    pub to_move: Player,
    /// Chosen move and its value to O.
    pub result: SearchResult,
    /// Value of every legal move, in index order.
    pub candidates: Vec<ScoredMove>,
}

/// Side to move implied by the marks on the board: X unless X is ahead.
pub fn infer_to_move(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Searches `board` for `to_move`.
#[instrument(skip(board))]
pub fn analyze(board: &Board, to_move: Player) -> BestMoveReport {
    let mut searcher = Minimax::new();
    let candidates = searcher.evaluate_moves(board, to_move);
    let result = searcher.best_move(board, to_move);
    info!(nodes = *searcher.stats().nodes(), "Position analyzed");

    BestMoveReport {
        board: board.clone(),
        to_move,
        result,
        candidates,
    }
}

impl BestMoveReport {
    /// Plain-text rendering for the terminal.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}\n", self.board);
        match self.result.index.and_then(Position::from_index) {
            Some(position) => {
                let _ = writeln!(
                    out,
                    "Best move for {}: {} (cell {}), score {}",
                    self.to_move,
                    position,
                    position.to_index() + 1,
                    self.result.score
                );
            }
            None => {
                let _ = writeln!(
                    out,
                    "No move: {} (score {})",
                    self.board.status(),
                    self.result.score
                );
            }
        }
        for candidate in &self.candidates {
            let _ = writeln!(
                out,
                "  cell {}: {:+}",
                candidate.index + 1,
                candidate.score
            );
        }
        out
    }
}

/// A game the engine played against itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfPlayGame {
    /// Moves in order.
    pub moves: Vec<Move>,
    /// Final status.
    pub status: GameStatus,
}

/// Plays both sides with the search from an empty board.
#[instrument]
pub fn self_play() -> SelfPlayGame {
    let mut board = Board::new();
    let mut to_move = Player::X;
    let mut moves = Vec::new();
    let mut searcher = Minimax::new();

    while let Some(index) = searcher.best_move(&board, to_move).index {
        // The search only offers empty cells.
        if board.place(index, to_move).is_err() {
            break;
        }
        moves.push(Move::new(to_move, index));
        to_move = to_move.opponent();
    }

    let status = board.status();
    info!(%status, moves = moves.len(), "Self-play finished");
    SelfPlayGame { moves, status }
}
