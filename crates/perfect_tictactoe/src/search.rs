//! Exhaustive minimax search.
//!
//! Scores are always from O's point of view: O is the maximizer, X the
//! minimizer. Every continuation is searched to the end of the game with no
//! pruning, and ties go to the lowest cell index, so the same position
//! always yields the same move.

use crate::{Board, GameStatus, Player, rules};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a position X has won.
pub const X_WIN_SCORE: i32 = -10;
/// Score of a position O has won.
pub const O_WIN_SCORE: i32 = 10;
/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// Outcome of a search: the chosen cell and its value to O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    /// Chosen cell, absent when the position is already terminal.
    pub index: Option<usize>,
    /// Game-theoretic value to O: -10, 0 or +10.
    pub score: i32,
}

impl SearchResult {
    fn terminal(score: i32) -> Self {
        Self { index: None, score }
    }
}

impl From<ScoredMove> for SearchResult {
    fn from(scored: ScoredMove) -> Self {
        Self {
            index: Some(scored.index),
            score: scored.score,
        }
    }
}

/// A candidate cell together with the value the search gave it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Candidate cell.
    pub index: usize,
    /// Value to O after playing the cell.
    pub score: i32,
}

/// Counters from the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SearchStats {
    /// Positions visited, root included.
    nodes: u64,
}

/// Minimax searcher.
///
/// Holds nothing but statistics; any number of searchers can run on
/// independent boards.
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    stats: SearchStats,
}

impl Minimax {
    /// Creates a searcher with zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the last completed search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Finds the optimal move for `to_move`.
    ///
    /// The search backtracks on a private copy, so `board` is never touched.
    #[instrument(skip(self, board), fields(to_move = %to_move))]
    pub fn best_move(&mut self, board: &Board, to_move: Player) -> SearchResult {
        let mut scratch = board.clone();
        let result = self.search(&mut scratch, to_move);
        debug!(
            index = ?result.index,
            score = result.score,
            nodes = self.stats.nodes,
            "Search complete"
        );
        result
    }

    /// Scores every empty cell for `to_move` in ascending index order.
    ///
    /// Empty for a terminal position.
    #[instrument(skip(self, board), fields(to_move = %to_move))]
    pub fn evaluate_moves(&mut self, board: &Board, to_move: Player) -> Vec<ScoredMove> {
        self.stats = SearchStats::default();
        let mut scratch = board.clone();
        if terminal_score(&scratch).is_some() {
            return Vec::new();
        }
        self.stats.nodes += 1;
        let candidates = self.candidates(&mut scratch, to_move);
        debug!(
            candidates = candidates.len(),
            nodes = self.stats.nodes,
            "Evaluation complete"
        );
        candidates
    }

    /// Searches `board` in place.
    ///
    /// Each hypothetical mark is undone before the next sibling is tried, so
    /// the board is identical on return.
    pub fn search(&mut self, board: &mut Board, to_move: Player) -> SearchResult {
        self.stats = SearchStats::default();
        self.minimax(board, to_move)
    }

    fn minimax(&mut self, board: &mut Board, to_move: Player) -> SearchResult {
        self.stats.nodes += 1;

        if let Some(score) = terminal_score(board) {
            return SearchResult::terminal(score);
        }

        let candidates = self.candidates(board, to_move);
        // A non-terminal board always has an empty cell.
        select(&candidates, to_move).map_or(SearchResult::terminal(DRAW_SCORE), SearchResult::from)
    }

    fn candidates(&mut self, board: &mut Board, to_move: Player) -> Vec<ScoredMove> {
        let mut scored = Vec::new();
        for index in board.empty_indices() {
            board.mark(index, to_move);
            let reply = self.minimax(board, to_move.opponent());
            board.unmark(index);
            scored.push(ScoredMove {
                index,
                score: reply.score,
            });
        }
        scored
    }
}

/// Finds the optimal move for `to_move` on `board`.
pub fn best_move(board: &Board, to_move: Player) -> SearchResult {
    Minimax::new().best_move(board, to_move)
}

/// Scores every empty cell for `to_move`, see [`Minimax::evaluate_moves`].
pub fn evaluate_moves(board: &Board, to_move: Player) -> Vec<ScoredMove> {
    Minimax::new().evaluate_moves(board, to_move)
}

/// Leaf value of a finished game, or `None` while play continues.
pub fn terminal_score(board: &Board) -> Option<i32> {
    match rules::status(board) {
        GameStatus::Won(Player::X) => Some(X_WIN_SCORE),
        GameStatus::Won(Player::O) => Some(O_WIN_SCORE),
        GameStatus::Draw => Some(DRAW_SCORE),
        GameStatus::InProgress => None,
    }
}

/// Picks the strictly best score for `to_move`; the first candidate wins ties.
fn select(candidates: &[ScoredMove], to_move: Player) -> Option<ScoredMove> {
    let mut best: Option<ScoredMove> = None;
    for candidate in candidates {
        let better = match best {
            None => true,
            Some(current) => match to_move {
                Player::O => candidate.score > current.score,
                Player::X => candidate.score < current.score,
            },
        };
        if better {
            best = Some(*candidate);
        }
    }
    best
}
