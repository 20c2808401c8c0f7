//! Game orchestration: turn order, terminal states and the engine's replies.
//!
//! A [`Game`] owns its board, whose turn it is and the move history. There is
//! no shared state between games, so any number can run side by side.

use crate::error::MoveError;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::search::{Minimax, ScoredMove, SearchStats};
use crate::{Board, GameStatus, Move, Player};
use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};

/// The human side. Always opens a fresh game.
pub const HUMAN: Player = Player::X;

/// The side played by the search engine.
pub const ENGINE: Player = Player::O;

/// What happened during one call to [`Game::place_human_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct TurnReport {
    /// The accepted human move.
    human: Move,
    /// The engine's reply, absent when the human move ended the game.
    reply: Option<ScoredMove>,
    /// Status after both moves.
    status: GameStatus,
}

/// A single game of tic-tac-toe against the engine.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) history: Vec<Move>,
    searcher: Minimax,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: HUMAN,
            history: Vec::new(),
            searcher: Minimax::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is. Unchanged once the game is over.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Current status, derived from the board.
    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    /// Statistics of the engine's most recent search.
    pub fn search_stats(&self) -> SearchStats {
        self.searcher.stats()
    }

    /// Plays `player` at `index`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game has been won or drawn
    /// - [`MoveError::OutOfTurn`] if `player` is not to move
    /// - [`MoveError::Invalid`] for an out-of-range or occupied cell
    ///
    /// A rejected move changes nothing.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn play(&mut self, player: Player, index: usize) -> Result<GameStatus, MoveError> {
        let status = self.status();
        if status.is_over() {
            warn!(%status, "Move rejected, game is over");
            return Err(MoveError::GameOver { status });
        }

        if player != self.to_move {
            warn!("Move rejected, out of turn");
            return Err(MoveError::OutOfTurn {
                player,
                expected: self.to_move,
            });
        }

        self.board.place(index, player).inspect_err(|error| {
            warn!(%error, "Move rejected by board");
        })?;

        let action = Move::new(player, index);
        self.history.push(action);

        let status = self.status();
        if !status.is_over() {
            self.to_move = player.opponent();
        }
        self.assert_invariants();

        debug!(%action, %status, "Move applied");
        Ok(status)
    }

    /// Plays the human's mark, then lets the engine answer.
    ///
    /// The engine only replies while the game is still in progress.
    #[instrument(skip(self))]
    pub fn place_human_move(&mut self, index: usize) -> Result<TurnReport, MoveError> {
        let status = self.play(HUMAN, index)?;
        let human = Move::new(HUMAN, index);

        let reply = if status.is_over() {
            None
        } else {
            Some(self.ai_move()?)
        };

        let status = self.status();
        if status.is_over() {
            info!(%status, moves = self.history.len(), "Game finished");
        }

        Ok(TurnReport {
            human,
            reply,
            status,
        })
    }

    /// Computes the engine's best move and applies it.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] on a finished game and [`MoveError::OutOfTurn`]
    /// when it is the human's turn.
    #[instrument(skip(self))]
    pub fn ai_move(&mut self) -> Result<ScoredMove, MoveError> {
        let status = self.status();
        if status.is_over() {
            return Err(MoveError::GameOver { status });
        }
        if self.to_move != ENGINE {
            return Err(MoveError::OutOfTurn {
                player: ENGINE,
                expected: self.to_move,
            });
        }

        let result = self.searcher.best_move(&self.board, ENGINE);
        let Some(index) = result.index else {
            return Err(MoveError::GameOver { status });
        };

        self.play(ENGINE, index)?;
        info!(index, score = result.score, "Engine moved");
        Ok(ScoredMove {
            index,
            score: result.score,
        })
    }

    /// Clears the board and hands the first move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
        self.to_move = HUMAN;
        info!("Game reset");
    }

    /// Rebuilds a game by playing `moves` from the start.
    ///
    /// # Errors
    ///
    /// Returns the first move the game rejects.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for action in moves {
            game.play(action.player, action.index)?;
        }
        Ok(game)
    }

    fn assert_invariants(&self) {
        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "game invariants violated: {:?}",
            GameInvariants::check_all(self)
        );
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InvalidMove;

    #[test]
    fn test_new_game_x_to_move() {
        let game = Game::new();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_play_toggles_turn() {
        let mut game = Game::new();
        assert_eq!(game.play(Player::X, 4), Ok(GameStatus::InProgress));
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.history(), &[Move::new(Player::X, 4)]);
    }

    #[test]
    fn test_out_of_turn_rejected_without_change() {
        let mut game = Game::new();
        assert_eq!(
            game.play(Player::O, 4),
            Err(MoveError::OutOfTurn {
                player: Player::O,
                expected: Player::X
            })
        );
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_occupied_rejected_without_change() {
        let mut game = Game::new();
        game.play(Player::X, 4).unwrap();
        let board = game.board().clone();

        assert_eq!(
            game.play(Player::O, 4),
            Err(MoveError::Invalid {
                source: InvalidMove::Occupied { index: 4 }
            })
        );
        assert_eq!(game.board(), &board);
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_game_over_rejects_moves() {
        let mut game = Game::new();
        for (player, index) in [
            (Player::X, 0),
            (Player::O, 3),
            (Player::X, 1),
            (Player::O, 4),
        ] {
            game.play(player, index).unwrap();
        }
        assert_eq!(game.play(Player::X, 2), Ok(GameStatus::Won(Player::X)));
        assert_eq!(game.to_move(), Player::X);

        let board = game.board().clone();
        assert_eq!(
            game.play(Player::O, 5),
            Err(MoveError::GameOver {
                status: GameStatus::Won(Player::X)
            })
        );
        assert_eq!(game.board(), &board);
    }

    #[test]
    fn test_human_move_gets_center_reply() {
        let mut game = Game::new();
        let report = game.place_human_move(0).unwrap();

        assert_eq!(report.human(), &Move::new(Player::X, 0));
        assert_eq!(report.reply(), &Some(ScoredMove { index: 4, score: 0 }));
        assert_eq!(report.status(), &GameStatus::InProgress);
        assert_eq!(game.to_move(), Player::X);
        assert!(*game.search_stats().nodes() > 0);
    }

    #[test]
    fn test_ai_move_requires_engine_turn() {
        let mut game = Game::new();
        assert_eq!(
            game.ai_move(),
            Err(MoveError::OutOfTurn {
                player: Player::O,
                expected: Player::X
            })
        );
    }

    #[test]
    fn test_reset_restores_fresh_game() {
        let mut game = Game::new();
        game.place_human_move(4).unwrap();
        game.reset();

        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.to_move(), Player::X);
        assert!(game.history().is_empty());
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_replay_matches_history() {
        let moves = [
            Move::new(Player::X, 4),
            Move::new(Player::O, 0),
            Move::new(Player::X, 8),
        ];
        let game = Game::replay(&moves).unwrap();
        assert_eq!(game.history(), &moves);
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_replay_reports_first_rejection() {
        let moves = [Move::new(Player::X, 4), Move::new(Player::X, 0)];
        assert!(matches!(
            Game::replay(&moves),
            Err(MoveError::OutOfTurn { .. })
        ));
    }
}
