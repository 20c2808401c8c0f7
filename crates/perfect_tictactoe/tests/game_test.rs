//! Games against the engine through the public orchestration API.

use perfect_tictactoe::{
    ENGINE, Game, GameStatus, HUMAN, InvalidMove, Move, MoveError, Player, Position,
};

/// Plays every possible human line against the engine and returns the
/// terminal statuses reached.
fn all_outcomes(game: &Game, outcomes: &mut Vec<GameStatus>) {
    for index in game.board().empty_indices() {
        let mut branch = game.clone();
        let report = branch.place_human_move(index).unwrap();
        if report.status().is_over() {
            outcomes.push(*report.status());
        } else {
            all_outcomes(&branch, outcomes);
        }
    }
}

#[test]
fn test_engine_never_loses() {
    let mut outcomes = Vec::new();
    all_outcomes(&Game::new(), &mut outcomes);

    assert!(!outcomes.is_empty());
    assert!(!outcomes.contains(&GameStatus::Won(Player::X)));
    assert!(outcomes.contains(&GameStatus::Won(Player::O)));
    assert!(outcomes.contains(&GameStatus::Draw));
}

#[test]
fn test_report_describes_both_moves() {
    let mut game = Game::new();
    let report = game.place_human_move(Position::TopLeft.to_index()).unwrap();

    assert_eq!(report.human(), &Move::new(HUMAN, 0));
    let reply = report.reply().expect("engine replies mid-game");
    assert_eq!(reply.index, Position::Center.to_index());
    assert_eq!(reply.score, 0);
    assert_eq!(game.history(), &[Move::new(HUMAN, 0), Move::new(ENGINE, 4)]);
}

#[test]
fn test_finishing_move_gets_no_reply() {
    // Drawn line: X 4, O 0, X 2, O 6, X 3, O 5, X 1, O 7, X 8.
    let moves = [
        Move::new(Player::X, 4),
        Move::new(Player::O, 0),
        Move::new(Player::X, 2),
        Move::new(Player::O, 6),
        Move::new(Player::X, 3),
        Move::new(Player::O, 5),
        Move::new(Player::X, 1),
        Move::new(Player::O, 7),
    ];
    let mut game = Game::replay(&moves).unwrap();
    let report = game.place_human_move(8).unwrap();

    assert_eq!(report.reply(), &None);
    assert_eq!(report.status(), &GameStatus::Draw);
    assert_eq!(
        game.place_human_move(0),
        Err(MoveError::GameOver {
            status: GameStatus::Draw
        })
    );
}

#[test]
fn test_invalid_human_moves_leave_game_unchanged() {
    let mut game = Game::new();
    game.place_human_move(4).unwrap();
    let board = game.board().clone();
    let history = game.history().to_vec();

    assert_eq!(
        game.place_human_move(4),
        Err(MoveError::Invalid {
            source: InvalidMove::Occupied { index: 4 }
        })
    );
    assert_eq!(
        game.place_human_move(9),
        Err(MoveError::Invalid {
            source: InvalidMove::OutOfRange { index: 9 }
        })
    );
    assert_eq!(game.board(), &board);
    assert_eq!(game.history(), history.as_slice());
    assert_eq!(game.to_move(), HUMAN);
}

#[test]
fn test_reset_after_finished_game_starts_over() {
    let mut game = Game::new();
    while !game.status().is_over() {
        let index = game.board().empty_indices()[0];
        game.place_human_move(index).unwrap();
    }
    assert_ne!(game.status(), GameStatus::Won(HUMAN));

    game.reset();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.to_move(), HUMAN);
    assert!(game.place_human_move(0).is_ok());
}

#[test]
fn test_independent_games() {
    let mut first = Game::new();
    let second = Game::new();
    first.place_human_move(4).unwrap();
    assert_eq!(second.board().occupied_count(), 0);
    assert_eq!(first.board().occupied_count(), 2);
}

#[test]
fn test_error_messages() {
    let err = MoveError::OutOfTurn {
        player: Player::O,
        expected: Player::X,
    };
    assert_eq!(err.to_string(), "It's not O's turn (X to move)");
    let err = MoveError::from(InvalidMove::Occupied { index: 3 });
    assert_eq!(err.to_string(), "Cell 3 is already occupied");
}
