//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{Game, Player};

/// Invariant: players alternate turns, starting with X.
///
/// While the game is in progress the player to move must also follow from
/// the length of the history.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if history.first().is_some_and(|first| first.player != Player::X) {
            return false;
        }

        if history
            .windows(2)
            .any(|pair| pair[0].player == pair[1].player)
        {
            return false;
        }

        if game.status().is_over() {
            return true;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let game = Game::replay(&[
            Move::new(Player::X, 0),
            Move::new(Player::O, 4),
            Move::new(Player::X, 2),
        ])
        .unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = Game::new();
        game.play(Player::X, 0).unwrap();
        game.history.push(Move::new(Player::X, 4));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_side_to_move_violates() {
        let mut game = Game::new();
        game.play(Player::X, 0).unwrap();
        game.to_move = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
