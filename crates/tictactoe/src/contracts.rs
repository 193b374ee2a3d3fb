//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} action {Q}`.

use crate::Square;
use crate::action::{Move, MoveError};
use crate::game::GameState;
use crate::invariants::{InvariantSet, TicTacToeInvariants};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must still be in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move once the outcome is terminal.
    #[instrument(skip(game))]
    pub fn check(_mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if game.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects a move onto an occupied square.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if !game.board().is_empty(mov.position()) {
            Err(MoveError::SquareOccupied(mov.position()))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the game is live and the square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(mov, game)?;
        SquareIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game not over
/// - Square must be empty
///
/// Postconditions:
/// - Exactly one square went from empty to occupied
/// - All [`TicTacToeInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if !SingleSquareAdded::holds(before, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: move must fill exactly one empty square".to_string(),
            ));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Move postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Transition property: previously occupied squares are unchanged and
/// exactly one empty square was filled.
pub struct SingleSquareAdded;

impl SingleSquareAdded {
    /// Compares the boards on either side of a move.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let mut added = 0;
        for (old, new) in before
            .board()
            .squares()
            .iter()
            .zip(after.board().squares().iter())
        {
            match (old, new) {
                (Square::Empty, Square::Occupied(_)) => added += 1,
                (old, new) if old == new => {}
                _ => return false,
            }
        }
        added == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_precondition_empty_square() {
        let game = GameState::new();
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = GameState::new().apply_move(4).expect("legal move");
        let action = Move::new(Player::O, Position::Center);
        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::SquareOccupied(Position::Center))
        ));
    }

    #[test]
    fn test_precondition_game_over() {
        let game = GameState::replay(&[0, 3, 1, 4, 2]).expect("legal moves");
        let action = Move::new(Player::O, Position::BottomRight);
        assert_eq!(MoveContract::pre(&game, &action), Err(MoveError::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let after = before.apply_move(4).expect("legal move");
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_rejects_no_op() {
        let before = GameState::new();
        assert!(MoveContract::post(&before, &before).is_err());
    }

    #[test]
    fn test_postcondition_rejects_two_squares() {
        let before = GameState::new();
        let after = GameState::replay(&[0, 1]).expect("legal moves");
        assert!(!SingleSquareAdded::holds(&before, &after));
    }
}
