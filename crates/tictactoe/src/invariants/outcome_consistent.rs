//! Outcome consistency invariant: stored outcome matches the board.

use super::Invariant;
use crate::GameState;
use crate::rules::evaluate;

/// Invariant: The stored outcome is what the rule evaluator says.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        *game.outcome() == evaluate(game.board())
    }

    fn description() -> &'static str {
        "Outcome matches the evaluated board"
    }
}
