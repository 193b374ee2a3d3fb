//! History consistency invariant: history length matches occupied squares.

use super::Invariant;
use crate::GameState;

/// Invariant: History length equals number of occupied squares.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().len() == game.board().occupied()
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}
