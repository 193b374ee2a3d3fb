//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: Players alternate turns.
///
/// History opens with X and never repeats a player. While the game is live
/// the next turn belongs to the player who did not move last; once it is
/// over the turn stays with the last mover. X never holds fewer squares
/// than O, nor more than one extra.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        if history.first().is_some_and(|m| m.player() != Player::X) {
            return false;
        }

        if history.windows(2).any(|w| w[0].player() == w[1].player()) {
            return false;
        }

        let xs = game.board().count(Player::X);
        let os = game.board().count(Player::O);
        if xs != os && xs != os + 1 {
            return false;
        }

        match history.last() {
            None => !game.is_over() && game.turn() == Player::X,
            Some(last) if game.is_over() => game.turn() == last.player(),
            Some(last) => game.turn() == last.player().opponent(),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
