//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. They ignore whose turn it is and how
//! the board was reached, so contracts and invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, check_winner};

use crate::{Board, Outcome};
use tracing::instrument;

/// Evaluates a board to its outcome.
///
/// A completed line wins (first in [`LINES`] order); otherwise a full
/// board is drawn and anything else is still in progress.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = check_winner(board) {
        return Outcome::Won { mark, line };
    }

    if is_full(board) {
        Outcome::Drawn
    } else {
        Outcome::InProgress
    }
}
