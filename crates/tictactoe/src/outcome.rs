//! Evaluated game result.

use crate::{Line, Player};
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
///
/// Exactly one variant holds at any time; `Won` and `Drawn` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and at least one empty square.
    InProgress,
    /// `mark` completed `line`.
    Won {
        /// The winning player.
        mark: Player,
        /// The completed line.
        line: Line,
    },
    /// Board full without a completed line.
    Drawn,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Outcome::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true once no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won { mark, line } => write!(f, "Player {} wins on {}", mark, line),
            Outcome::Drawn => write!(f, "Draw"),
        }
    }
}
