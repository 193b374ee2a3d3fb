//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] maps a [`Board`] to an [`Outcome`] by checking
//!   the eight fixed [`LINES`]
//! - **State**: [`GameState`] is an owned value; [`GameState::apply_move`]
//!   returns the successor or a [`MoveError`] and never mutates on rejection
//! - **Session**: [`Game`] holds the current state for a front end
//! - **Contracts**: preconditions and invariants checked around every move
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameState, Player};
//!
//! let state = GameState::replay(&[0, 3, 1, 4, 2]).unwrap();
//! assert_eq!(state.outcome().winner(), Some(Player::X));
//! assert_eq!(state.winning_line().unwrap().indices(), [0, 1, 2]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod outcome;
mod position;
mod types;
mod view;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use contracts::{
    Contract, GameNotOver, LegalMove, MoveContract, SingleSquareAdded, SquareIsEmpty,
};
pub use game::{Game, GameState};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, OutcomeConsistentInvariant, TicTacToeInvariants,
};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{LINES, Line, evaluate};
pub use types::{Board, BoardParseError, Player, Square};
pub use view::{BoardView, Status};
