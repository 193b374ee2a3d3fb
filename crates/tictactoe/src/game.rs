//! Game state and the move transition.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract};
use crate::rules::evaluate;
use crate::{Board, Line, Outcome, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state.
///
/// Owned value: a transition returns a new state and leaves `self` alone,
/// so a rejected move is simply the old state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    pub(crate) board: Board,
    /// Player to move next. Frozen once the game is over.
    pub(crate) turn: Player,
    /// Evaluated outcome of `board`.
    pub(crate) outcome: Outcome,
    /// Accepted moves, oldest first.
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// The winning line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        self.outcome.winning_line()
    }

    /// Positions that would accept a move. Empty once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// A cell refuses input when occupied or when the game is over.
    pub fn is_disabled(&self, pos: Position) -> bool {
        !self.board.is_empty(pos) || self.is_over()
    }

    /// Places the current player's mark at `index`.
    ///
    /// Returns the successor state. On rejection `self` is untouched and the
    /// reason is returned.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] for an index outside 0-8
    /// - [`MoveError::GameOver`] once the game is won or drawn
    /// - [`MoveError::SquareOccupied`] for a taken square
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&self, index: usize) -> Result<Self, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        let action = Move::new(self.turn, position);

        MoveContract::pre(self, &action)?;

        let mut next = self.clone();
        next.board.set(position, Square::Occupied(action.player()));
        next.history.push(action);
        next.outcome = evaluate(&next.board);
        if !next.outcome.is_terminal() {
            next.turn = self.turn.opponent();
        }

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        debug!(%action, outcome = %next.outcome, "Move applied");
        Ok(next)
    }

    /// Replays `indices` from a fresh game.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, MoveError> {
        indices
            .iter()
            .try_fold(Self::new(), |state, &index| state.apply_move(index))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Tic-tac-toe session: owns the current state for a front end.
///
/// Every mutation replaces the held state wholesale, so an observer sees
/// either the old or the new state, never a mix.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Selects the cell at `index` for the player to move.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason; the held state is unchanged.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, index: usize) -> Result<&GameState, MoveError> {
        self.state = self.state.apply_move(index)?;
        Ok(&self.state)
    }

    /// Discards the current game and starts a fresh one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.state.history.len(), "Resetting game");
        self.state = GameState::new();
    }
}
