//! Read-only projection of a game for front ends.

use crate::{GameState, Line, Outcome, Player, Position, Square};
use serde::{Deserialize, Serialize};

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Waiting on this player.
    Turn(Player),
    /// This player won.
    Winner(Player),
    /// Nobody won.
    Draw,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Turn(player) => write!(f, "Player {}'s Turn", player),
            Status::Winner(player) => write!(f, "Player {} Wins!", player),
            Status::Draw => write!(f, "It's a Draw!"),
        }
    }
}

/// Everything a renderer needs, and nothing it can mutate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Marks in row-major order.
    pub cells: [Option<Player>; 9],
    /// Status line.
    pub status: Status,
    /// Line to highlight, if the game was won.
    pub winning_line: Option<Line>,
    game_over: bool,
}

impl BoardView {
    /// Mark at `pos`.
    pub fn cell(&self, pos: Position) -> Option<Player> {
        self.cells[pos.to_index()]
    }

    /// Cell refuses input: occupied, or the game is over.
    pub fn is_disabled(&self, pos: Position) -> bool {
        self.cell(pos).is_some() || self.game_over
    }

    /// Cell is part of the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(pos))
    }
}

impl From<&GameState> for BoardView {
    fn from(state: &GameState) -> Self {
        let status = match state.outcome() {
            Outcome::InProgress => Status::Turn(state.turn()),
            Outcome::Won { mark, .. } => Status::Winner(*mark),
            Outcome::Drawn => Status::Draw,
        };

        let squares = *state.board().squares();

        Self {
            cells: squares.map(Square::player),
            status,
            winning_line: state.winning_line(),
            game_over: state.is_over(),
        }
    }
}

impl GameState {
    /// Projection for rendering.
    pub fn view(&self) -> BoardView {
        BoardView::from(self)
    }
}
