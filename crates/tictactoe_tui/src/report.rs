//! Text and JSON output for the headless subcommands.

use anyhow::{Context, Result};
use tictactoe::{Board, GameState, evaluate};
use tracing::{info, instrument};

/// Replays `moves` and renders the final board and status.
///
/// # Errors
///
/// Fails on the first rejected move, naming its position in the sequence.
#[instrument]
pub fn replay_report(moves: &[usize], json: bool) -> Result<String> {
    let mut state = GameState::new();
    for (n, &index) in moves.iter().enumerate() {
        state = state
            .apply_move(index)
            .with_context(|| format!("move #{} (cell {}) rejected", n + 1, index))?;
    }
    info!(moves = moves.len(), outcome = %state.outcome(), "Replay finished");

    if json {
        Ok(serde_json::to_string_pretty(&state)?)
    } else {
        Ok(format!("{}\n\n{}", state.board().display(), state.view().status))
    }
}

/// Parses `board` and renders its evaluated outcome.
///
/// # Errors
///
/// Fails when the board text does not parse.
#[instrument]
pub fn evaluate_report(board: &str, json: bool) -> Result<String> {
    let board: Board = board.parse().context("invalid board")?;
    let outcome = evaluate(&board);
    info!(%board, %outcome, "Board evaluated");

    if json {
        Ok(serde_json::to_string_pretty(&outcome)?)
    } else {
        Ok(format!("{}\n\n{}", board.display(), outcome))
    }
}
