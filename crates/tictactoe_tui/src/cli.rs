//! Command-line interface for the tic-tac-toe binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe for two players at one keyboard
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Hot-seat tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply when it is missing)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Apply a sequence of moves and print the result
    Replay {
        /// Cell indices 0-8, comma separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Print the final game state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a board given as nine of X, O and . (rows may be split by /)
    Evaluate {
        /// Board text, e.g. "XXX/OO./..."
        #[arg(short, long)]
        board: String,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
}
