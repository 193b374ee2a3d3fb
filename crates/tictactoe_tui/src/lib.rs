//! Terminal front end for hot-seat tic-tac-toe.
//!
//! The [`App`] forwards key presses to a [`tictactoe::Game`] and [`ui::draw`]
//! renders whatever the game exposes. Neither keeps game state of its own.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod report;

pub mod ui;

pub use app::{App, Control};
pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};
pub use input::move_cursor;
pub use logging::{init_file_tracing, init_stderr_tracing};
pub use report::{evaluate_report, replay_report};
