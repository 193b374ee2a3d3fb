//! Tic-tac-toe - terminal front end
//!
//! Hot-seat play plus headless replay and evaluation.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tictactoe_tui::{
    App, Cli, Command, Control, TuiConfig, evaluate_report, init_file_tracing,
    init_stderr_tracing, replay_report, ui,
};
use tracing::{error, info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_file_tracing(&config)?;
            run_tui(&config)
        }
        Command::Replay { moves, json } => {
            init_stderr_tracing(&config);
            println!("{}", replay_report(&moves, json)?);
            Ok(())
        }
        Command::Evaluate { board, json } => {
            init_stderr_tracing(&config);
            println!("{}", evaluate_report(&board, json)?);
            Ok(())
        }
    }
}

/// Run the terminal UI until the player quits.
#[instrument(skip_all)]
fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(config));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Exiting");
    res
}

/// One key press, one state change, one redraw.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Control::Quit
        {
            return Ok(());
        }
    }
}
