//! Application state and key handling.

use crate::config::TuiConfig;
use crate::input::move_cursor;
use crossterm::event::KeyCode;
use tictactoe::{Game, Position};
use tracing::{debug, info, instrument};

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
///
/// Holds the game session plus purely visual state (cursor, last hint).
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    cursor: Position,
    hint: Option<String>,
    show_cell_numbers: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            hint: None,
            show_cell_numbers: *config.show_cell_numbers(),
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Why the last selection was refused, if it was.
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Whether empty cells show their number.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('r') | KeyCode::Char('n') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor.to_index()),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    self.select(digit as usize - 1);
                }
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
        Control::Continue
    }

    /// Selects the cell at `index`; a refusal only sets the hint.
    #[instrument(skip(self))]
    pub fn select(&mut self, index: usize) {
        match self.game.select_cell(index) {
            Ok(state) => {
                debug!(outcome = %state.outcome(), "Move accepted");
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.hint = None;
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.hint = Some(e.to_string());
            }
        }
    }

    /// Restarts the game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Starting a new game");
        self.game.reset();
        self.hint = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe::{Outcome, Player};

    fn app() -> App {
        App::new(&TuiConfig::default())
    }

    fn press(app: &mut App, keys: &str) {
        for c in keys.chars() {
            assert_eq!(app.handle_key(KeyCode::Char(c)), Control::Continue);
        }
    }

    #[test]
    fn test_digits_select_cells() {
        let mut app = app();
        press(&mut app, "14253");
        assert_eq!(app.game().state().outcome().winner(), Some(Player::X));
    }

    #[test]
    fn test_cursor_select() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.cursor(), Position::TopLeft);

        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.game().state().board().get(Position::TopLeft).player(),
            Some(Player::X)
        );
    }

    #[test]
    fn test_rejection_sets_hint_only() {
        let mut app = app();
        press(&mut app, "5");
        let before = app.game().state().clone();

        press(&mut app, "5");
        assert_eq!(app.game().state(), &before);
        assert_eq!(app.hint(), Some("Center is already occupied"));

        press(&mut app, "1");
        assert_eq!(app.hint(), None);
    }

    #[test]
    fn test_moves_after_win_rejected() {
        let mut app = app();
        press(&mut app, "14253");
        let before = app.game().state().clone();

        press(&mut app, "9");
        assert_eq!(app.game().state(), &before);
        assert_eq!(app.hint(), Some("Game is already over"));
    }

    #[test]
    fn test_restart_clears_board() {
        let mut app = app();
        press(&mut app, "14253");
        press(&mut app, "r");
        assert_eq!(app.game().state().outcome(), &Outcome::InProgress);
        assert_eq!(app.game().state().board().occupied(), 0);
        assert_eq!(app.game().state().turn(), Player::X);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Control::Quit);
    }
}
