//! Renders the UI into an in-memory terminal.

use crossterm::event::KeyCode;
use ratatui::{
    Terminal,
    backend::TestBackend,
    buffer::{Buffer, Cell},
    style::{Color, Modifier},
};
use std::io::Write;
use tictactoe_tui::{App, TuiConfig, ui};

fn render(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(60, 26)).expect("test terminal");
    terminal.draw(|f| ui::draw(f, app)).expect("draw");
    terminal.backend().buffer().clone()
}

fn text(buffer: &Buffer) -> String {
    buffer.content.iter().map(|cell| cell.symbol()).collect()
}

fn cells<'a>(buffer: &'a Buffer, symbol: &'a str) -> impl Iterator<Item = &'a Cell> {
    buffer.content.iter().filter(move |cell| cell.symbol() == symbol)
}

fn reversed(buffer: &Buffer) -> Vec<&Cell> {
    buffer
        .content
        .iter()
        .filter(|cell| cell.modifier.contains(Modifier::REVERSED))
        .collect()
}

fn press(app: &mut App, keys: &str) {
    for c in keys.chars() {
        app.handle_key(KeyCode::Char(c));
    }
}

#[test]
fn test_fresh_game_shows_turn_and_numbers() {
    let app = App::new(&TuiConfig::default());
    let screen = text(&render(&app));

    assert!(screen.contains("Tic-Tac-Toe"));
    assert!(screen.contains("Player X's Turn"));
    for n in 1..=9 {
        assert!(screen.contains(&n.to_string()), "missing cell {}", n);
    }
}

#[test]
fn test_win_is_announced() {
    let mut app = App::new(&TuiConfig::default());
    press(&mut app, "14253");
    let screen = text(&render(&app));

    assert!(screen.contains("Player X Wins!"));
}

#[test]
fn test_rejection_hint_is_shown() {
    let mut app = App::new(&TuiConfig::default());
    press(&mut app, "55");
    let screen = text(&render(&app));

    assert!(screen.contains("Player O's Turn"));
    assert!(screen.contains("Center is already occupied"));
}

#[test]
fn test_draw_is_announced() {
    let mut app = App::new(&TuiConfig::default());
    press(&mut app, "123546879");
    let screen = text(&render(&app));

    assert!(screen.contains("It's a Draw!"));
}

#[test]
fn test_winning_line_has_green_background() {
    let mut app = App::new(&TuiConfig::default());
    press(&mut app, "14253");
    let buffer = render(&app);

    let green_x = cells(&buffer, "X").filter(|c| c.bg == Color::Green).count();
    let green_o = cells(&buffer, "O").filter(|c| c.bg == Color::Green).count();
    assert_eq!(green_x, 3);
    assert_eq!(green_o, 0);
}

#[test]
fn test_cursor_is_reversed_on_fresh_game() {
    let app = App::new(&TuiConfig::default());
    let buffer = render(&app);

    let cursor = reversed(&buffer);
    assert!(cursor.iter().any(|c| c.symbol() == "5"));
    assert!(cursor.iter().all(|c| c.symbol() != "1"));
}

#[test]
fn test_cursor_stays_visible_after_move() {
    let mut app = App::new(&TuiConfig::default());
    app.handle_key(KeyCode::Enter);
    let buffer = render(&app);

    let cursor = reversed(&buffer);
    assert!(!cursor.is_empty());
    assert!(cursor.iter().any(|c| c.symbol() == "X"));
}

#[test]
fn test_cursor_stays_visible_after_win() {
    let mut app = App::new(&TuiConfig::default());
    press(&mut app, "14253");
    let buffer = render(&app);

    assert!(reversed(&buffer).iter().any(|c| c.symbol() == "X"));
}

#[test]
fn test_empty_cells_dimmed_once_game_over() {
    let mut app = App::new(&TuiConfig::default());
    let before = render(&app);
    for n in ["6", "7", "8"] {
        assert!(cells(&before, n).all(|c| c.fg == Color::Gray), "cell {} not live", n);
    }

    press(&mut app, "14253");
    let after = render(&app);
    for n in ["6", "7", "8"] {
        assert_eq!(cells(&after, n).count(), 1);
        assert!(cells(&after, n).all(|c| c.fg == Color::DarkGray), "cell {} not dimmed", n);
    }
}

#[test]
fn test_hidden_cell_numbers_leave_cells_blank() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "show_cell_numbers = false").expect("write");
    let config = TuiConfig::from_file(file.path()).expect("config");

    let mut app = App::new(&config);
    let screen = text(&render(&app));
    // The help line mentions 1 and 9, so only the inner numbers are checked.
    for n in 2..=8 {
        assert!(!screen.contains(&n.to_string()), "cell {} shows a number", n);
    }

    press(&mut app, "5");
    let buffer = render(&app);
    assert_eq!(cells(&buffer, "X").filter(|c| c.fg == Color::Blue).count(), 1);
}
