use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

pub(super) fn handle_menu(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_menu_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_menu_cursor(1),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_menu(),
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Menu => app.menu = None,
        _ => {}
    }
}
