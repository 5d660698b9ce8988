use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{Action, App, Focus};

use super::*;

pub(super) fn handle_list(app: &mut App, key: KeyEvent) {
    if is_submit_key(&key) {
        app.perform(Action::Submit);
        return;
    }

    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    match (key.modifiers, key.code) {
        // Cursor and selection
        (_, KeyCode::Up) => app.move_cursor(-1, shift),
        (_, KeyCode::Down) => app.move_cursor(1, shift),
        (_, KeyCode::Char('k')) => app.move_cursor(-1, false),
        (_, KeyCode::Char('j')) => app.move_cursor(1, false),
        (_, KeyCode::PageUp) => app.move_cursor(-page(app), shift),
        (_, KeyCode::PageDown) => app.move_cursor(page(app), shift),
        (_, KeyCode::Home) => app.move_cursor(isize::MIN, shift),
        (_, KeyCode::End) => app.move_cursor(isize::MAX, shift),
        (_, KeyCode::Char(' ')) => app.toggle_row_selected(app.list.cursor),
        (_, KeyCode::Char('a')) => app.select_all(),
        (_, KeyCode::Esc) => app.clear_selection(),

        // Actions
        (_, KeyCode::Enter) | (_, KeyCode::Char('x')) => app.perform(Action::ToggleSelected),
        (_, KeyCode::Char('d')) | (_, KeyCode::Delete) => app.perform(Action::DeleteSelected),
        (_, KeyCode::Char('C')) => app.perform(Action::ClearAll),
        (_, KeyCode::Char('m')) | (_, KeyCode::Menu) => open_menu_at_cursor(app),
        (KeyModifiers::SHIFT, KeyCode::F(10)) => open_menu_at_cursor(app),

        // Focus, help, quit
        (_, KeyCode::Tab) | (_, KeyCode::BackTab) | (_, KeyCode::Char('i')) => {
            app.focus = Focus::Entry
        }
        (_, KeyCode::Char('?')) => app.show_help = true,
        (_, KeyCode::Char('q')) => app.should_quit = true,
        _ => {}
    }
}

/// Rows per page: the visible list height, at least one
fn page(app: &App) -> isize {
    app.hit.list.height.max(1) as isize
}

fn open_menu_at_cursor(app: &mut App) {
    let anchor = app.menu_anchor_for_cursor();
    app.open_menu(anchor);
}
