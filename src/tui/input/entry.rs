use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{Action, App, Focus};

use super::*;

pub(super) fn handle_entry(app: &mut App, key: KeyEvent) {
    if is_submit_key(&key) {
        app.perform(Action::Submit);
        return;
    }

    let entry = &mut app.entry;
    match (key.modifiers, key.code) {
        (_, KeyCode::Tab) | (_, KeyCode::Esc) => app.focus = Focus::List,
        (_, KeyCode::Enter) => entry.insert_char('\n'),
        (_, KeyCode::Backspace) => entry.backspace(),
        (_, KeyCode::Delete) => entry.delete(),
        (_, KeyCode::Left) => entry.move_left(),
        (_, KeyCode::Right) => entry.move_right(),
        (_, KeyCode::Up) => entry.move_up(),
        (_, KeyCode::Down) => entry.move_down(),
        (_, KeyCode::Home) => entry.move_home(),
        (_, KeyCode::End) => entry.move_end(),
        (m, KeyCode::Char(c)) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            entry.insert_char(c)
        }
        _ => {}
    }
}
