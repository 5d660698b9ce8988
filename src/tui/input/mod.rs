mod entry;
mod list;
mod menu;
mod mouse;

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

use super::app::{App, Focus};

use entry::*;
use list::*;
use menu::*;
use mouse::*;

/// Handle a key event for whatever currently has focus
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    let key = normalize_key(key);

    // Ctrl+Q quits from anywhere, even past a notice
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
        app.should_quit = true;
        return;
    }

    // Notice is modal
    if app.notice.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.notice = None;
        }
        return;
    }

    // Help overlay: any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    if app.menu.is_some() {
        handle_menu(app, key);
        return;
    }

    match app.focus {
        Focus::Entry => handle_entry(app, key),
        Focus::List => handle_list(app, key),
    }
}

/// Handle a mouse event against the regions drawn in the last frame
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    dispatch_mouse(app, mouse, now);
}

/// Handle a bracketed paste. Pasted newlines stay, so a pasted block
/// becomes one multi-line batch.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.notice.is_some() || app.menu.is_some() || app.show_help || text.is_empty() {
        return;
    }
    app.focus = Focus::Entry;
    app.entry.insert_str(text);
}

/// Submit keys: Ctrl+Enter needs enhanced key reporting, Alt+Enter and
/// Ctrl+S work everywhere.
pub(super) fn is_submit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT),
        KeyCode::Char('s') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Terminals with enhanced key reporting send `Char('c') + SHIFT`
/// where others send `Char('C')`. Fold the former into the latter.
pub(super) fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}
