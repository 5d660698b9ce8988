use std::time::Instant;

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::tui::app::{Action, App, DOUBLE_CLICK, Focus, MENU_ACTIONS};

pub(super) fn dispatch_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    let pos = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => left_click(app, pos, mouse.modifiers, now),
        MouseEventKind::Down(MouseButton::Right) => right_click(app, pos),
        MouseEventKind::ScrollUp => scroll(app, pos, -1),
        MouseEventKind::ScrollDown => scroll(app, pos, 1),
        _ => {}
    }
}

/// Row of the task under `pos`, if any
fn row_at(app: &App, pos: Position) -> Option<usize> {
    if !app.hit.list.contains(pos) {
        return None;
    }
    let row = app.list.scroll + (pos.y - app.hit.list.y) as usize;
    (row < app.store.len()).then_some(row)
}

fn left_click(app: &mut App, pos: Position, modifiers: KeyModifiers, now: Instant) {
    if app.notice.is_some() {
        app.notice = None;
        return;
    }
    if app.show_help {
        app.show_help = false;
        return;
    }
    if app.menu.is_some() {
        // Entries sit inside a one-cell border
        let clicked = app
            .hit
            .menu
            .filter(|area| area.contains(pos))
            .and_then(|area| (pos.y as usize).checked_sub(area.y as usize + 1))
            .filter(|i| *i < MENU_ACTIONS.len());
        match clicked {
            Some(i) => {
                if let Some(menu) = &mut app.menu {
                    menu.cursor = i;
                }
                app.activate_menu();
            }
            None => app.menu = None,
        }
        return;
    }

    if app.hit.save_button.contains(pos) {
        app.perform(Action::Submit);
        return;
    }
    if let Some(action) = app
        .hit
        .buttons
        .iter()
        .find(|(_, area)| area.contains(pos))
        .map(|(action, _)| *action)
    {
        app.perform(action);
        return;
    }
    if app.hit.entry.contains(pos) {
        app.focus = Focus::Entry;
        let line = app.entry.scroll + (pos.y - app.hit.entry.y) as usize;
        let col = app.entry.hscroll + (pos.x - app.hit.entry.x) as usize;
        app.entry.move_to(line, col);
        return;
    }
    if !app.hit.list.contains(pos) {
        return;
    }

    app.focus = Focus::List;
    let Some(row) = row_at(app, pos) else {
        app.clear_selection();
        app.last_click = None;
        return;
    };

    if modifiers.contains(KeyModifiers::CONTROL) {
        app.toggle_row_selected(row);
        app.last_click = None;
    } else if modifiers.contains(KeyModifiers::SHIFT) {
        app.extend_selection_to(row);
        app.last_click = None;
    } else {
        let is_double = app
            .last_click
            .is_some_and(|(last_row, at)| last_row == row && now.duration_since(at) <= DOUBLE_CLICK);
        app.select_only(row);
        if is_double {
            app.last_click = None;
            app.perform(Action::ToggleSelected);
        } else {
            app.last_click = Some((row, now));
        }
    }
}

fn right_click(app: &mut App, pos: Position) {
    if app.notice.is_some() || app.show_help {
        return;
    }
    if !app.hit.list.contains(pos) {
        app.menu = None;
        return;
    }
    app.focus = Focus::List;
    if let Some(row) = row_at(app, pos)
        && !app.list.selected.contains(&row)
    {
        app.select_only(row);
    }
    app.open_menu(pos);
}

/// Wheel over the list moves the cursor without touching the selection
fn scroll(app: &mut App, pos: Position, delta: isize) {
    if app.notice.is_some() || app.menu.is_some() || !app.hit.list.contains(pos) {
        return;
    }
    let len = app.store.len();
    if len > 0 {
        app.list.cursor = app.list.cursor.saturating_add_signed(delta).min(len - 1);
    }
}
