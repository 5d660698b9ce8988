pub mod button_bar;
pub mod context_menu;
pub mod entry_box;
pub mod header;
pub mod help_overlay;
pub mod notice_popup;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Rows of the entry box, borders included
const ENTRY_HEIGHT: u16 = 5;

/// Draw the whole screen and record hit areas for the mouse
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | entry | task list | buttons | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(ENTRY_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    entry_box::render_entry_box(frame, app, chunks[1]);
    task_list::render_task_list(frame, app, chunks[2]);
    button_bar::render_button_bar(frame, app, chunks[3]);
    status_row::render_status_row(frame, app, chunks[4]);

    // Overlays, topmost last
    app.hit.menu = None;
    if app.menu.is_some() {
        context_menu::render_context_menu(frame, app, area);
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
    if app.notice.is_some() {
        notice_popup::render_notice_popup(frame, app, area);
    }
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use super::*;

    #[test]
    fn centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect_fixed(40, 10, area), Rect::new(20, 7, 40, 10));
        assert_eq!(centered_rect_fixed(100, 30, area), area);
    }

    #[test]
    fn full_frame_shows_every_part() {
        let mut app = app_with_batches(&["Buy milk\nBuy eggs", "Call mom"]);
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(output.contains("Checklist"));
        assert!(output.contains("Save"));
        assert!(output.contains("Buy milk  1."));
        assert!(output.contains("Call mom  2."));
        assert!(output.contains("Delete selected"));
        assert!(output.contains("Done / undo"));
        assert!(output.contains("Clear all"));
    }

    #[test]
    fn full_frame_records_hit_areas() {
        let mut app = app_with_batches(&["a"]);
        render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(app.hit.entry.width > 0);
        assert!(app.hit.save_button.width > 0);
        assert!(app.hit.list.height > 0);
        assert_eq!(app.hit.buttons.len(), 3);
        assert!(app.hit.menu.is_none());
    }

    #[test]
    fn notice_draws_over_everything() {
        let mut app = app_with_batches(&[]);
        app.perform(crate::tui::app::Action::ClearAll);
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(output.contains("There are no tasks to clear."));
    }
}
