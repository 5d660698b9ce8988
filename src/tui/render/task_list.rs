use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::config::Align;
use crate::ops::display::{DisplayRow, display_rows};
use crate::tui::app::{App, Focus};
use crate::util::unicode::{display_width, truncate_start_to_width, truncate_to_width};

const EMPTY_MESSAGE: &str = "No tasks yet";

/// Render the numbered task list
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.focus == Focus::List;
    let border_color = if focused {
        app.theme.focus_border
    } else {
        app.theme.border
    };
    let title = match app.store.len() {
        1 => " 1 task ".to_string(),
        n => format!(" {} tasks ", n),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.hit.list = inner;

    let width = inner.width as usize;
    let height = inner.height as usize;

    if app.store.is_empty() {
        let line = Line::from(Span::styled(
            truncate_to_width(EMPTY_MESSAGE, width),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), inner);
        return;
    }

    app.scroll_list_to_cursor(height);
    let app: &App = app;

    let rows = display_rows(&app.store);
    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(app.list.scroll)
        .take(height)
        .map(|(i, row)| {
            let style = row_style(app, i, row, focused);
            Line::from(Span::styled(fit_row(row, app.align, width), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
}

/// Numbered rows stand out from continuation rows; done rows stay muted.
/// Selection and the focused cursor only change the background.
fn row_style(app: &App, i: usize, row: &DisplayRow, focused: bool) -> Style {
    let fg = if row.number.is_some() && !row.done {
        app.theme.text_bright
    } else {
        app.theme.task_color(row.done)
    };
    let mut style = Style::default().fg(fg).bg(app.theme.background);
    if app.list.selected.contains(&i) {
        style = style.bg(app.theme.selection_bg);
    }
    if focused && i == app.list.cursor {
        style = style
            .bg(app.theme.cursor_bg)
            .add_modifier(Modifier::BOLD);
    }
    style
}

/// Pad or cut a label to exactly `width` cells. Right-aligned rows lose
/// text from the front so the number stays visible.
fn fit_row(row: &DisplayRow, align: Align, width: usize) -> String {
    match align {
        Align::Right => {
            let label = truncate_start_to_width(&row.label, width);
            let pad = width.saturating_sub(display_width(&label));
            format!("{}{}", " ".repeat(pad), label)
        }
        Align::Left => {
            let label = truncate_to_width(&row.label, width);
            let pad = width.saturating_sub(display_width(&label));
            format!("{}{}", label, " ".repeat(pad))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::Config;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    fn row(label: &str) -> DisplayRow {
        DisplayRow {
            label: label.into(),
            done: false,
            number: None,
        }
    }

    #[test]
    fn group_heads_use_bright_text() {
        let mut app = app_with_batches(&["Buy milk\nBuy eggs"]);
        app.store.toggle_selected([0]).unwrap();
        app.store.add_batch("Call mom").unwrap();
        let rows = display_rows(&app.store);
        let theme = app.theme.clone();

        let fg = |i: usize| row_style(&app, i, &rows[i], false).fg;
        // Done head stays muted, open head is bright, continuation is plain
        assert_eq!(fg(0), Some(theme.dim));
        assert_eq!(fg(1), Some(theme.dim));
        assert_eq!(fg(2), Some(theme.text_bright));

        app.store.add_batch("a\nb").unwrap();
        let rows = display_rows(&app.store);
        assert_eq!(row_style(&app, 4, &rows[4], false).fg, Some(theme.text));
    }

    #[test]
    fn cursor_row_only_when_focused() {
        let mut app = app_with_batches(&["a", "b"]);
        app.select_only(1);
        let rows = display_rows(&app.store);
        let theme = app.theme.clone();
        assert_eq!(row_style(&app, 1, &rows[1], true).bg, Some(theme.cursor_bg));
        assert_eq!(row_style(&app, 1, &rows[1], false).bg, Some(theme.selection_bg));
        assert_eq!(row_style(&app, 0, &rows[0], true).bg, Some(theme.background));
    }

    #[test]
    fn fit_row_pads_to_width() {
        assert_eq!(fit_row(&row("a  1. "), Align::Right, 10), "    a  1. ");
        assert_eq!(fit_row(&row("a  1. "), Align::Left, 10), "a  1.     ");
    }

    #[test]
    fn fit_row_keeps_number_when_cut() {
        let fitted = fit_row(&row("a long task  12. "), Align::Right, 8);
        assert!(fitted.ends_with("12. "));
        assert_eq!(display_width(&fitted), 8);
    }

    #[test]
    fn rows_render_right_aligned_by_default() {
        let mut app = app_with_batches(&["Buy milk\nBuy eggs", "Call mom"]);
        let output = render_to_string(30, 5, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].contains("3 tasks"));
        assert_eq!(lines[1], "│               Buy milk  1. │");
        assert_eq!(lines[2], "│               Buy eggs     │");
        assert_eq!(lines[3], "│               Call mom  2. │");
    }

    #[test]
    fn rows_render_left_aligned_when_configured() {
        let mut config = Config::default();
        config.ui.align = Align::Left;
        let mut app = app_with_config(&config, &["Buy milk"]);
        let output = render_to_string(30, 3, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert!(output.lines().nth(1).unwrap().starts_with("│Buy milk  1."));
    }

    #[test]
    fn done_rows_carry_check_mark() {
        let mut app = app_with_batches(&["Buy milk"]);
        app.store.toggle_selected([0]).unwrap();
        let output = render_to_string(30, 3, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert!(output.contains("Buy milk ✓1."));
    }

    #[test]
    fn empty_list_shows_message() {
        let mut app = app_with_batches(&[]);
        let output = render_to_string(30, 4, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert!(output.contains(EMPTY_MESSAGE));
        assert_eq!(app.hit.list, Rect::new(1, 1, 28, 2));
    }

    #[test]
    fn list_scrolls_to_cursor() {
        let mut app = app_with_batches(&["a", "b", "c", "d", "e"]);
        app.select_only(4);
        let output = render_to_string(20, 4, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(app.list.scroll, 3);
        assert!(output.contains("e  5."));
        assert!(!output.contains("a  1."));
    }
}
