use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};
use crate::util::unicode::display_width;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut counts = format!(
        " {} in {}",
        plural(app.store.len(), "task"),
        plural(app.store.group_count(), "group")
    );
    if !app.list.selected.is_empty() {
        counts.push_str(&format!(", {} selected", app.list.selected.len()));
    }
    let hint = match app.focus {
        Focus::Entry => "Ctrl+S save  Tab list  ? help ",
        Focus::List => "x done  d delete  m menu  ? help ",
    };

    let mut spans = vec![Span::styled(
        counts.clone(),
        Style::default().fg(app.theme.text).bg(bg),
    )];
    let content_width = display_width(&counts);
    let hint_width = display_width(hint);
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn shows_counts_and_hint() {
        let mut app = app_with_batches(&["a\nb", "c"]);
        app.focus = Focus::List;
        app.select_only(2);
        let output = render_to_string(80, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.starts_with(" 3 tasks in 2 groups, 1 selected"));
        assert!(output.ends_with("m menu  ? help"));
    }

    #[test]
    fn hint_dropped_when_too_narrow() {
        let app = app_with_batches(&["a"]);
        let output = render_to_string(30, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(output, " 1 task in 1 group");
    }
}
