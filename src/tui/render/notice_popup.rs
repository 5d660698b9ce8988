use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::centered_rect_fixed;
use crate::ops::task_ops::Severity;
use crate::tui::app::App;
use crate::util::unicode::display_width;

const DISMISS_HINT: &str = "Press Enter to dismiss";

/// Render the modal notice raised by a rejected action
pub fn render_notice_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(notice) = &app.notice else {
        return;
    };

    let bg = app.theme.background;
    let accent = app.theme.severity_color(notice.severity);
    let title = match notice.severity {
        Severity::Warning => " Warning ",
        Severity::Info => " Notice ",
    };

    let content_w = display_width(&notice.message).max(DISMISS_HINT.len()) + 4;
    let popup_w = (content_w as u16).min(area.width.saturating_sub(2));
    let popup_h = 6u16.min(area.height);
    let popup_area = centered_rect_fixed(popup_w, popup_h, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", notice.message),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", DISMISS_HINT),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title,
            Style::default().fg(accent).bg(bg).add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(accent).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(Clear, popup_area);
    frame.render_widget(
        Paragraph::new(lines).block(block).style(Style::default().bg(bg)),
        popup_area,
    );
}
