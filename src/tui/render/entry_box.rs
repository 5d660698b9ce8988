use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{Action, App, Focus};
use crate::util::unicode::{display_col_to_byte_offset, display_width, truncate_to_width};

const PLACEHOLDER: &str = "Type tasks, one per line";
const SAVE_COLUMN_WIDTH: u16 = 10;

/// Render the multi-line entry box with the Save button beside it
pub fn render_entry_box(frame: &mut Frame, app: &mut App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(SAVE_COLUMN_WIDTH)])
        .split(area);

    let bg = app.theme.background;
    let focused = app.focus == Focus::Entry;
    let border_color = if focused {
        app.theme.focus_border
    } else {
        app.theme.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" New tasks ")
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(columns[0]);
    frame.render_widget(block, columns[0]);
    app.hit.entry = inner;

    let height = inner.height as usize;
    let width = inner.width as usize;
    app.entry.scroll_to_cursor(height);
    app.entry.scroll_to_cursor_col(width);

    let lines: Vec<Line> = if app.entry.buffer.is_empty() {
        vec![Line::from(Span::styled(
            truncate_to_width(PLACEHOLDER, width),
            Style::default().fg(app.theme.dim).bg(bg),
        ))]
    } else {
        let text_style = Style::default().fg(app.theme.text).bg(bg);
        let hscroll = app.entry.hscroll;
        app.entry
            .buffer
            .split('\n')
            .skip(app.entry.scroll)
            .take(height)
            .map(|line| {
                let visible = &line[display_col_to_byte_offset(line, hscroll)..];
                Line::from(Span::styled(truncate_to_width(visible, width), text_style))
            })
            .collect()
    };
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);

    let modal_open = app.menu.is_some() || app.notice.is_some() || app.show_help;
    if focused && !modal_open && inner.width > 0 && inner.height > 0 {
        let (line, col) = app.entry.cursor_line_col();
        let row = (line - app.entry.scroll) as u16;
        let col = ((col - app.entry.hscroll) as u16).min(inner.width - 1);
        frame.set_cursor_position(Position::new(inner.x + col, inner.y + row));
    }

    render_save_button(frame, app, columns[1]);
}

fn render_save_button(frame: &mut Frame, app: &mut App, area: Rect) {
    let label = format!(" {} ", Action::Submit.button_label());
    let width = (display_width(&label) as u16).min(area.width);
    let button = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + area.height / 2,
        width,
        area.height.min(1),
    );
    let style = Style::default()
        .fg(app.theme.button_fg)
        .bg(app.theme.save)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(Paragraph::new(label).style(style), button);
    app.hit.save_button = button;
}
