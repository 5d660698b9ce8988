use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::centered_rect_fixed;
use crate::tui::app::App;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.focus_border)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Entry", header_style)));
    add_binding(&mut lines, " Ctrl+Enter", "Save tasks", key_style, desc_style);
    add_binding(&mut lines, " Alt+Enter/^S", "Save tasks", key_style, desc_style);
    add_binding(&mut lines, " Enter", "New line", key_style, desc_style);
    add_binding(&mut lines, " Tab/Esc", "Go to list", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" List", header_style)));
    add_binding(
        &mut lines,
        " \u{2191}\u{2193}/jk",
        "Move cursor",
        key_style,
        desc_style,
    );
    add_binding(&mut lines, " Shift+\u{2191}\u{2193}", "Extend selection", key_style, desc_style);
    add_binding(&mut lines, " Space", "Select / unselect row", key_style, desc_style);
    add_binding(&mut lines, " a", "Select all", key_style, desc_style);
    add_binding(&mut lines, " Enter/x", "Done / undo", key_style, desc_style);
    add_binding(&mut lines, " d/Del", "Delete selected", key_style, desc_style);
    add_binding(&mut lines, " C", "Clear all", key_style, desc_style);
    add_binding(&mut lines, " m", "Context menu", key_style, desc_style);
    add_binding(&mut lines, " Tab/i", "Go to entry", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Global", header_style)));
    add_binding(&mut lines, " ?", "Toggle this help", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit (from list)", key_style, desc_style);
    add_binding(&mut lines, " Ctrl+Q", "Quit", key_style, desc_style);

    let overlay_area = centered_rect_fixed(44, lines.len() as u16 + 2, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Key Bindings ")
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 16;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}
