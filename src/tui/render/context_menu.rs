use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, MENU_ACTIONS};
use crate::util::unicode::display_width;

/// Render the context menu next to its anchor, kept inside `area`
pub fn render_context_menu(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(menu) = app.menu.as_ref() else {
        return;
    };

    let inner_w = MENU_ACTIONS
        .iter()
        .map(|action| display_width(action.menu_label()))
        .max()
        .unwrap_or(0)
        + 2;
    let width = (inner_w as u16 + 2).min(area.width);
    let height = (MENU_ACTIONS.len() as u16 + 2).min(area.height);

    // Open below-right of the anchor, shifted back when it would overflow
    let right = area.x + area.width;
    let bottom = area.y + area.height;
    let x = menu.anchor.x.min(right - width).max(area.x);
    let y = menu.anchor.y.min(bottom - height).max(area.y);
    let menu_area = Rect::new(x, y, width, height);

    let bg = app.theme.background;
    let normal = Style::default().fg(app.theme.text).bg(bg);
    let highlighted = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.cursor_bg)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = MENU_ACTIONS
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let label = action.menu_label();
            let text = format!(" {}{}", label, " ".repeat(inner_w - 1 - display_width(label)));
            let style = if i == menu.cursor { highlighted } else { normal };
            Line::from(Span::styled(text, style))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.focus_border).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(Clear, menu_area);
    frame.render_widget(Paragraph::new(lines).block(block), menu_area);
    app.hit.menu = Some(menu_area);
}
