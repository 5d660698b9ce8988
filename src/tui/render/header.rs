use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::truncate_to_width;

/// Render the title bar
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let style = Style::default()
        .fg(app.theme.header_fg)
        .bg(app.theme.header_bg)
        .add_modifier(Modifier::BOLD);
    let title = truncate_to_width(&app.title, area.width as usize);
    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .style(style);
    frame.render_widget(header, area);
}
