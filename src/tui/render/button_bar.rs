use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{Action, App, LIST_BUTTONS};
use crate::util::unicode::display_width;

const GAP: u16 = 2;

/// Render the row of action buttons under the list
pub fn render_button_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let labels: Vec<(Action, String)> = LIST_BUTTONS
        .iter()
        .map(|action| (*action, format!(" {} ", action.button_label())))
        .collect();

    let total: u16 = labels
        .iter()
        .map(|(_, label)| display_width(label) as u16)
        .sum::<u16>()
        + GAP * (labels.len() as u16 - 1);
    let right = area.x + area.width;
    let mut x = area.x + area.width.saturating_sub(total) / 2;

    app.hit.buttons.clear();
    let mut spans = vec![Span::styled(
        " ".repeat((x - area.x) as usize),
        Style::default().bg(bg),
    )];
    for (i, (action, label)) in labels.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ".repeat(GAP as usize), Style::default().bg(bg)));
            x += GAP;
        }
        let width = display_width(&label) as u16;
        let start = x.min(right);
        app.hit.buttons.push((
            action,
            Rect::new(start, area.y, width.min(right - start), area.height.min(1)),
        ));
        x += width;

        let style = Style::default()
            .fg(app.theme.button_fg)
            .bg(button_color(app, action))
            .add_modifier(Modifier::BOLD);
        spans.push(Span::styled(label, style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn button_color(app: &App, action: Action) -> Color {
    match action {
        Action::Submit => app.theme.save,
        Action::DeleteSelected => app.theme.delete,
        Action::ToggleSelected => app.theme.toggle,
        Action::ClearAll => app.theme.clear,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buttons_are_centered() {
        let mut app = app_with_batches(&[]);
        let output = render_to_string(60, 1, |frame, area| {
            render_button_bar(frame, &mut app, area);
        });
        // 17 + 2 + 13 + 2 + 11 = 45 cells, 7 cells of margin on the left
        assert_eq!(
            output,
            "        Delete selected    Done / undo    Clear all"
        );
    }

    #[test]
    fn records_one_hit_area_per_button() {
        let mut app = app_with_batches(&[]);
        render_to_string(60, 1, |frame, area| {
            render_button_bar(frame, &mut app, area);
        });
        assert_eq!(
            app.hit.buttons,
            vec![
                (Action::DeleteSelected, Rect::new(7, 0, 17, 1)),
                (Action::ToggleSelected, Rect::new(26, 0, 13, 1)),
                (Action::ClearAll, Rect::new(41, 0, 11, 1)),
            ]
        );
    }

    #[test]
    fn narrow_bar_clips_hit_areas() {
        let mut app = app_with_batches(&[]);
        render_to_string(30, 1, |frame, area| {
            render_button_bar(frame, &mut app, area);
        });
        assert_eq!(app.hit.buttons.len(), 3);
        assert!(app.hit.buttons.iter().all(|(_, r)| r.x + r.width <= 30));
    }
}
