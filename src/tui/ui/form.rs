use crate::tui::app::{AppState, Form};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, draw_status, inner, with_status_bar};

pub(super) fn draw_form(f: &mut Frame, app: &AppState, form: &Form) {
    let (body, status) = with_status_bar(f.area());
    let area = centered_rect(70, 70, body);
    let block = Block::default().title(form.title.as_str()).borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::with_capacity(form.fields.len() + 2);
    for (i, field) in form.fields.iter().enumerate() {
        let focused = i == form.focus;
        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let mut value = field.display_value();
        if focused && !value.starts_with('<') {
            value.push('_');
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{:<20}", field.label), label_style),
            Span::raw(value),
        ]));
    }
    if let Some(err) = &form.error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner(area));
    draw_status(
        f,
        status,
        app,
        "[Enter] Save  [Tab/↑/↓] Field  [←/→] Option  [Esc] Cancel",
    );
}
