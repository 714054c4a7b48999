use crate::tui::app::{AppState, Scene};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{draw_status, with_status_bar};

/// Scrollable member list or catalog.
pub(super) fn draw_view(f: &mut Frame, app: &AppState) {
    let (body, status) = with_status_bar(f.area());
    let title = match app.scene {
        Scene::Members => "Current Library Members",
        _ => "Current Library Publications",
    };
    let lines: Vec<Line> = app
        .view_lines()
        .into_iter()
        .map(|l| {
            if l.starts_with("==") {
                let style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
                Line::from(Span::styled(l, style))
            } else if l.starts_with('#') {
                Line::from(Span::styled(l, Style::default().add_modifier(Modifier::BOLD)))
            } else {
                Line::from(l)
            }
        })
        .collect();
    let scroll = u16::try_from(app.scroll).unwrap_or(u16::MAX);
    let para = Paragraph::new(lines)
        .block(Block::default().title(title).borders(Borders::ALL))
        .scroll((scroll, 0));
    f.render_widget(para, body);
    draw_status(f, status, app, "[↑/↓] Scroll  [Esc] Back");
}
