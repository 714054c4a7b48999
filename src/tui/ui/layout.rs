use ratatui::layout::Constraint;
use ratatui::prelude::{Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::tui::app::AppState;

pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(ratatui::prelude::Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let area = Layout::default()
        .direction(ratatui::prelude::Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);
    area[1]
}

/// Split `area` into a body and a bordered three-row status bar.
pub(super) fn with_status_bar(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(ratatui::prelude::Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);
    (chunks[0], chunks[1])
}

pub(super) fn draw_status(f: &mut Frame, area: Rect, app: &AppState, keys: &str) {
    let block = Block::default().title("Status").borders(Borders::ALL);
    let mut spans = Vec::new();
    if let Some(status) = app.status() {
        let color = if status.error { Color::Red } else { Color::Green };
        spans.push(Span::styled(status.text.clone(), Style::default().fg(color)));
        spans.push(Span::raw("   "));
    }
    spans.push(Span::styled(keys.to_string(), Style::default().add_modifier(Modifier::DIM)));
    let para = Paragraph::new(Line::from(spans)).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, area);
}
