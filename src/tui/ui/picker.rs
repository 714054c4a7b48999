use crate::selection::Outcome;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, draw_status, inner, with_status_bar};

pub(super) fn draw_picker(f: &mut Frame, app: &AppState) {
    let (body, status) = with_status_bar(f.area());
    if let Some(report) = app.selection().and_then(|s| s.report()) {
        draw_report(f, body, app, report);
        draw_status(f, status, app, "[Enter/Esc] Main menu");
        return;
    }

    let title = app.selection().map_or("Edit", |s| s.flow().label());
    let block = Block::default().title(title).borders(Borders::ALL);
    f.render_widget(block, body);
    let area = inner(body);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);
    let header = Paragraph::new(Line::from(Span::styled(
        app.picker_title(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    f.render_widget(header, rows[0]);

    let items = app.picker_items();
    if items.is_empty() {
        f.render_widget(Paragraph::new("(nothing to select)"), rows[1]);
    } else {
        let list_items: Vec<ListItem> = items
            .into_iter()
            .enumerate()
            .map(|(i, s)| ListItem::new(format!("{}. {s}", i + 1)))
            .collect();
        let list = List::new(list_items)
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        state.select(Some(app.cursor));
        f.render_stateful_widget(list, rows[1], &mut state);
    }
    draw_status(f, status, app, "[Enter] Select  [1-9] Jump  [↑/↓] Move  [Esc] Cancel");
}

fn draw_report(f: &mut Frame, body: Rect, app: &AppState, report: &crate::selection::Report) {
    let area = centered_rect(60, 40, body);
    let color = if report.succeeded() { Color::Green } else { Color::Red };
    let block = Block::default()
        .title(report.flow.label())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let mut lines = vec![Line::from(Span::styled(
        report.message(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    if let Some(p) = app.library.publication(report.kind, report.publication) {
        lines.push(Line::from(format!("{}: {}", report.kind, p.title())));
    }
    let borrower_name = |id| {
        let member = app.library.members().get(id);
        member.map_or_else(|| format!("member {id}"), |m| m.name().to_string())
    };
    match &report.outcome {
        Outcome::CheckedOut(loan) => {
            lines.push(Line::from(format!(
                "Copy {} lent to {}",
                loan.copy + 1,
                borrower_name(loan.member)
            )));
        }
        Outcome::CheckedIn { copy, member } => {
            lines.push(Line::from(format!(
                "Copy {} returned (was held by {})",
                copy + 1,
                borrower_name(*member)
            )));
        }
        Outcome::Refused(err) => {
            lines.push(Line::from(Span::styled(
                format!("Reason: {err}"),
                Style::default().add_modifier(Modifier::DIM),
            )));
        }
    }
    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}
