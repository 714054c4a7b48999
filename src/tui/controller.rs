use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code, key.modifiers) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    tracing::info!(uptime_secs = app.started.elapsed().as_secs(), "session ended");
    Ok(())
}

/// Map a key to an input action. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, code: KeyCode, modifiers: KeyModifiers) -> bool {
    if modifiers.contains(KeyModifiers::CONTROL) && matches!(code, KeyCode::Char('c')) {
        return true;
    }
    // Text entry swallows printable keys, including q and digits.
    if app.form().is_some() {
        let action = match code {
            KeyCode::Esc => Some(InputAction::Back),
            KeyCode::Enter => Some(InputAction::Enter),
            KeyCode::Tab => Some(InputAction::NextField),
            KeyCode::BackTab => Some(InputAction::PrevField),
            KeyCode::Up => Some(InputAction::Up),
            KeyCode::Down => Some(InputAction::Down),
            KeyCode::Left => Some(InputAction::Left),
            KeyCode::Right => Some(InputAction::Right),
            KeyCode::Backspace => Some(InputAction::Backspace),
            KeyCode::Char(c) => Some(InputAction::Char(c)),
            _ => None,
        };
        if let Some(action) = action {
            let _ = app.handle_input(action);
        }
        return false;
    }

    if app.scene == Scene::Menu && matches!(code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return true;
    }
    let action = match code {
        KeyCode::Up | KeyCode::Char('k') => Some(InputAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(InputAction::Down),
        KeyCode::Enter => Some(InputAction::Enter),
        KeyCode::Esc | KeyCode::Backspace => Some(InputAction::Back),
        KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
            Some(InputAction::Jump((c as u8 - b'1') as usize))
        }
        _ => None,
    };
    if let Some(action) = action {
        let _ = app.handle_input(action);
    }
    false
}
