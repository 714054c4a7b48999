use circulation::config::Settings;
use circulation::tui::{app::AppState, controller};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::fs::OpenOptions;
use std::io::{self, IsTerminal, Stdout};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

// The TUI owns the terminal, so events only ever go to a file.
fn init_logging(settings: &Settings) -> io::Result<()> {
    let Some(path) = &settings.log_file else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))
}

fn main() -> io::Result<()> {
    if !io::stdout().is_terminal() {
        println!(
            "circulation TUI requires a real terminal (TTY).\n\
             Run in Terminal and press q to quit. Version: {}",
            circulation::VERSION
        );
        return Ok(());
    }
    let settings = Settings::from_env().unwrap_or_else(|err| {
        eprintln!("ignoring invalid CIRCULATION_* settings: {err}");
        Settings::default()
    });
    init_logging(&settings)?;
    tracing::info!(version = circulation::VERSION, empty = settings.empty, "starting circulation");

    let mut terminal = setup_terminal()?;
    let mut app = AppState::from_settings(&settings);

    let res = controller::run(&mut terminal, &mut app, settings.tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
