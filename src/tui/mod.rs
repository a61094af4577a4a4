//! Terminal UI for rewind.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use input::move_cursor;

use crate::config::RewindConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

/// Runs the interactive terminal game until the player quits.
pub fn run_tui(config: &RewindConfig) -> Result<()> {
    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(
        log_file = %config.log_file().display(),
        log_filter = %config.log_filter(),
        order = %config.move_list_order(),
        "Starting rewind TUI"
    );

    let mut terminal = setup_terminal()?;

    let app = App::new(*config.move_list_order());
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");

    res
}

/// Enters raw mode and the alternate screen.
///
/// Raw mode is switched back off if the rest of the setup fails.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let terminal = execute!(stdout, EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)));

    match terminal {
        Ok(terminal) => Ok(terminal),
        Err(err) => {
            error!(error = %err, "Terminal setup failed, restoring");
            if let Err(restore) = execute!(io::stdout(), LeaveAlternateScreen) {
                error!(error = %restore, "Failed to leave alternate screen");
            }
            if let Err(restore) = disable_raw_mode() {
                error!(error = %restore, "Failed to disable raw mode");
            }
            Err(err).context("Failed to set up terminal")
        }
    }
}

/// Blocking draw/read loop; one key event is applied per iteration.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            info!(steps = app.history().len(), "User quit");
            return Ok(());
        }
    }
}
