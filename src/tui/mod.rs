//! TUI module
//!
//! Terminal rendering layer for the client: reads the branding configuration to
//! populate the window title, theme and feature toggles, and shows the welcome
//! screen until the user starts a call or quits.

mod app;
pub mod constants;
mod theme;
pub mod views;

pub use app::*;
pub use theme::*;

use crate::config::{AppConfig, ThemeMode};
use crate::session::StartCall;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::cell::Cell;
use std::io;
use std::time::Duration;

/// Run the TUI application
///
/// Returns the start request when the user activated the start control, `None`
/// when they quit instead.
pub fn run_tui(config: AppConfig, mode: ThemeMode) -> Result<Option<StartCall>> {
    tracing::debug!("Initializing TUI");

    let start_call = StartCall::from_config(&config);
    let requested = Cell::new(false);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    let result = execute!(stdout, EnterAlternateScreen, SetTitle(&config.page_title))
        .context("Failed to enter alternate screen")
        .and_then(|()| {
            let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
                .context("Failed to create terminal")?;
            let mut app = App::new(config, mode, || requested.set(true));

            tracing::debug!("TUI initialized, entering main loop");
            let result = event_loop(&mut terminal, &mut app);
            let cursor = terminal.show_cursor().context("Failed to show cursor");
            result.and(cursor)
        });

    tracing::debug!("TUI shutting down");

    // Run every restore step even if an earlier one fails
    let raw = disable_raw_mode().context("Failed to disable raw mode");
    let screen =
        execute!(stdout, LeaveAlternateScreen).context("Failed to leave alternate screen");
    result.and(raw).and(screen)?;

    Ok(requested.get().then_some(start_call))
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App<'_>,
) -> Result<()> {
    use crate::tui::constants::EVENT_POLL_MS;

    loop {
        terminal.draw(|f| app.render(f))?;

        // Handle input events (non-blocking)
        if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if let Some(true) = app.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}
