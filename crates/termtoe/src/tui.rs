//! Terminal setup and teardown around the event loop.

use anyhow::{Context, Result};
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use termtoe_core::GameState;
use tracing::{error, info, instrument};

use crate::app::run_loop;
use crate::config::TuiConfig;
use crate::input::KeyMap;

/// Plays games in the current terminal until the user quits.
///
/// The terminal is restored before returning, also when the loop fails.
#[instrument(skip_all)]
pub fn run(config: &TuiConfig) -> Result<()> {
    let theme = config.theme().resolve()?;
    let keys = KeyMap::new(*config.vim_keys());

    info!("Starting terminal UI");
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }
    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(e).context("Failed to initialize terminal");
        }
    };

    let events = std::iter::repeat_with(event::read);
    let res = run_loop(&mut terminal, GameState::new(), events, &keys, &theme);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res {
        Ok(state) => {
            info!(status = %state.status(), "Session ended");
            Ok(())
        }
        Err(err) => {
            error!(error = ?err, "Game loop error");
            Err(err)
        }
    }
}
