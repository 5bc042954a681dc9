//! Event loop: input in, commands to the game, frames out.

use anyhow::{Context, Result};
use crossterm::event::{Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use termtoe_core::{Command, GameState};
use tracing::{debug, info, instrument};

use crate::input::KeyMap;
use crate::ui::{self, Theme};

/// Runs the game until `Quit` or until `events` runs dry.
///
/// Each event is handled to completion before the next one is read, and
/// the screen is redrawn after every command. Returns the final state.
#[instrument(skip_all)]
pub fn run_loop<B, I>(
    terminal: &mut Terminal<B>,
    state: GameState,
    events: I,
    keys: &KeyMap,
    theme: &Theme,
) -> Result<GameState>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
    I: IntoIterator<Item = std::io::Result<Event>>,
{
    let mut state = state;
    terminal.draw(|f| ui::draw(f, &state, keys, theme))?;

    for event in events {
        let event = event.context("Failed to read terminal event")?;
        let key = match event {
            // Skip key release events (crossterm fires both press and release).
            Event::Key(key) if key.kind != KeyEventKind::Release => key,
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                terminal.draw(|f| ui::draw(f, &state, keys, theme))?;
                continue;
            }
            _ => continue,
        };

        let Some(command) = keys.command(key) else {
            continue;
        };
        if command == Command::Quit {
            info!(status = %state.status(), "User quit");
            return Ok(state);
        }

        debug!(%command, "Applying command");
        state = state.apply(command);
        terminal.draw(|f| ui::draw(f, &state, keys, theme))?;
    }

    info!("Input closed");
    Ok(state)
}
