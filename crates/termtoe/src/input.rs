//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use termtoe_core::Command;
use tracing::{instrument, trace};

/// Translates key presses into game commands.
///
/// Arrow keys always move the cursor; with `vim_keys` enabled `k`, `j`,
/// `h`, `l` do too. `Enter` or `Space` places a mark, `r` resets, and `q`
/// or `Ctrl+C` quits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMap {
    vim_keys: bool,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new(true)
    }
}

impl KeyMap {
    /// Creates a key map.
    pub fn new(vim_keys: bool) -> Self {
        Self { vim_keys }
    }

    /// Whether `h/j/k/l` move the cursor.
    pub fn vim_keys(&self) -> bool {
        self.vim_keys
    }

    /// Returns the command bound to `key`, or `None` for unbound keys.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn command(&self, key: KeyEvent) -> Option<Command> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Command::Quit),
                _ => None,
            };
        }

        let command = match key.code {
            KeyCode::Up => Some(Command::MoveUp),
            KeyCode::Down => Some(Command::MoveDown),
            KeyCode::Left => Some(Command::MoveLeft),
            KeyCode::Right => Some(Command::MoveRight),
            KeyCode::Char('k') if self.vim_keys => Some(Command::MoveUp),
            KeyCode::Char('j') if self.vim_keys => Some(Command::MoveDown),
            KeyCode::Char('h') if self.vim_keys => Some(Command::MoveLeft),
            KeyCode::Char('l') if self.vim_keys => Some(Command::MoveRight),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Place),
            KeyCode::Char('r') => Some(Command::Reset),
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        };
        trace!(?command, "Key mapped");
        command
    }
}
