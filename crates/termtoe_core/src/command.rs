//! Commands accepted by the game.

use super::types::Direction;
use strum::{Display, EnumIter};

/// Every input the game reacts to.
///
/// Input adapters translate raw events into exactly this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Command {
    /// Move the cursor one row up.
    MoveUp,
    /// Move the cursor one row down.
    MoveDown,
    /// Move the cursor one column left.
    MoveLeft,
    /// Move the cursor one column right.
    MoveRight,
    /// Place the active mark under the cursor.
    Place,
    /// Start a fresh game.
    Reset,
    /// Leave the game.
    Quit,
}

impl Command {
    /// The cursor direction for move commands.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Command::MoveUp => Some(Direction::Up),
            Command::MoveDown => Some(Direction::Down),
            Command::MoveLeft => Some(Direction::Left),
            Command::MoveRight => Some(Direction::Right),
            Command::Place | Command::Reset | Command::Quit => None,
        }
    }
}
