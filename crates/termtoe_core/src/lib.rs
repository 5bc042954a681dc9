//! Game engine for terminal tic-tac-toe.
//!
//! Holds the board, the keyboard cursor, the active mark and the status
//! derived from the board. Nothing here knows about terminals: a front end
//! turns input into [`Command`]s, feeds them to [`GameState::apply`] and
//! renders the result.
//!
//! # Example
//!
//! ```
//! use termtoe_core::{Command, GameState, Status};
//!
//! let state = GameState::new()
//!     .apply(Command::Place)
//!     .apply(Command::MoveRight)
//!     .apply(Command::Place);
//! assert_eq!(state.status(), &Status::Playable);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod command;
mod rules;
mod state;
mod types;

pub use command::Command;
pub use rules::{Line, check_winner, evaluate, lines};
pub use state::GameState;
pub use types::{Board, Cell, Cursor, Direction, Grid, Mark, Status};
