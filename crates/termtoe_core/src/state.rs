//! Game state and its transitions.

use super::command::Command;
use super::rules::evaluate;
use super::types::{Board, Cursor, Direction, Mark, Status};
use derive_getters::Getters;
use tracing::{debug, info, instrument};

/// Complete state of one game: board, cursor, whose turn it is and the
/// status derived from the board.
///
/// Invalid requests (stepping off the board, placing on an occupied
/// square, placing after the game ended) leave the state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Highlighted square.
    cursor: Cursor,
    /// Mark placed by the next successful placement.
    mark: Mark,
    /// Status of `board`, refreshed after every placement.
    status: Status,
}

impl GameState {
    /// Creates a fresh game: empty board, cursor top-left, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor one square, stopping at the board edge.
    #[instrument(skip(self), fields(from = %self.cursor))]
    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor = self.cursor.shifted(direction);
        debug!(to = %self.cursor, "Cursor moved");
    }

    /// Places the active mark under the cursor.
    ///
    /// Returns `true` when the board changed. Nothing happens if the game
    /// is over or the square is taken.
    #[instrument(skip(self), fields(cursor = %self.cursor, mark = %self.mark))]
    pub fn place_mark(&mut self) -> bool {
        if self.status.is_terminal() {
            debug!(status = %self.status, "Game is over, placement ignored");
            return false;
        }
        if !self.board.at(self.cursor).is_empty() {
            debug!("Square is occupied, placement ignored");
            return false;
        }

        self.board.set(self.cursor, self.mark);
        self.mark = self.mark.opponent();
        self.status = evaluate(&self.board);

        if self.status.is_terminal() {
            info!(status = %self.status, "Game over");
        } else {
            debug!(next = %self.mark, "Mark placed");
        }
        true
    }

    /// Returns a brand-new game. `self` is left as it was.
    #[instrument(skip(self))]
    pub fn reset(&self) -> Self {
        info!("Starting a new game");
        Self::new()
    }

    /// Applies one command and returns the resulting state.
    ///
    /// `Quit` leaves the state unchanged; ending the session is up to the
    /// caller.
    #[instrument(skip(self))]
    pub fn apply(mut self, command: Command) -> Self {
        match command {
            Command::Place => {
                self.place_mark();
                self
            }
            Command::Reset => self.reset(),
            Command::Quit => self,
            Command::MoveUp | Command::MoveDown | Command::MoveLeft | Command::MoveRight => {
                if let Some(direction) = command.direction() {
                    self.move_cursor(direction);
                }
                self
            }
        }
    }
}
