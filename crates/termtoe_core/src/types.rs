//! Core domain types for tic-tac-toe.

use derive_more::Display;
use strum::EnumIter;

/// A player's symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum Mark {
    /// Player X (goes first).
    #[default]
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other player's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Square holds a player's mark.
    Occupied(Mark),
}

impl Cell {
    /// Single-character symbol used by text renderings.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(Mark::X) => 'x',
            Cell::Occupied(Mark::O) => 'o',
        }
    }

    /// Returns true for an unoccupied square.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

const SIZE: usize = 3;

/// Cells of a board, top row first.
pub type Grid = [[Cell; SIZE]; SIZE];

/// 3x3 tic-tac-toe board, indexed by `(row, col)` with row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Side length of the board.
    pub const SIZE: usize = SIZE;

    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit rows, top row first.
    pub fn from_rows(cells: Grid) -> Self {
        Self { cells }
    }

    /// Gets the cell at `(row, col)`, or `None` when off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Gets the cell under a cursor. Cursors are always in bounds.
    pub fn at(&self, cursor: Cursor) -> Cell {
        self.cells[cursor.row][cursor.col]
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> &Grid {
        &self.cells
    }

    /// Returns true when no square is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Writes a mark. Only [`GameState`](crate::GameState) places marks.
    pub(crate) fn set(&mut self, cursor: Cursor, mark: Mark) {
        self.cells[cursor.row][cursor.col] = Cell::Occupied(mark);
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            writeln!(f, "{}", line.join("|"))?;
            if y + 1 < Board::SIZE {
                writeln!(f, "-----")?;
            }
        }
        Ok(())
    }
}

/// Direction of a single cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

/// Highlighted square. Both coordinates stay within `0..Board::SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[display("({row}, {col})")]
pub struct Cursor {
    row: usize,
    col: usize,
}

impl Cursor {
    /// Creates a cursor, or `None` when the position is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < Board::SIZE && col < Board::SIZE).then_some(Self { row, col })
    }

    /// Row index, 0 at the top.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index, 0 at the left.
    pub fn col(self) -> usize {
        self.col
    }

    /// One step in `direction`, saturating at the edges.
    pub fn shifted(self, direction: Direction) -> Self {
        let last = Board::SIZE - 1;
        match direction {
            Direction::Up => Self { row: self.row.saturating_sub(1), ..self },
            Direction::Down => Self { row: (self.row + 1).min(last), ..self },
            Direction::Left => Self { col: self.col.saturating_sub(1), ..self },
            Direction::Right => Self { col: (self.col + 1).min(last), ..self },
        }
    }
}

/// Outcome of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Status {
    /// No winner yet and at least one empty square.
    #[default]
    #[display("playable")]
    Playable,
    /// X completed a line.
    #[display("x wins")]
    XWins,
    /// O completed a line.
    #[display("o wins")]
    OWins,
    /// Board full without a line.
    #[display("draw")]
    Draw,
}

impl Status {
    /// The winning status for `mark`.
    pub fn win_for(mark: Mark) -> Self {
        match mark {
            Mark::X => Status::XWins,
            Mark::O => Status::OWins,
        }
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Status::XWins => Some(Mark::X),
            Status::OWins => Some(Mark::O),
            Status::Playable | Status::Draw => None,
        }
    }

    /// Returns true once the game is over.
    pub fn is_terminal(self) -> bool {
        self != Status::Playable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_cursor_bounds() {
        assert!(Cursor::new(2, 2).is_some());
        assert!(Cursor::new(3, 0).is_none());
        assert!(Cursor::new(0, 3).is_none());
    }

    #[test]
    fn test_cursor_saturates_at_every_edge() {
        for row in 0..Board::SIZE {
            for col in 0..Board::SIZE {
                let mut cursor = Cursor::new(row, col).unwrap();
                for direction in Direction::iter() {
                    for _ in 0..5 {
                        cursor = cursor.shifted(direction);
                        assert!(cursor.row() < Board::SIZE);
                        assert!(cursor.col() < Board::SIZE);
                    }
                }
            }
        }
    }

    #[test]
    fn test_cursor_steps() {
        let center = Cursor::new(1, 1).unwrap();
        assert_eq!(center.shifted(Direction::Up), Cursor::new(0, 1).unwrap());
        assert_eq!(center.shifted(Direction::Down), Cursor::new(2, 1).unwrap());
        assert_eq!(center.shifted(Direction::Left), Cursor::new(1, 0).unwrap());
        assert_eq!(center.shifted(Direction::Right), Cursor::new(1, 2).unwrap());
    }

    #[test]
    fn test_board_display() {
        let x = Cell::Occupied(Mark::X);
        let o = Cell::Occupied(Mark::O);
        let e = Cell::Empty;
        let board = Board::from_rows([[x, o, e], [e, x, e], [e, e, o]]);
        assert_eq!(board.to_string(), "x|o| \n-----\n |x| \n-----\n | |o\n");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Playable.to_string(), "playable");
        assert_eq!(Status::XWins.to_string(), "x wins");
        assert_eq!(Status::OWins.to_string(), "o wins");
        assert_eq!(Status::Draw.to_string(), "draw");
    }

    #[test]
    fn test_status_winner() {
        for mark in Mark::iter() {
            assert_eq!(Status::win_for(mark).winner(), Some(mark));
            assert!(Status::win_for(mark).is_terminal());
        }
        assert_eq!(Status::Draw.winner(), None);
        assert!(!Status::Playable.is_terminal());
    }
}
