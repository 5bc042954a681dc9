//! Win and draw evaluation.
//!
//! Pure functions over a [`Board`]. Evaluation always runs from scratch;
//! nothing tracks partially completed lines between moves.

use super::types::{Board, Cell, Mark, Status};
use tracing::instrument;

/// Coordinates of one winning line, as `(row, col)` pairs.
pub type Line = [(usize, usize); Board::SIZE];

/// Every line that wins when filled by one mark.
///
/// Yields rows top to bottom, columns left to right, the main diagonal
/// `(0,0)..(2,2)`, then the anti-diagonal starting at the bottom-left.
pub fn lines() -> impl Iterator<Item = Line> {
    let n = Board::SIZE;
    let rows = (0..n).map(move |row| -> Line { std::array::from_fn(|col| (row, col)) });
    let cols = (0..n).map(move |col| -> Line { std::array::from_fn(|row| (row, col)) });
    let main: Line = std::array::from_fn(|i| (i, i));
    let anti: Line = std::array::from_fn(|i| (n - 1 - i, i));
    rows.chain(cols).chain([main, anti])
}

/// Returns the mark that owns a complete line, if any.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Mark> {
    lines().find_map(|line| line_owner(board, &line))
}

fn line_owner(board: &Board, line: &Line) -> Option<Mark> {
    let cells = board.rows();
    let (row, col) = line[0];
    let Cell::Occupied(mark) = cells[row][col] else {
        return None;
    };
    line.iter()
        .all(|&(r, c)| cells[r][c] == Cell::Occupied(mark))
        .then_some(mark)
}

/// Computes the status of a board.
///
/// A completed line wins regardless of remaining empty squares. Without
/// one, any empty square keeps the game playable; a full board is a draw.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Status {
    if let Some(mark) = check_winner(board) {
        return Status::win_for(mark);
    }
    if board.is_full() {
        Status::Draw
    } else {
        Status::Playable
    }
}
