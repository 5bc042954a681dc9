//! Exhaustive checks of board evaluation over all 3^9 boards.

use termtoe_core::{Board, Cell, Grid, Mark, Status, evaluate};

fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(9)).map(|mut code| {
        let mut grid: Grid = [[Cell::Empty; 3]; 3];
        for cell in grid.iter_mut().flatten() {
            *cell = match code % 3 {
                0 => Cell::Empty,
                1 => Cell::Occupied(Mark::X),
                _ => Cell::Occupied(Mark::O),
            };
            code /= 3;
        }
        Board::from_rows(grid)
    })
}

/// Independent enumeration of the eight literal lines.
fn has_line(board: &Board, mark: Mark) -> bool {
    const LINES: [[(usize, usize); 3]; 8] = [
        [(0, 0), (0, 1), (0, 2)],
        [(1, 0), (1, 1), (1, 2)],
        [(2, 0), (2, 1), (2, 2)],
        [(0, 0), (1, 0), (2, 0)],
        [(0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 2), (2, 2)],
        [(0, 0), (1, 1), (2, 2)],
        [(2, 0), (1, 1), (0, 2)],
    ];
    LINES.iter().any(|line| {
        line.iter()
            .all(|&(r, c)| board.cell(r, c) == Some(Cell::Occupied(mark)))
    })
}

fn has_empty(board: &Board) -> bool {
    board.rows().iter().flatten().any(|c| *c == Cell::Empty)
}

#[test]
fn test_playable_iff_empty_and_no_line() {
    for board in all_boards() {
        let no_line = !has_line(&board, Mark::X) && !has_line(&board, Mark::O);
        assert_eq!(
            evaluate(&board) == Status::Playable,
            has_empty(&board) && no_line,
            "\n{board}"
        );
    }
}

#[test]
fn test_single_line_owner_wins() {
    for board in all_boards() {
        let x = has_line(&board, Mark::X);
        let o = has_line(&board, Mark::O);
        // Boards holding lines for both marks are unreachable in play.
        if x && !o {
            assert_eq!(evaluate(&board), Status::XWins, "\n{board}");
        }
        if o && !x {
            assert_eq!(evaluate(&board), Status::OWins, "\n{board}");
        }
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    for board in all_boards().filter(|b| !has_empty(b)) {
        if !has_line(&board, Mark::X) && !has_line(&board, Mark::O) {
            assert_eq!(evaluate(&board), Status::Draw, "\n{board}");
        }
    }
}
