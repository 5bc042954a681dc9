//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use termtoe_core::{Board, Cell, Cursor, GameState, Mark};

use crate::input::KeyMap;

/// Styles used when drawing the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Highlighted square, layered over the mark style.
    pub cursor: Style,
    /// X marks.
    pub x: Style,
    /// O marks.
    pub o: Style,
    /// Empty squares.
    pub empty: Style,
    /// Grid lines.
    pub grid: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        Self {
            cursor: bold.fg(Color::White).bg(Color::Indexed(61)),
            x: bold.fg(Color::Blue),
            o: bold.fg(Color::Red),
            empty: Style::default(),
            grid: Style::default().fg(Color::DarkGray),
        }
    }
}

const BOARD_WIDTH: u16 = 11;
const BOARD_HEIGHT: u16 = 5;

/// Renders the whole screen. Never touches the game state.
pub fn draw(frame: &mut Frame, state: &GameState, keys: &KeyMap, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(2), // Help
            Constraint::Length(3), // Turn and status
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let help = Paragraph::new(help_lines(keys)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[1]);

    let info = Paragraph::new(vec![
        Line::from(format!("turn: {}", state.mark())),
        Line::from(Span::styled(
            format!("status: {}", state.status()),
            Style::default().fg(Color::Yellow),
        )),
    ]);
    frame.render_widget(info, chunks[2]);

    let board = Paragraph::new(board_lines(state.board(), *state.cursor(), theme));
    frame.render_widget(board, center_rect(chunks[3], BOARD_WIDTH, BOARD_HEIGHT));

    let footer = Paragraph::new(vec![
        Line::from("press r to reset"),
        Line::from("press q to quit"),
    ])
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[4]);
}

fn help_lines(keys: &KeyMap) -> Vec<Line<'static>> {
    let movement = if keys.vim_keys() {
        "move the cursor with the arrow keys or h, j, k, l"
    } else {
        "move the cursor with the arrow keys"
    };
    vec![
        Line::from(movement),
        Line::from("press space or enter to mark the board"),
    ]
}

/// Board rows with grid lines, the cursor square highlighted.
pub fn board_lines(board: &Board, cursor: Cursor, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(2 * Board::SIZE - 1);
    for (y, row) in board.rows().iter().enumerate() {
        let mut spans = Vec::with_capacity(2 * Board::SIZE - 1);
        for (x, cell) in row.iter().enumerate() {
            let base = match cell {
                Cell::Empty => theme.empty,
                Cell::Occupied(Mark::X) => theme.x,
                Cell::Occupied(Mark::O) => theme.o,
            };
            let style = if cursor.row() == y && cursor.col() == x {
                base.patch(theme.cursor)
            } else {
                base
            };
            spans.push(Span::styled(format!(" {} ", cell.symbol()), style));
            if x + 1 < Board::SIZE {
                spans.push(Span::styled("│", theme.grid));
            }
        }
        lines.push(Line::from(spans));
        if y + 1 < Board::SIZE {
            lines.push(Line::styled("───┼───┼───", theme.grid));
        }
    }
    lines
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
