//! Board geometry and rendering.
//!
//! Cell rectangles come from one pure function so that drawing and
//! mouse hit-testing always agree.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use rewind_tictactoe::{Board, Player, Position, Square};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen rectangles of the nine cells, in row-major order.
pub fn cell_areas(area: Rect) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row_area);
        for (c, col_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[r * 3 + c] = col_area;
        }
    }
    cells
}

/// Renders the board with an optional cursor highlight.
pub fn render_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Position>) {
    let cells = cell_areas(area);

    for pos in Position::ALL {
        draw_cell(frame, cells[pos.to_index()], board.get(pos), cursor == Some(pos));
    }

    let separator = Style::default().fg(Color::DarkGray);
    for r in 0..2 {
        let above = cells[r * 3];
        let line = Rect::new(above.x, above.y + above.height, BOARD_WIDTH.min(area.width), 1);
        let rule = Paragraph::new("─".repeat(line.width as usize)).style(separator);
        frame.render_widget(rule, line.intersection(area));
    }
    for c in 0..2 {
        for r in 0..3 {
            let left = cells[r * 3 + c];
            let bar = Rect::new(left.x + left.width, left.y, 1, left.height);
            let lines: Vec<Line> = (0..bar.height).map(|_| Line::from("│")).collect();
            frame.render_widget(Paragraph::new(lines).style(separator), bar.intersection(area));
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, highlighted: bool) {
    let (symbol, base_style) = match square {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlighted {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let middle = area.height.saturating_sub(1) / 2;
    let lines: Vec<Line> = (0..area.height)
        .map(|row| {
            if row == middle {
                Line::from(Span::styled(symbol, style))
            } else {
                Line::from("")
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
