//! UI rendering using ratatui.

mod board;
mod moves;

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Position as Point, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{GameStatus, Position};

pub use board::{cell_areas, render_board};
pub use moves::{render_moves, scroll_offset};

const HELP: &str =
    "Arrows/Enter or click: play | 1-9: play cell | Tab: move list | F: flip order | Q: quit";

/// Where each panel sits for a given terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Area the board is centered in.
    pub board: Rect,
    /// Status panel.
    pub status: Rect,
    /// Move list panel, including its border.
    pub moves: Rect,
    /// Help line.
    pub help: Rect,
    /// Individual board cells, row-major.
    pub cells: [Rect; 9],
}

impl ScreenLayout {
    /// Splits the terminal area into panels.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(13),   // Board + side panels
                Constraint::Length(3), // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(body[1]);

        Self {
            title: chunks[0],
            board: body[0],
            status: side[0],
            moves: side[1],
            help: chunks[2],
            cells: cell_areas(body[0]),
        }
    }

    /// Board square under a screen point.
    pub fn cell_at(&self, point: Point) -> Option<Position> {
        self.cells
            .iter()
            .position(|cell| cell.contains(point))
            .and_then(Position::from_index)
    }

    /// Number of move-list rows that fit inside the panel border.
    pub fn visible_move_rows(&self) -> usize {
        self.moves.inner(Margin::new(1, 1)).height as usize
    }

    /// Visible row of the move list under a screen point, counted from the
    /// top of the panel before scrolling.
    pub fn move_row_at(&self, point: Point) -> Option<usize> {
        let inner = self.moves.inner(Margin::new(1, 1));
        inner
            .contains(point)
            .then(|| (point.y - inner.y) as usize)
    }
}

/// Draws the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area());
    let game = app.game();

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    let board_block = focus_block("Board", app.focus() == Focus::Board);
    frame.render_widget(board_block, layout.board);
    let cursor = (app.focus() == Focus::Board && !game.status().is_over()).then_some(app.cursor());
    render_board(frame, layout.board, game.current_snapshot(), cursor);

    let status_style = match game.status() {
        GameStatus::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Magenta),
        GameStatus::InProgress => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(vec![
        Line::styled(game.status_line(), status_style),
        Line::from(game.sort_order_label()),
        Line::styled(app.status_message().to_string(), Style::default().fg(Color::DarkGray)),
    ])
    .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, layout.status);

    let selected = (app.focus() == Focus::Moves).then_some(app.selected_step());
    let moves_title = if app.focus() == Focus::Moves { "Moves *" } else { "Moves" };
    let offset = app.move_list_offset(layout.visible_move_rows());
    render_moves(frame, layout.moves, &game.move_list(), selected, offset, moves_title);

    if app.show_help() {
        let help = Paragraph::new(HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, layout.help);
    }
}

fn focus_block(title: &str, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title.to_string())
}
