//! Move-list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::MoveListEntry;

/// First display row to draw so that `anchor_row` is inside a window of
/// `visible` rows. The window only scrolls once the anchor passes its
/// bottom edge.
pub fn scroll_offset(anchor_row: usize, visible: usize) -> usize {
    (anchor_row + 1).saturating_sub(visible)
}

/// Renders the move list, one row per history step, in display order,
/// skipping the first `offset` rows.
pub fn render_moves(
    frame: &mut Frame,
    area: Rect,
    rows: &[MoveListEntry],
    selected_step: Option<usize>,
    offset: usize,
    title: &str,
) {
    let lines: Vec<Line> = rows
        .iter()
        .map(|row| {
            let marker = if selected_step == Some(row.step) { "> " } else { "  " };

            let mut style = Style::default();
            if row.is_latest {
                style = style.add_modifier(Modifier::BOLD);
            }
            if row.is_current {
                style = style.fg(Color::Yellow);
            }

            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(format!("{}. {}", row.step + 1, row.description()), style),
            ])
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(title.to_string());
    let scroll = u16::try_from(offset).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}
