//! Application state and logic.

use crate::config::TuiConfig;
use crate::input::{self, Action};
use crate::ui::{self, ScreenLayout};
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use rewind_tictactoe::{GameState, Position};
use tracing::{debug, info, instrument};

/// Which panel receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrows move the board cursor.
    Board,
    /// Arrows move the move-list selection.
    Moves,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    status_message: String,
    show_help: bool,
    should_quit: bool,
    screen: Rect,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: &TuiConfig) -> Self {
        let mut game = GameState::new();
        if *config.start_descending() {
            game.toggle_move_order();
        }
        Self {
            game,
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step: 0,
            status_message: "Player X's turn.".to_string(),
            show_help: *config.show_help(),
            should_quit: false,
            screen: Rect::default(),
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Square under the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History step highlighted in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the help line is drawn.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records the area of the last drawn frame for mouse hit-testing.
    pub fn set_screen(&mut self, area: Rect) {
        self.screen = area;
    }

    /// Layout of the last drawn frame.
    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout::new(self.screen)
    }

    /// Step the move list scrolls to keep in view: the selection while the
    /// list has focus, the viewed step otherwise.
    pub fn move_list_anchor(&self) -> usize {
        match self.focus {
            Focus::Moves => self.selected_step,
            Focus::Board => self.game.step(),
        }
    }

    /// First move-list row shown when `visible` rows fit on screen.
    pub fn move_list_offset(&self, visible: usize) -> usize {
        let anchor = self.move_list_anchor();
        let anchor_row = self
            .game
            .move_list()
            .iter()
            .position(|row| row.step == anchor)
            .unwrap_or(0);
        ui::scroll_offset(anchor_row, visible)
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = input::key_action(key, self.focus) {
            self.apply(action);
        }
    }

    /// Handles a mouse event.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let Some(action) = input::mouse_action(mouse, &self.layout()) {
            self.apply(action);
        }
    }

    /// Applies a user action to the game.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::MoveCursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::PlaceAt(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Action::SelectPrevious => self.shift_selection(-1),
            Action::SelectNext => self.shift_selection(1),
            Action::JumpToSelected => self.jump(self.selected_step),
            Action::JumpToRow(row) => {
                let offset = self.move_list_offset(self.layout().visible_move_rows());
                if let Some(entry) = self.game.move_list().get(offset + row) {
                    self.jump(entry.step);
                }
            }
            Action::SwitchFocus => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
                self.selected_step = self.game.step();
            }
            Action::ToggleOrder => {
                self.game.toggle_move_order();
                self.status_message = self.game.sort_order_label();
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn place(&mut self, pos: Position) {
        let outcome = self.game.apply_move(pos);
        if outcome.is_applied() {
            self.selected_step = self.game.step();
        }
        self.status_message = outcome.to_string();
    }

    fn jump(&mut self, step: usize) {
        if self.game.jump_to(step) {
            self.selected_step = step;
            self.status_message = match step {
                0 => "Viewing game start".to_string(),
                n => format!("Viewing move #{}", n),
            };
        }
    }

    /// Moves the selection by `delta` rows in display order.
    fn shift_selection(&mut self, delta: isize) {
        let rows = self.game.move_list();
        let current = rows
            .iter()
            .position(|row| row.step == self.selected_step)
            .unwrap_or(0);
        let target = current.saturating_add_signed(delta).min(rows.len() - 1);
        self.selected_step = rows[target].step;
    }
}
