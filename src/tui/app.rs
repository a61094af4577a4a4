//! Application state and key handling.

use super::input::move_cursor;
use crossterm::event::KeyCode;
use rewind_core::{GameHistory, GameView, MoveListOrder, Position};
use tracing::{debug, instrument};

/// Which pane receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    Moves,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// Main application state.
///
/// The game itself lives in [`GameHistory`]; everything here is
/// presentation state (cursor, focus, list order).
#[derive(Debug, Clone)]
pub struct App {
    history: GameHistory,
    cursor: Position,
    order: MoveListOrder,
    focus: Focus,
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(order: MoveListOrder) -> Self {
        Self {
            history: GameHistory::new(),
            cursor: Position::Center,
            order,
            focus: Focus::default(),
            selected: 0,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move-list display order.
    pub fn order(&self) -> MoveListOrder {
        self.order
    }

    /// Selected row in the displayed move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Everything the renderer needs.
    pub fn view(&self) -> GameView {
        self.history.view(self.order)
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.select_current();
            }
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('s') => self.reverse_move_list_order(),
            KeyCode::Char('[') | KeyCode::PageUp => {
                self.jump_to(self.history.step().saturating_sub(1));
            }
            KeyCode::Char(']') | KeyCode::PageDown => {
                self.jump_to(self.history.step() + 1);
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10).filter(|d| (1..=9).contains(d)) {
                    self.play_cell(digit as usize - 1);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::Moves => self.handle_moves_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play_cell(self.cursor.to_index()),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        let rows = self.history.len();
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(rows - 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let step = self
                    .history
                    .move_list(self.order)
                    .nth(self.selected)
                    .map(|entry| entry.step);
                if let Some(step) = step {
                    self.jump_to(step);
                }
            }
            _ => {}
        }
    }

    /// Plays the current mover's mark; illegal cells are ignored.
    pub fn play_cell(&mut self, cell_index: usize) {
        if self.history.play_move(cell_index) {
            if let Some(pos) = Position::from_index(cell_index) {
                self.cursor = pos;
            }
            self.select_current();
        }
    }

    /// Travels to a recorded step; unknown steps are ignored.
    pub fn jump_to(&mut self, step: usize) {
        if self.history.jump_to(step) {
            debug!(step, "Jumped");
            self.select_current();
        }
    }

    /// Starts over.
    pub fn new_game(&mut self) {
        self.history.new_game();
        self.cursor = Position::Center;
        self.select_current();
    }

    /// Flips the move-list display order; the history is untouched.
    pub fn reverse_move_list_order(&mut self) {
        self.order = self.order.toggle();
        debug!(order = %self.order, "Move list order changed");
        self.select_current();
    }

    /// Puts the list selection on the row of the current step.
    fn select_current(&mut self) {
        self.selected = self
            .history
            .move_list(self.order)
            .position(|entry| entry.is_current)
            .unwrap_or(0);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(MoveListOrder::default())
    }
}
