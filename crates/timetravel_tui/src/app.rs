//! Application state and key handling.

use crate::input::move_cursor;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use derive_getters::Getters;
use std::io;
use timetravel_tictactoe::{GameController, MoveOutcome, Position};
use tracing::{debug, instrument, warn};

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

impl Focus {
    /// Toggles between `Board` and `History`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Owns the one [`GameController`] of the session and forwards key presses
/// to it as cell clicks and history clicks.
#[derive(Debug, Getters)]
pub struct App {
    game: GameController,
    cursor: Position,
    focus: Focus,
    history_selection: usize,
    message: Option<String>,
    highlight_winning_line: bool,
}

impl App {
    /// Creates a new application at the empty board.
    #[instrument]
    pub fn new(highlight_winning_line: bool) -> Self {
        Self {
            game: GameController::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            history_selection: 0,
            message: None,
            highlight_winning_line,
        }
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.history_selection = self.game.step();
                debug!(focus = ?self.focus, "Focus changed");
            }
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = c
                    .to_digit(10)
                    .and_then(|d| Position::from_index(d as usize - 1))
                {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
        AppAction::Continue
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let last = self.game.history().len() - 1;
        match key {
            KeyCode::Up => self.history_selection = self.history_selection.saturating_sub(1),
            KeyCode::Down => self.history_selection = (self.history_selection + 1).min(last),
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.history_selection),
            _ => {}
        }
    }

    fn place(&mut self, pos: Position) {
        match self.game.apply_move(pos) {
            MoveOutcome::Applied { .. } => self.message = None,
            MoveOutcome::Ignored(reason) => self.message = Some(reason.to_string()),
        }
        self.history_selection = self.game.step();
    }

    fn jump(&mut self, step: usize) {
        match self.game.history_item_clicked(step) {
            Ok(()) => self.message = None,
            Err(e) => {
                warn!(error = %e, "Jump rejected");
                self.message = Some(e.to_string());
            }
        }
        self.history_selection = self.game.step();
    }

    /// Restarts the game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.game.restart();
        self.history_selection = 0;
        self.message = Some("Game restarted".to_string());
    }

    /// Event loop: redraw, then wait for the next key press.
    ///
    /// Returns when a key asks to quit.
    ///
    /// # Errors
    ///
    /// Returns the first error from `draw` or `next_event`. The loop stops
    /// there so the caller can restore the terminal and report it.
    #[instrument(skip_all)]
    pub fn run<D, E>(&mut self, mut draw: D, mut next_event: E) -> io::Result<()>
    where
        D: FnMut(&App) -> io::Result<()>,
        E: FnMut() -> io::Result<Event>,
    {
        loop {
            draw(self)?;

            if let Event::Key(key) = next_event()?
                && key.kind == KeyEventKind::Press
            {
                debug!(code = ?key.code, "Key pressed");
                if self.handle_key(key.code) == AppAction::Quit {
                    debug!("User quit");
                    return Ok(());
                }
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(true)
    }
}
