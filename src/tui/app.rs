//! Application state and event handling.

use crate::game::{Game, Outcome, Position};
use crossterm::event::KeyCode;
use tracing::debug;

use super::input;

/// Main application state.
pub struct App {
    game: Game,
    cursor: Position,
    modal: Option<String>,
    status: String,
    should_quit: bool,
}

impl App {
    /// Creates the application with a fresh game.
    pub fn new() -> Self {
        let game = Game::new();
        let status = format!("{} to move", game.to_move());
        Self {
            game,
            cursor: Position::Center,
            modal: None,
            status,
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The outcome announcement, when the game has ended.
    pub fn modal(&self) -> Option<&str> {
        self.modal.as_deref()
    }

    /// The status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Whether the UI should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    ///
    /// While the outcome modal is showing, `q` and `Esc` quit and any
    /// other key dismisses the modal, which resets the game.
    pub fn handle_key(&mut self, key: KeyCode) {
        if self.modal.is_some() {
            match key {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => self.dismiss_modal(),
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => {
                self.game.reset();
                self.status = format!("{} to move", self.game.to_move());
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play_at(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10)
                    && digit >= 1
                    && let Some(pos) = Position::from_index(digit as usize - 1)
                {
                    self.play_at(pos);
                }
            }
            other => self.cursor = input::move_cursor(self.cursor, other),
        }
    }

    /// Handles a left click; `cell` is the grid cell hit, if any.
    pub fn handle_click(&mut self, cell: Option<Position>) {
        if self.modal.is_some() {
            self.dismiss_modal();
            return;
        }
        if let Some(pos) = cell {
            self.cursor = pos;
            self.play_at(pos);
        }
    }

    fn play_at(&mut self, pos: Position) {
        match self.game.play(pos) {
            Ok(Outcome::Won(player)) => {
                self.modal = Some(format!("{}s win!", player.symbol()));
                self.status = "game over".to_string();
            }
            Ok(Outcome::Draw) => {
                self.modal = Some("Oh no, it's a draw".to_string());
                self.status = "game over".to_string();
            }
            Ok(Outcome::InProgress) => {
                self.status = format!("{} to move", self.game.to_move());
            }
            // Occupied cells are silently ignored at the UI layer.
            Err(err) => debug!(%err, cell = %pos, "move ignored"),
        }
    }

    fn dismiss_modal(&mut self) {
        self.modal = None;
        self.game.reset();
        self.cursor = Position::Center;
        self.status = format!("{} to move", self.game.to_move());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
