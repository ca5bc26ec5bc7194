//! Keyboard input dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app::App;
use super::GameHandler;

/// Helper struct for managing keyboard input and user interactions.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Handles one key press. Returns true when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.app.notice = None;

        match (key.code, key.modifiers) {
            (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
                self.app.log("Exit requested");
                return true;
            }

            (KeyCode::Char('r' | 'R'), KeyModifiers::CONTROL) => {
                GameHandler::new(self.app).play_again();
            }

            (KeyCode::Tab, _) => GameHandler::new(self.app).cycle_difficulty(true),
            (KeyCode::BackTab, _) => GameHandler::new(self.app).cycle_difficulty(false),

            (KeyCode::Enter, _) => self.submit_input(),

            // Guessing is disabled once the game is over.
            _ if self.app.game.is_over() => {}

            (KeyCode::Backspace, _) => {
                self.app.input.pop();
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => self.app.input.push(c),
            _ => {}
        }
        false
    }

    fn submit_input(&mut self) {
        if self.app.game.is_over() {
            GameHandler::new(self.app).play_again();
            return;
        }

        GameHandler::new(self.app).submit_guess();
    }
}
