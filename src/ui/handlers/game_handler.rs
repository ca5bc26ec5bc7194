//! Game state transitions driven by the UI.

use crate::{
    difficulty::Difficulty,
    game::{GameState, GameStatus, GuessError},
    scores::RecordWin,
};

use super::super::{app::App, types::Notice};

/// Helper struct for managing game-specific state transitions.
pub struct GameHandler<'a> {
    app: &'a mut App,
}

impl<'a> GameHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn start_new_game(&mut self, difficulty: Difficulty) {
        self.app.game = GameState::new(difficulty);
        self.app.input.clear();
        self.app.log(format!(
            "New {} game: guess a number between {} and {}",
            difficulty,
            difficulty.min(),
            difficulty.max()
        ));
    }

    /// Restarts at the current difficulty. Only allowed once the game ended.
    pub fn play_again(&mut self) {
        if !self.app.game.is_over() {
            self.app.log("Play again ignored: game still in progress");
            return;
        }

        self.start_new_game(self.app.game.difficulty());
    }

    pub fn cycle_difficulty(&mut self, forward: bool) {
        let current = self.app.game.difficulty();
        let next = if forward {
            current.next()
        } else {
            current.prev()
        };

        self.app.log(format!("Difficulty set to {}", next));
        self.start_new_game(next);
    }

    pub fn submit_guess(&mut self) {
        match self.app.game.submit_guess(&self.app.input) {
            Ok(outcome) => {
                let guess = self.app.input.trim().to_string();
                self.app.log(format!(
                    "Guess submitted: {} ({}, {} left)",
                    guess,
                    outcome.hint(),
                    self.app.game.attempts_remaining()
                ));
                self.app.input.clear();
                self.check_game_state();
            }
            Err(GuessError::InvalidInput(raw)) => {
                self.app.log(format!("Input rejected: {:?}", raw));
                self.app.notice = Some(Notice::error("Please enter a valid number!"));
            }
            Err(GuessError::GameOver) => {
                self.app.log("Guess ignored: game is over");
            }
        }
    }

    pub fn check_game_state(&mut self) {
        match self.app.game.status() {
            GameStatus::InProgress => {}
            GameStatus::Won { attempts } => {
                let difficulty = self.app.game.difficulty();
                self.app
                    .log(format!("Game won in {} attempt(s) on {}", attempts, difficulty));

                match self.app.scoreboard.record_win(difficulty, attempts) {
                    RecordWin::Unchanged => {}
                    RecordWin::Improved => {
                        self.app.notice = Some(Notice::info(format!(
                            "New record for {}: {} attempts!",
                            difficulty, attempts
                        )));
                    }
                    RecordWin::ImprovedUnsaved(e) => {
                        self.app.log(format!("Failed to save high scores: {}", e));
                        self.app.notice = Some(Notice::warning(format!(
                            "New record for {}: {} attempts! (could not be saved: {})",
                            difficulty, attempts, e
                        )));
                    }
                }
            }
            GameStatus::Lost { secret } => {
                self.app
                    .log(format!("Game over: out of attempts, the number was {}", secret));
            }
        }
    }
}
