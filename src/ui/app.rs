use std::{fmt::Display, io::Stdout};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::{difficulty::Difficulty, game::GameState, scores::Scoreboard};

use super::types::{InputStatus, LogBuffer, Notice};

/// Main application state container.
pub struct App {
    pub(in crate::ui) game: GameState,
    pub(in crate::ui) scoreboard: Scoreboard,
    pub(in crate::ui) input: String,
    pub(in crate::ui) notice: Option<Notice>,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(difficulty: Difficulty, scoreboard: Scoreboard, logs: LogBuffer) -> Self {
        Self {
            game: GameState::new(difficulty),
            scoreboard,
            input: String::new(),
            notice: None,
            logs,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log(format!(
            "New {} game: guess a number between {} and {}",
            self.game.difficulty(),
            self.game.difficulty().min(),
            self.game.difficulty().max()
        ));

        loop {
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if super::handlers::InputHandler::new(self).handle_key(key) {
                    return Ok(());
                }
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }

    pub(in crate::ui) fn input_status(&self) -> InputStatus {
        let guess = self.input.trim();

        if guess.is_empty() {
            return InputStatus::Incomplete;
        }

        if guess.parse::<i64>().is_err() {
            return InputStatus::Invalid("not a number");
        }

        InputStatus::Valid
    }
}
