mod app;
mod handlers;
mod rendering;
mod types;

pub use app::App;
pub use types::{InputStatus, LogBuffer, Notice, NoticeLevel};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;

use crate::{config::AppConfig, scores::Scoreboard};

/// Entry point for running the UI.
pub fn run_ui(config: &AppConfig) -> Result<()> {
    let scoreboard = Scoreboard::load(&config.scores_path);
    let logs = LogBuffer::new();
    logs.push(format!("High scores: {}", scoreboard.path().display()));

    let mut app = App::new(config.difficulty, scoreboard, logs);

    let mut stdout = stdout();
    enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
