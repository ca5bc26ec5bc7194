mod guesses;
mod input_field;
mod logs;
mod scores;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Color,
};

use crate::{difficulty::Difficulty, ui::app::App};

/// Accent colour for each difficulty tier.
pub(in crate::ui) fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::LightGreen,
        Difficulty::Medium => Color::LightCyan,
        Difficulty::Hard => Color::LightMagenta,
    }
}

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Difficulty selector
                Constraint::Length(4), // Status + attempts left
                Constraint::Length(3), // Input
                Constraint::Length(3), // Notice
                Constraint::Min(6),    // History + high scores
                Constraint::Length(6), // Logs
            ])
            .split(f.area());

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(layout[4]);

        self.draw_difficulty(f, layout[0]);
        self.draw_game_status(f, layout[1]);
        self.draw_input(f, layout[2]);
        self.draw_notice(f, layout[3]);
        self.draw_guesses(f, bottom[0]);
        self.draw_high_scores(f, bottom[1]);
        self.draw_logs(f, layout[5]);
    }
}
