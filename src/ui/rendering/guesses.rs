//! Guess history rendering.

use ratatui::{
    Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{game::Outcome, ui::app::App};

impl App {
    pub(in crate::ui) fn draw_guesses(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let history = self.game.history();

        // Keep the latest guesses visible when the list outgrows the panel.
        let visible = (area.height as usize).saturating_sub(2);
        let start = history.len().saturating_sub(visible);

        let lines: Vec<Line> = history
            .iter()
            .enumerate()
            .skip(start)
            .map(|(idx, record)| {
                let arrow = match record.outcome {
                    Outcome::TooLow => "⬆",
                    Outcome::TooHigh => "⬇",
                    Outcome::Correct => "🎉",
                };
                let fg = match record.outcome {
                    Outcome::Correct => Color::Green,
                    _ => Color::Yellow,
                };
                let bg = if idx % 2 == 0 {
                    Color::Black
                } else {
                    Color::DarkGray
                };

                Line::from(vec![
                    Span::raw(format!("{:>2}. ", idx + 1)),
                    Span::styled(
                        format!("{:>4} → {} {}", record.guess, record.outcome.hint(), arrow),
                        Style::default().fg(fg).bg(bg),
                    ),
                ])
            })
            .collect();

        f.render_widget(
            Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title("Guess History")),
            area,
        );
    }
}
