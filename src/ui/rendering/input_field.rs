//! Input field rendering with validation status.

use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{app::App, types::InputStatus};

impl App {
    pub(in crate::ui) fn draw_input(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let (border_color, subtitle) = if self.game.is_over() {
            (Color::DarkGray, "")
        } else {
            match self.input_status() {
                InputStatus::Incomplete => (Color::Gray, ""),
                InputStatus::Valid => (Color::Green, ""),
                InputStatus::Invalid(msg) => (Color::Red, msg),
            }
        };

        let (text, help_text) = if self.game.is_over() {
            (
                String::new(),
                "Enter / Ctrl+R = play again | Tab = difficulty | Ctrl+Q = quit",
            )
        } else {
            (
                format!("{}▌", self.input),
                "Enter = submit | Tab = difficulty | Ctrl+Q = quit",
            )
        };

        f.render_widget(
            Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(format!("Your guess {} | {}", subtitle, help_text)),
            ),
            area,
        );
    }
}
