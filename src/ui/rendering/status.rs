use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    difficulty::Difficulty,
    game::GameStatus,
    ui::{app::App, types::NoticeLevel},
};

use super::difficulty_color;

impl App {
    pub(in crate::ui) fn draw_difficulty(&self, f: &mut Frame, area: Rect) {
        let current = self.game.difficulty();

        let spans: Vec<Span> = Difficulty::ALL
            .into_iter()
            .flat_map(|d| {
                let style = if d == current {
                    Style::default()
                        .bg(difficulty_color(d))
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(difficulty_color(d))
                };
                [Span::styled(format!(" {} ", d.label()), style), Span::raw("  ")]
            })
            .collect();

        f.render_widget(
            Paragraph::new(Line::from(spans)).centered().block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("NUMBER GUESSING GAME | Tab: change difficulty"),
            ),
            area,
        );
    }

    pub(in crate::ui) fn draw_game_status(&self, f: &mut Frame, area: Rect) {
        let difficulty = self.game.difficulty();

        let (status_text, color) = match (self.game.status(), self.game.history().last()) {
            (GameStatus::Won { .. }, Some(last)) => (last.outcome.hint().to_string(), Color::Green),
            (GameStatus::Lost { secret }, _) => {
                (format!("Game Over! The number was {}.", secret), Color::Red)
            }
            (_, Some(last)) => (last.outcome.hint().to_string(), Color::Yellow),
            (_, None) => (
                format!(
                    "Guess a number between {} and {}!",
                    difficulty.min(),
                    difficulty.max()
                ),
                Color::White,
            ),
        };

        let lines = vec![
            Line::from(Span::styled(
                status_text,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Attempts left: {}", self.game.attempts_remaining())),
        ];

        f.render_widget(
            Paragraph::new(lines)
                .centered()
                .block(Block::default().borders(Borders::ALL).title("Game Status")),
            area,
        );
    }

    pub(in crate::ui) fn draw_notice(&self, f: &mut Frame, area: Rect) {
        let (text, color) = match &self.notice {
            Some(notice) => (
                notice.text.as_str(),
                match notice.level {
                    NoticeLevel::Info => Color::Cyan,
                    NoticeLevel::Warning => Color::Yellow,
                    NoticeLevel::Error => Color::Red,
                },
            ),
            None => ("", Color::White),
        };

        f.render_widget(
            Paragraph::new(text)
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title("Messages")),
            area,
        );
    }
}
