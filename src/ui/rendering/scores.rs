//! High-score panel rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{difficulty::Difficulty, ui::app::App};

use super::difficulty_color;

impl App {
    pub(in crate::ui) fn draw_high_scores(&self, f: &mut Frame, area: Rect) {
        let table = self.scoreboard.table();

        let lines: Vec<Line> = Difficulty::ALL
            .into_iter()
            .map(|d| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<8}", d.name()),
                        Style::default()
                            .fg(difficulty_color(d))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(table.display(d)),
                ])
            })
            .collect();

        f.render_widget(
            Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title("🏆 High Scores")),
            area,
        );
    }
}
