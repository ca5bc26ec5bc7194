//! Log panel rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_logs(&self, f: &mut Frame, area: Rect) {
        let logs = self.logs.lines();

        let visible = (area.height as usize).saturating_sub(2);
        let start = logs.len().saturating_sub(visible);

        let items: Vec<ListItem> = logs[start..]
            .iter()
            .map(|l| ListItem::new(l.as_str()))
            .collect();

        f.render_widget(
            List::new(items)
                .style(Style::default().fg(Color::Gray))
                .block(Block::default().borders(Borders::ALL).title("Logs")),
            area,
        );
    }
}
