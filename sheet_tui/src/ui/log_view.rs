//! Action log view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .action_log
        .iter()
        .skip(app.log_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|entry| {
            let style = if entry.is_error {
                Style::default().fg(Color::Red)
            } else if entry.message.contains("DOWN") {
                Style::default().fg(Color::Magenta)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:10}", entry.character),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!("{:8}", entry.action.name()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(entry.message.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Action Log ({}) ", app.action_log.len())),
    );
    f.render_widget(list, area);
}
