//! Help tab view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        section("═══ Navigation ═══"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑ ↓", "Select character / scroll log"),
        key_line("r", "Reload roster"),
        key_line("?", "Toggle help"),
        key_line("q / Ctrl+C", "Quit"),
        Line::from(""),
        section("═══ Actions ═══"),
        key_line("0-9  Backspace", "Edit amount"),
        key_line("-", "Toggle sign"),
        key_line("← →", "Cycle damage type"),
        key_line("d / Enter", "Deal damage to selected character"),
        key_line("h", "Heal selected character"),
        key_line("t", "Grant temporary hit points"),
        Line::from(""),
        section("═══ Rules ═══"),
        Line::from(""),
        Line::from(Span::styled("Defenses:", Style::default().fg(Color::Yellow))),
        Line::from("  Immunity: no damage"),
        Line::from("  Resistance: damage halved, rounded down"),
        Line::from("  Vulnerability: damage doubled"),
        Line::from("  Immunity beats vulnerability beats resistance"),
        Line::from(""),
        Line::from(Span::styled(
            "Temporary hit points:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Absorb damage before hit points"),
        Line::from("  Do not stack: the larger pool is kept"),
        Line::from(""),
        Line::from(Span::styled("Hit points:", Style::default().fg(Color::Yellow))),
        Line::from("  Never drop below 0"),
        Line::from("  Healing has no maximum"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help "));

    f.render_widget(paragraph, area);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
