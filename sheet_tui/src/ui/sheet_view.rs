//! Character sheet view

use super::{defense_color, hp_bar, label_line};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use sheet_core::Character;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(character) = app.selected_character() else {
        let empty = Paragraph::new("No characters loaded")
            .block(Block::default().borders(Borders::ALL).title(" Sheet "));
        f.render_widget(empty, area);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(columns[0]);

    draw_overview(f, character, app.hp_scale(), left[0]);
    draw_stats(f, character, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);

    draw_defenses(f, character, right[0]);
    draw_items(f, character, right[1]);
}

fn draw_overview(f: &mut Frame, character: &Character, scale: u64, area: Rect) {
    let width = area.width.saturating_sub(4);
    let lines = vec![
        label_line(
            "Level",
            character.level.to_string(),
            Style::default().fg(Color::White),
        ),
        label_line(
            "Classes",
            character.class_summary(),
            Style::default().fg(Color::White),
        ),
        label_line(
            "Hit points",
            format!(
                "{} (+{} temp)",
                character.hit_points, character.temp_hit_points
            ),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        hp_bar(
            character.hit_points,
            character.temp_hit_points,
            scale,
            width,
        ),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", character.name)),
    );
    f.render_widget(paragraph, area);
}

fn draw_stats(f: &mut Frame, character: &Character, area: Rect) {
    let mut lines: Vec<Line> = match &character.stats {
        Some(stats) => stats
            .entries()
            .into_iter()
            .map(|(stat, score)| {
                label_line(
                    stat.name(),
                    format!("{:>2}  ({})", score, stat.short_name()),
                    Style::default().fg(Color::White),
                )
            })
            .collect(),
        None => vec![Line::from(Span::styled(
            "No ability scores recorded",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    if !character.classes.is_empty() {
        lines.push(Line::from(""));
        for class in &character.classes {
            lines.push(label_line(
                &class.name,
                format!("level {}, d{}", class.class_level, class.hit_dice_value),
                Style::default().fg(Color::Gray),
            ));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Stats "));
    f.render_widget(paragraph, area);
}

fn draw_defenses(f: &mut Frame, character: &Character, area: Rect) {
    let table = character.defense_table();
    let lines: Vec<Line> = if table.is_empty() {
        vec![Line::from(Span::styled(
            "No defenses",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        table
            .sorted_entries()
            .into_iter()
            .map(|(damage_type, kind)| {
                label_line(
                    damage_type.name(),
                    kind.name().to_string(),
                    Style::default().fg(defense_color(kind)),
                )
            })
            .collect()
    };

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Defenses "));
    f.render_widget(paragraph, area);
}

fn draw_items(f: &mut Frame, character: &Character, area: Rect) {
    let lines: Vec<Line> = if character.items.is_empty() {
        vec![Line::from(Span::styled(
            "No items",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        character
            .items
            .iter()
            .map(|item| {
                let mut spans = vec![Span::styled(
                    item.name.clone(),
                    Style::default().fg(Color::White),
                )];
                if let Some(modifier) = &item.modifier {
                    spans.push(Span::styled(
                        format!("  {}", modifier.describe()),
                        Style::default().fg(Color::Magenta),
                    ));
                }
                Line::from(spans)
            })
            .collect()
    };

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Items "));
    f.render_widget(paragraph, area);
}
