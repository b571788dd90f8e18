//! Roster list and action panel

use super::{defense_color, hp_bar, hp_color, label_line};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use sheet_core::DamageOutcome;

const BAR_WIDTH: u16 = 20;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(50),    // Roster
            Constraint::Length(44), // Action panel
        ])
        .split(area);

    draw_roster(f, app, chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(chunks[1]);

    draw_action_panel(f, app, right[0]);
    draw_last_outcome(f, app, right[1]);
}

fn draw_roster(f: &mut Frame, app: &App, area: Rect) {
    let scale = app.hp_scale();

    let items: Vec<ListItem> = app
        .characters
        .iter()
        .enumerate()
        .map(|(i, character)| {
            let selected = i == app.selected;
            let marker = if selected { "▶ " } else { "  " };
            let name_style = if selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let mut header = vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(format!("{:12}", character.name), name_style),
                Span::styled(
                    format!("Lv {:<3}", character.level),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:>5} HP", character.hit_points),
                    Style::default().fg(hp_color(character.hit_points)),
                ),
            ];
            if character.temp_hit_points > 0 {
                header.push(Span::styled(
                    format!(" +{} temp", character.temp_hit_points),
                    Style::default().fg(Color::Cyan),
                ));
            }
            if character.is_down() {
                header.push(Span::styled(
                    " DOWN",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ));
            }

            let mut bar = hp_bar(
                character.hit_points,
                character.temp_hit_points,
                scale,
                BAR_WIDTH,
            );
            bar.spans.insert(0, Span::raw("    "));

            ListItem::new(vec![Line::from(header), bar])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Roster ({}) ", app.characters.len())),
    );
    f.render_widget(list, area);
}

fn draw_action_panel(f: &mut Frame, app: &App, area: Rect) {
    let target = app
        .selected_character()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "-".to_string());

    let damage_type = app.selected_damage_type();
    let defense = app
        .selected_character()
        .and_then(|c| c.defense_table().get(damage_type));

    let mut type_spans = vec![
        Span::styled(format!("{:16}", "Damage type"), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("◀ {} ▶", damage_type),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(kind) = defense {
        type_spans.push(Span::styled(
            format!(" ({})", kind),
            Style::default().fg(defense_color(kind)),
        ));
    }

    let mut lines = vec![
        label_line("Target", target, Style::default().fg(Color::White)),
        Line::from(type_spans),
        label_line(
            "Amount",
            app.amount_display(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];

    if let Some(status) = &app.status {
        let style = if status.is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        lines.push(Line::from(Span::styled(status.text.clone(), style)));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Action "));
    f.render_widget(paragraph, area);
}

fn draw_last_outcome(f: &mut Frame, app: &App, area: Rect) {
    let lines = match &app.last_outcome {
        Some(outcome) => outcome_lines(outcome),
        None => vec![Line::from(Span::styled(
            "No damage dealt yet",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Last Hit "));
    f.render_widget(paragraph, area);
}

fn outcome_lines(outcome: &DamageOutcome) -> Vec<Line<'static>> {
    let value = Style::default().fg(Color::White);
    let defense = match outcome.applied_defense {
        Some(kind) => Span::styled(kind.name(), Style::default().fg(defense_color(kind))),
        None => Span::styled("none", Style::default().fg(Color::DarkGray)),
    };

    let mut lines = vec![
        label_line(
            "Incoming",
            format!("{} {}", outcome.raw_amount, outcome.damage_type),
            value,
        ),
        Line::from(vec![
            Span::styled(format!("{:16}", "Defense"), Style::default().fg(Color::Gray)),
            defense,
        ]),
        label_line("Effective", outcome.effective_damage.to_string(), value),
        label_line(
            "Temp absorbed",
            outcome.absorbed_by_temp.to_string(),
            Style::default().fg(Color::Cyan),
        ),
        label_line(
            "HP lost",
            outcome.hit_points_lost.to_string(),
            Style::default().fg(Color::Red),
        ),
        label_line(
            "HP",
            format!("{} -> {}", outcome.before.hit_points, outcome.after.hit_points),
            value,
        ),
    ];

    if outcome.overkill() > 0 {
        lines.push(label_line(
            "Overkill",
            outcome.overkill().to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if outcome.dropped_to_zero {
        lines.push(Line::from(Span::styled(
            "DOWN",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }
    lines
}
