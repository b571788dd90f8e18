//! UI rendering

mod help_view;
mod log_view;
mod roster_view;
mod sheet_view;

use crate::app::{App, Tab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use sheet_core::DefenseKind;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    if app.show_help {
        help_view::draw(f, app, chunks[1]);
    } else {
        match app.current_tab {
            Tab::Roster => roster_view::draw(f, app, chunks[1]),
            Tab::Sheet => sheet_view::draw(f, app, chunks[1]),
            Tab::Log => log_view::draw(f, app, chunks[1]),
            Tab::Help => help_view::draw(f, app, chunks[1]),
        }
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("Tab", "Next tab"), ("?", "Help"), ("q", "Quit")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Roster | Tab::Sheet => vec![
            ("↑/↓", "Select"),
            ("←/→", "Damage type"),
            ("0-9/-", "Amount"),
            ("d", "Damage"),
            ("h", "Heal"),
            ("t", "Temp HP"),
        ],
        Tab::Log => vec![("↑/↓", "Scroll log")],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Character Sheets "),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

/// Bar of `width` cells: hit points, then temp hit points, scaled to `scale`
pub fn hp_bar(hit_points: u32, temp_hit_points: u32, scale: u64, width: u16) -> Line<'static> {
    let width = width as u64;
    let cells = |value: u32| {
        if scale == 0 {
            0
        } else {
            (value as u64 * width / scale) as usize
        }
    };

    let hp_cells = cells(hit_points).min(width as usize);
    let temp_cells = cells(temp_hit_points).min((width as usize).saturating_sub(hp_cells));
    let empty = (width as usize).saturating_sub(hp_cells + temp_cells);

    Line::from(vec![
        Span::styled("█".repeat(hp_cells), Style::default().fg(hp_color(hit_points))),
        Span::styled("▓".repeat(temp_cells), Style::default().fg(Color::Cyan)),
        Span::styled("░".repeat(empty), Style::default().fg(Color::DarkGray)),
    ])
}

pub fn hp_color(hit_points: u32) -> Color {
    if hit_points == 0 {
        Color::Red
    } else {
        Color::Green
    }
}

pub fn defense_color(kind: DefenseKind) -> Color {
    match kind {
        DefenseKind::Immunity => Color::Cyan,
        DefenseKind::Resistance => Color::Green,
        DefenseKind::Vulnerability => Color::Red,
    }
}

pub fn label_line(label: &str, value: String, value_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:16}", label), Style::default().fg(Color::Gray)),
        Span::styled(value, value_style),
    ])
}
