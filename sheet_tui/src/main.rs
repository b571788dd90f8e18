//! sheet_tui - Terminal client for the character sheet service
//!
//! Usage: `sheet_tui [roster.toml]`

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sheet_tui::{ui, App};
use std::io;
use std::path::PathBuf;

fn main() -> io::Result<()> {
    // Load before touching the terminal so errors print normally
    let app = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => App::from_roster_file(&path),
        None => App::new(),
    };
    let mut app = app.map_err(io::Error::other)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Ok(()),
            (KeyCode::Tab, _) => app.next_tab(),
            (KeyCode::BackTab, _) => app.prev_tab(),
            (KeyCode::Up, _) => app.on_up(),
            (KeyCode::Down, _) => app.on_down(),
            (KeyCode::Left, _) => app.on_left(),
            (KeyCode::Right, _) => app.on_right(),
            (KeyCode::Char(c), _) if c.is_ascii_digit() => app.push_digit(c),
            (KeyCode::Char('-'), _) => app.toggle_sign(),
            (KeyCode::Backspace, _) => app.pop_digit(),
            (KeyCode::Char('d'), _) | (KeyCode::Enter, _) => app.deal_damage(),
            (KeyCode::Char('h'), _) => app.heal(),
            (KeyCode::Char('t'), _) => app.grant_temp_hp(),
            (KeyCode::Char('r'), _) => app.refresh(),
            (KeyCode::Char('?'), _) => app.toggle_help(),
            _ => {}
        }
    }
}
