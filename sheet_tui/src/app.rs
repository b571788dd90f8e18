//! Application state

use sheet_core::config::load_roster;
use sheet_core::{
    default_roster, Character, CharacterId, CharacterService, ConfigError, DamageOutcome, DamageRequest,
    DamageType, HealRequest, InMemoryRepository, SheetError, TempHpRequest,
};
use std::path::Path;
use std::sync::Arc;

/// Oldest entries are dropped past this size
pub const MAX_LOG_ENTRIES: usize = 200;

/// Longest amount the input field accepts; keeps the value inside `i64`
const MAX_INPUT_DIGITS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Roster,
    Sheet,
    Log,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Roster, Tab::Sheet, Tab::Log, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Roster => "Roster",
            Tab::Sheet => "Sheet",
            Tab::Log => "Log",
            Tab::Help => "Help",
        }
    }
}

/// Hit point action driven from the roster panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Damage,
    Heal,
    TempHp,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Damage => "Damage",
            Action::Heal => "Heal",
            Action::TempHp => "Temp HP",
        }
    }
}

/// One line of the action log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub character: String,
    pub action: Action,
    pub message: String,
    pub is_error: bool,
}

/// Message shown under the amount field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

pub struct App {
    pub current_tab: Tab,
    pub service: CharacterService,
    pub characters: Vec<Character>,
    pub selected: usize,
    // Action panel
    pub damage_type_index: usize,
    pub amount_input: String,
    pub negative: bool,
    pub status: Option<StatusMessage>,
    pub last_outcome: Option<DamageOutcome>,
    // Log
    pub action_log: Vec<LogEntry>,
    pub log_scroll: usize,
    pub show_help: bool,
}

impl App {
    /// App over the bundled roster
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self::with_roster(default_roster()?))
    }

    /// App over a roster loaded from a TOML file
    pub fn from_roster_file(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::with_roster(load_roster(path)?))
    }

    pub fn with_roster(roster: Vec<Character>) -> Self {
        let repository = Arc::new(InMemoryRepository::with_characters(roster));
        Self::with_service(CharacterService::new(repository))
    }

    pub fn with_service(service: CharacterService) -> Self {
        let mut app = App {
            current_tab: Tab::Roster,
            service,
            characters: Vec::new(),
            selected: 0,
            damage_type_index: 0,
            amount_input: String::new(),
            negative: false,
            status: None,
            last_outcome: None,
            action_log: Vec::new(),
            log_scroll: 0,
            show_help: false,
        };
        app.refresh();
        app
    }

    /// Reload the roster from the service, keeping the selection in range
    pub fn refresh(&mut self) {
        match self.service.list() {
            Ok(characters) => {
                self.characters = characters;
                if self.selected >= self.characters.len() {
                    self.selected = self.characters.len().saturating_sub(1);
                }
            }
            Err(e) => self.set_status(e.to_string(), true),
        }
    }

    pub fn selected_character(&self) -> Option<&Character> {
        self.characters.get(self.selected)
    }

    pub fn selected_damage_type(&self) -> DamageType {
        let types = DamageType::all();
        types[self.damage_type_index % types.len()]
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(current_idx + 1) % tabs.len()];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Log => self.log_scroll = self.log_scroll.saturating_sub(1),
            _ => self.selected = self.selected.saturating_sub(1),
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Log => {
                if self.log_scroll + 1 < self.action_log.len() {
                    self.log_scroll += 1;
                }
            }
            _ => {
                if self.selected + 1 < self.characters.len() {
                    self.selected += 1;
                }
            }
        }
    }

    /// Previous damage type, wrapping around
    pub fn on_left(&mut self) {
        let count = DamageType::all().len();
        self.damage_type_index = (self.damage_type_index + count - 1) % count;
    }

    /// Next damage type, wrapping around
    pub fn on_right(&mut self) {
        self.damage_type_index = (self.damage_type_index + 1) % DamageType::all().len();
    }

    // =========================================================================
    // Amount input
    // =========================================================================

    pub fn push_digit(&mut self, digit: char) {
        if digit.is_ascii_digit() && self.amount_input.len() < MAX_INPUT_DIGITS {
            self.amount_input.push(digit);
        }
    }

    pub fn pop_digit(&mut self) {
        if self.amount_input.pop().is_none() {
            self.negative = false;
        }
    }

    pub fn toggle_sign(&mut self) {
        self.negative = !self.negative;
    }

    /// Amount as typed; an empty field reads as 0
    pub fn amount(&self) -> i64 {
        let magnitude: i64 = self.amount_input.parse().unwrap_or(0);
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    pub fn amount_display(&self) -> String {
        let digits = if self.amount_input.is_empty() {
            "0"
        } else {
            self.amount_input.as_str()
        };
        if self.negative {
            format!("-{digits}")
        } else {
            digits.to_string()
        }
    }

    fn clear_amount(&mut self) {
        self.amount_input.clear();
        self.negative = false;
    }

    // =========================================================================
    // Hit point actions
    // =========================================================================

    pub fn deal_damage(&mut self) {
        let request = DamageRequest::new(self.amount(), self.selected_damage_type());
        let service = self.service.clone();
        self.run_action(Action::Damage, |id| {
            let (character, outcome) = service.deal_damage(id, &request)?;
            let message = outcome.summary();
            Ok((character, message, Some(outcome)))
        });
    }

    pub fn heal(&mut self) {
        let request = HealRequest::new(self.amount());
        let service = self.service.clone();
        self.run_action(Action::Heal, |id| {
            let character = service.heal(id, &request)?;
            let message = format!(
                "healed {} -> {} HP",
                request.amount, character.hit_points
            );
            Ok((character, message, None))
        });
    }

    pub fn grant_temp_hp(&mut self) {
        let request = TempHpRequest::new(self.amount());
        let service = self.service.clone();
        self.run_action(Action::TempHp, |id| {
            let character = service.set_temp_hp(id, &request)?;
            let message = format!(
                "granted {} temp HP -> {} temp HP",
                request.amount, character.temp_hit_points
            );
            Ok((character, message, None))
        });
    }

    fn run_action(
        &mut self,
        action: Action,
        perform: impl FnOnce(CharacterId) -> Result<(Character, String, Option<DamageOutcome>), SheetError>,
    ) {
        let Some(current) = self.selected_character() else {
            self.set_status("No character selected".to_string(), true);
            return;
        };
        let id = current.id;
        let name = current.name.clone();
        tracing::debug!(character_id = %id, action = action.name(), amount = self.amount(), "running action");

        match perform(id) {
            Ok((character, message, outcome)) => {
                if let Some(slot) = self.characters.get_mut(self.selected) {
                    *slot = character;
                }
                if outcome.is_some() {
                    self.last_outcome = outcome;
                }
                self.clear_amount();
                self.push_log(&name, action, message.clone(), false);
                self.set_status(message, false);
            }
            Err(e) => {
                let message = e.to_string();
                self.push_log(&name, action, message.clone(), true);
                self.set_status(message, true);
            }
        }
    }

    fn push_log(&mut self, character: &str, action: Action, message: String, is_error: bool) {
        self.action_log.push(LogEntry {
            character: character.to_string(),
            action,
            message,
            is_error,
        });
        if self.action_log.len() > MAX_LOG_ENTRIES {
            let excess = self.action_log.len() - MAX_LOG_ENTRIES;
            self.action_log.drain(..excess);
        }
    }

    fn set_status(&mut self, text: String, is_error: bool) {
        self.status = Some(StatusMessage { text, is_error });
    }

    /// Largest HP + temp HP on the roster, used to scale HP bars
    pub fn hp_scale(&self) -> u64 {
        self.characters
            .iter()
            .map(|c| c.hit_point_state().effective_total())
            .max()
            .unwrap_or(0)
    }
}
