//! Character - The stored sheet for a player character

mod equipment;
mod stats;

pub use equipment::{CharacterClass, Item, ItemModifier};
pub use stats::Stats;

use crate::defense::{Defense, DefenseTable};
use crate::types::{DamageType, DefenseKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned to a character by the repository
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub u32);

impl From<u32> for CharacterId {
    fn from(id: u32) -> Self {
        CharacterId(id)
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The hit point portion of a character, the only state the engine writes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HitPointState {
    pub hit_points: u32,
    pub temp_hit_points: u32,
}

impl HitPointState {
    pub fn new(hit_points: u32, temp_hit_points: u32) -> Self {
        HitPointState {
            hit_points,
            temp_hit_points,
        }
    }

    /// Hit points plus temporary hit points
    pub fn effective_total(&self) -> u64 {
        self.hit_points as u64 + self.temp_hit_points as u64
    }
}

/// Complete character sheet
///
/// The engine reads `defenses` and writes `hit_points`/`temp_hit_points`;
/// everything else passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    // === Identity ===
    /// Assigned on insert; roster files leave it out
    #[serde(default)]
    pub id: CharacterId,
    pub name: String,
    #[serde(default)]
    pub level: u32,

    // === Hit Points ===
    /// Current hit points. No maximum is tracked, so healing may exceed
    /// any notional cap.
    pub hit_points: u32,
    /// Temporary hit points (not additive, absorbs damage first)
    #[serde(default)]
    pub temp_hit_points: u32,

    // === Sheet ===
    #[serde(default)]
    pub stats: Option<Stats>,
    #[serde(default)]
    pub classes: Vec<CharacterClass>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub defenses: Vec<Defense>,
}

impl Character {
    /// Create a bare character with no sheet details
    pub fn new(name: impl Into<String>, level: u32, hit_points: u32) -> Self {
        Character {
            id: CharacterId::default(),
            name: name.into(),
            level,
            hit_points,
            temp_hit_points: 0,
            stats: None,
            classes: Vec::new(),
            items: Vec::new(),
            defenses: Vec::new(),
        }
    }

    pub fn with_temp_hit_points(mut self, temp_hit_points: u32) -> Self {
        self.temp_hit_points = temp_hit_points;
        self
    }

    pub fn with_defense(mut self, damage_type: DamageType, kind: DefenseKind) -> Self {
        self.defenses.push(Defense::new(damage_type, kind));
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_class(mut self, class: CharacterClass) -> Self {
        self.classes.push(class);
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Current hit point state
    pub fn hit_point_state(&self) -> HitPointState {
        HitPointState::new(self.hit_points, self.temp_hit_points)
    }

    /// Overwrite hit point state, leaving the rest of the sheet alone
    pub fn set_hit_point_state(&mut self, state: HitPointState) {
        self.hit_points = state.hit_points;
        self.temp_hit_points = state.temp_hit_points;
    }

    /// Build the lookup table for this character's defenses
    pub fn defense_table(&self) -> DefenseTable {
        DefenseTable::from_defenses(&self.defenses)
    }

    /// Check if the character is at 0 hit points
    pub fn is_down(&self) -> bool {
        self.hit_points == 0
    }

    /// Sum of class levels across all classes
    pub fn total_class_levels(&self) -> u32 {
        self.classes.iter().map(|c| c.class_level).sum()
    }

    /// Short class summary, e.g. "Fighter 5 / Rogue 2"
    pub fn class_summary(&self) -> String {
        if self.classes.is_empty() {
            return "Unclassed".to_string();
        }
        self.classes
            .iter()
            .map(|c| format!("{} {}", c.name, c.class_level))
            .collect::<Vec<_>>()
            .join(" / ")
    }
}
