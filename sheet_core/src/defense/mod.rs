//! Defense system - Immunity, Resistance, Vulnerability per damage type

mod transform;

pub use transform::effective_damage;

use crate::types::{DamageType, DefenseKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Defense calculation constants
pub mod constants {
    /// Resistance divides incoming damage (truncating)
    pub const RESISTANCE_DIVISOR: u32 = 2;

    /// Vulnerability multiplies incoming damage
    pub const VULNERABILITY_MULTIPLIER: u32 = 2;
}

/// A single defense entry on a character sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Defense {
    #[serde(rename = "type")]
    pub damage_type: DamageType,
    #[serde(rename = "defenseType")]
    pub kind: DefenseKind,
}

impl Defense {
    pub fn new(damage_type: DamageType, kind: DefenseKind) -> Self {
        Defense { damage_type, kind }
    }
}

/// Damage type to defense kind lookup
///
/// Sheets may carry duplicate or conflicting entries for one damage type.
/// They collapse to a single kind by [`DefenseKind::precedence`], so
/// Immunity wins over Vulnerability and Vulnerability over Resistance
/// regardless of entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefenseTable {
    entries: HashMap<DamageType, DefenseKind>,
}

impl DefenseTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a list of defense entries into a table
    pub fn from_defenses(defenses: &[Defense]) -> Self {
        let mut table = DefenseTable::new();
        for defense in defenses {
            table.insert(defense.damage_type, defense.kind);
        }
        table
    }

    /// Record a defense, keeping the higher-precedence kind on conflict
    pub fn insert(&mut self, damage_type: DamageType, kind: DefenseKind) {
        self.entries
            .entry(damage_type)
            .and_modify(|existing| {
                if kind.precedence() > existing.precedence() {
                    *existing = kind;
                }
            })
            .or_insert(kind);
    }

    /// Defense kind that applies to a damage type, if any
    pub fn get(&self, damage_type: DamageType) -> Option<DefenseKind> {
        self.entries.get(&damage_type).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by damage type, for display
    pub fn sorted_entries(&self) -> Vec<(DamageType, DefenseKind)> {
        let mut entries: Vec<_> = self.entries.iter().map(|(t, k)| (*t, *k)).collect();
        entries.sort_by_key(|(t, _)| *t);
        entries
    }
}
