//! Stats - The six ability scores

use crate::types::StatType;
use serde::{Deserialize, Serialize};

/// Ability scores for a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub strength: u32,
    pub dexterity: u32,
    pub constitution: u32,
    pub intelligence: u32,
    pub wisdom: u32,
    pub charisma: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Stats {
            strength: 10,
            dexterity: 10,
            constitution: 10,
            intelligence: 10,
            wisdom: 10,
            charisma: 10,
        }
    }
}

impl Stats {
    /// Get a score by stat type
    pub fn get(&self, stat: StatType) -> u32 {
        match stat {
            StatType::Strength => self.strength,
            StatType::Dexterity => self.dexterity,
            StatType::Constitution => self.constitution,
            StatType::Intelligence => self.intelligence,
            StatType::Wisdom => self.wisdom,
            StatType::Charisma => self.charisma,
        }
    }

    /// Scores paired with their stat type, in sheet order
    pub fn entries(&self) -> Vec<(StatType, u32)> {
        StatType::all().iter().map(|s| (*s, self.get(*s))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_type() {
        let stats = Stats {
            strength: 16,
            dexterity: 14,
            constitution: 15,
            intelligence: 10,
            wisdom: 12,
            charisma: 8,
        };
        assert_eq!(stats.get(StatType::Constitution), 15);
        assert_eq!(stats.get(StatType::Charisma), 8);
        assert_eq!(stats.entries()[0], (StatType::Strength, 16));
    }

    #[test]
    fn test_default_scores() {
        let stats = Stats::default();
        assert!(stats.entries().iter().all(|(_, v)| *v == 10));
    }
}
