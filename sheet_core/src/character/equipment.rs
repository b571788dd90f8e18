//! Classes and items carried on the sheet

use crate::types::StatType;
use serde::{Deserialize, Serialize};

/// Character class (fighter, wizard, etc.)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterClass {
    pub name: String,
    /// Hit die size (d6 = 6, d10 = 10)
    pub hit_dice_value: u32,
    pub class_level: u32,
}

impl CharacterClass {
    pub fn new(name: impl Into<String>, hit_dice_value: u32, class_level: u32) -> Self {
        CharacterClass {
            name: name.into(),
            hit_dice_value,
            class_level,
        }
    }
}

/// Item on the character sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub modifier: Option<ItemModifier>,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Item {
            name: name.into(),
            modifier: None,
        }
    }

    pub fn with_modifier(name: impl Into<String>, modifier: ItemModifier) -> Self {
        Item {
            name: name.into(),
            modifier: Some(modifier),
        }
    }
}

/// Bonus granted by an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemModifier {
    /// What the bonus applies to ("attack", "ac", "stats", ...)
    pub affected_object: String,
    pub affected_value: StatType,
    /// Can be negative for cursed items
    pub value: i32,
}

impl ItemModifier {
    pub fn new(affected_object: impl Into<String>, affected_value: StatType, value: i32) -> Self {
        ItemModifier {
            affected_object: affected_object.into(),
            affected_value,
            value,
        }
    }

    /// Signed display form, e.g. "+2 Constitution (stats)"
    pub fn describe(&self) -> String {
        format!(
            "{:+} {} ({})",
            self.value,
            self.affected_value.name(),
            self.affected_object
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_describe() {
        let modifier = ItemModifier::new("attack", StatType::Strength, 1);
        assert_eq!(modifier.describe(), "+1 Strength (attack)");

        let cursed = ItemModifier::new("ac", StatType::Dexterity, -2);
        assert_eq!(cursed.describe(), "-2 Dexterity (ac)");
    }

    #[test]
    fn test_item_without_modifier_parses() {
        let item: Item = serde_json::from_str(r#"{"name": "Rope"}"#).unwrap();
        assert_eq!(item, Item::new("Rope"));
    }
}
