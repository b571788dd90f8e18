//! Core enums shared by the sheet model and the engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Damage type carried by an incoming damage event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DamageType {
    Bludgeoning,
    Piercing,
    Slashing,
    Fire,
    Cold,
    Acid,
    Thunder,
    Lightning,
    Poison,
    Radiant,
    Necrotic,
    Psychic,
    Force,
}

impl DamageType {
    /// Get all damage types
    pub fn all() -> &'static [DamageType] {
        &[
            DamageType::Bludgeoning,
            DamageType::Piercing,
            DamageType::Slashing,
            DamageType::Fire,
            DamageType::Cold,
            DamageType::Acid,
            DamageType::Thunder,
            DamageType::Lightning,
            DamageType::Poison,
            DamageType::Radiant,
            DamageType::Necrotic,
            DamageType::Psychic,
            DamageType::Force,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            DamageType::Bludgeoning => "Bludgeoning",
            DamageType::Piercing => "Piercing",
            DamageType::Slashing => "Slashing",
            DamageType::Fire => "Fire",
            DamageType::Cold => "Cold",
            DamageType::Acid => "Acid",
            DamageType::Thunder => "Thunder",
            DamageType::Lightning => "Lightning",
            DamageType::Poison => "Poison",
            DamageType::Radiant => "Radiant",
            DamageType::Necrotic => "Necrotic",
            DamageType::Psychic => "Psychic",
            DamageType::Force => "Force",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a character's defense alters damage of one type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefenseKind {
    /// No damage taken
    Immunity,
    /// Damage halved, rounded toward zero
    Resistance,
    /// Damage doubled
    Vulnerability,
}

impl DefenseKind {
    /// Rank used when several kinds are recorded for one damage type.
    ///
    /// Immunity beats Vulnerability, which beats Resistance.
    pub fn precedence(&self) -> u8 {
        match self {
            DefenseKind::Immunity => 2,
            DefenseKind::Vulnerability => 1,
            DefenseKind::Resistance => 0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DefenseKind::Immunity => "Immunity",
            DefenseKind::Resistance => "Resistance",
            DefenseKind::Vulnerability => "Vulnerability",
        }
    }
}

impl fmt::Display for DefenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ability score targeted by an item modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatType {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl StatType {
    /// Get all stat types in sheet order
    pub fn all() -> &'static [StatType] {
        &[
            StatType::Strength,
            StatType::Dexterity,
            StatType::Constitution,
            StatType::Intelligence,
            StatType::Wisdom,
            StatType::Charisma,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            StatType::Strength => "Strength",
            StatType::Dexterity => "Dexterity",
            StatType::Constitution => "Constitution",
            StatType::Intelligence => "Intelligence",
            StatType::Wisdom => "Wisdom",
            StatType::Charisma => "Charisma",
        }
    }

    /// Three letter abbreviation (STR, DEX, ...)
    pub fn short_name(&self) -> &'static str {
        match self {
            StatType::Strength => "STR",
            StatType::Dexterity => "DEX",
            StatType::Constitution => "CON",
            StatType::Intelligence => "INT",
            StatType::Wisdom => "WIS",
            StatType::Charisma => "CHA",
        }
    }
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
