//! DamageOutcome - Breakdown of a resolved damage event

use crate::character::HitPointState;
use crate::types::{DamageType, DefenseKind};
use serde::{Deserialize, Serialize};

/// Result of applying one damage event to a character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageOutcome {
    // === Incoming ===
    pub raw_amount: u32,
    pub damage_type: DamageType,

    // === Mitigation ===
    /// Defense that matched the damage type, if any
    pub applied_defense: Option<DefenseKind>,
    /// Damage after the defense transform
    pub effective_damage: u32,
    /// Damage soaked by temporary hit points
    pub absorbed_by_temp: u32,
    /// Hit points actually removed (never more than the target had)
    pub hit_points_lost: u32,

    // === State Changes ===
    pub before: HitPointState,
    pub after: HitPointState,

    // === Flags ===
    /// Hit points went from above 0 to 0 on this event
    pub dropped_to_zero: bool,
}

impl DamageOutcome {
    /// Create an outcome with no damage applied yet
    pub fn new(raw_amount: u32, damage_type: DamageType, before: HitPointState) -> Self {
        DamageOutcome {
            raw_amount,
            damage_type,
            applied_defense: None,
            effective_damage: 0,
            absorbed_by_temp: 0,
            hit_points_lost: 0,
            before,
            after: before,
            dropped_to_zero: false,
        }
    }

    /// Damage removed by the defense transform (0 for vulnerability)
    pub fn total_prevented(&self) -> u32 {
        self.raw_amount.saturating_sub(self.effective_damage)
    }

    /// Effective damage that had nothing left to remove
    pub fn overkill(&self) -> u32 {
        self.effective_damage
            .saturating_sub(self.absorbed_by_temp)
            .saturating_sub(self.hit_points_lost)
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("{} {} damage", self.raw_amount, self.damage_type)];

        match self.applied_defense {
            Some(DefenseKind::Immunity) => parts.push("immune".to_string()),
            Some(kind) => parts.push(format!(
                "{} -> {}",
                kind.name().to_lowercase(),
                self.effective_damage
            )),
            None => {}
        }

        if self.absorbed_by_temp > 0 {
            parts.push(format!("{} absorbed by temp HP", self.absorbed_by_temp));
        }

        if self.hit_points_lost > 0 {
            parts.push(format!("{} HP lost", self.hit_points_lost));
        }

        if self.dropped_to_zero {
            parts.push("DOWN".to_string());
        }

        parts.join(", ")
    }
}
