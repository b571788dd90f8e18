//! Damage resolution - Apply a damage event to a Character

use super::result::DamageOutcome;
use crate::character::Character;
use crate::defense::effective_damage;
use crate::error::SheetError;
use crate::types::DamageType;

/// Resolve a damage event against a character (immutable API)
///
/// Returns the new character state and the damage outcome. Steps:
/// 1. Look up the defense for the damage type
/// 2. Transform the amount (immunity, vulnerability, resistance)
/// 3. Temporary hit points absorb damage first
/// 4. Remaining damage comes off hit points, floored at 0
///
/// `amount` is expected to be positive; callers validate requests first.
pub fn resolve_damage(
    target: &Character,
    amount: u32,
    damage_type: DamageType,
) -> Result<(Character, DamageOutcome), SheetError> {
    let mut new_target = target.clone();
    let mut outcome = DamageOutcome::new(amount, damage_type, target.hit_point_state());

    // Step 1: Defense lookup
    let defense = target.defense_table().get(damage_type);
    outcome.applied_defense = defense;

    // Step 2: Transform
    let effective = effective_damage(amount, defense)?;
    outcome.effective_damage = effective;

    // Step 3: Temporary hit points absorb first
    let mut remaining = effective;
    if new_target.temp_hit_points > 0 && remaining > 0 {
        let absorbed = remaining.min(new_target.temp_hit_points);
        new_target.temp_hit_points -= absorbed;
        remaining -= absorbed;
        outcome.absorbed_by_temp = absorbed;
    }

    // Step 4: Remaining damage goes to hit points
    if remaining > 0 {
        let lost = remaining.min(new_target.hit_points);
        new_target.hit_points -= lost;
        outcome.hit_points_lost = lost;
    }

    outcome.after = new_target.hit_point_state();
    outcome.dropped_to_zero = outcome.before.hit_points > 0 && new_target.hit_points == 0;

    Ok((new_target, outcome))
}

/// Apply damage and keep only the new character state
pub fn apply_damage(
    target: &Character,
    amount: u32,
    damage_type: DamageType,
) -> Result<Character, SheetError> {
    resolve_damage(target, amount, damage_type).map(|(character, _)| character)
}

/// Heal a character. Additive and uncapped.
pub fn apply_heal(target: &Character, amount: u32) -> Result<Character, SheetError> {
    let mut new_target = target.clone();
    new_target.hit_points = target
        .hit_points
        .checked_add(amount)
        .ok_or(SheetError::ArithmeticOverflow {
            operation: "healing",
            amount,
        })?;
    Ok(new_target)
}

/// Grant temporary hit points
///
/// Temporary hit points are not additive: the higher of the current and the
/// granted value is kept.
pub fn apply_temporary_hp(target: &Character, amount: u32) -> Character {
    let mut new_target = target.clone();
    new_target.temp_hit_points = target.temp_hit_points.max(amount);
    new_target
}
