//! Property tests for the hit point engine

use proptest::prelude::*;
use sheet_core::{
    apply_heal, apply_temporary_hp, resolve_damage, Character, DamageType, DefenseKind,
};

fn damage_type() -> impl Strategy<Value = DamageType> {
    proptest::sample::select(DamageType::all().to_vec())
}

fn defense_kind() -> impl Strategy<Value = DefenseKind> {
    prop_oneof![
        Just(DefenseKind::Immunity),
        Just(DefenseKind::Resistance),
        Just(DefenseKind::Vulnerability),
    ]
}

fn target(hit_points: u32, temp_hit_points: u32) -> Character {
    Character::new("Target", 1, hit_points).with_temp_hit_points(temp_hit_points)
}

proptest! {
    #[test]
    fn immunity_never_changes_hit_points(
        hp in 0u32..10_000,
        temp in 0u32..10_000,
        amount in 1u32..1_000_000,
        dtype in damage_type(),
    ) {
        let character = target(hp, temp).with_defense(dtype, DefenseKind::Immunity);
        let (next, outcome) = resolve_damage(&character, amount, dtype).unwrap();

        prop_assert_eq!(next.hit_point_state(), character.hit_point_state());
        prop_assert_eq!(outcome.effective_damage, 0);
    }

    #[test]
    fn vulnerability_doubles(amount in 1u32..=u32::MAX / 2, dtype in damage_type()) {
        let character = target(0, 0).with_defense(dtype, DefenseKind::Vulnerability);
        let (_, outcome) = resolve_damage(&character, amount, dtype).unwrap();
        prop_assert_eq!(outcome.effective_damage, amount * 2);
    }

    #[test]
    fn vulnerability_overflow_is_an_error(amount in (u32::MAX / 2 + 1)..=u32::MAX) {
        let character = target(10, 0).with_defense(DamageType::Force, DefenseKind::Vulnerability);
        prop_assert!(resolve_damage(&character, amount, DamageType::Force).is_err());
    }

    #[test]
    fn resistance_halves_rounding_down(amount in 1u32..=u32::MAX, dtype in damage_type()) {
        let character = target(0, 0).with_defense(dtype, DefenseKind::Resistance);
        let (_, outcome) = resolve_damage(&character, amount, dtype).unwrap();
        prop_assert_eq!(outcome.effective_damage, amount / 2);
    }

    #[test]
    fn temp_absorbs_first_and_hit_points_floor_at_zero(
        hp in 0u32..100_000,
        temp in 0u32..100_000,
        amount in 1u32..300_000,
        dtype in damage_type(),
    ) {
        let character = target(hp, temp);
        let (next, outcome) = resolve_damage(&character, amount, dtype).unwrap();

        let expected_temp = temp.saturating_sub(amount);
        let remaining = amount - (temp - expected_temp);
        prop_assert_eq!(next.temp_hit_points, expected_temp);
        prop_assert_eq!(next.hit_points, hp.saturating_sub(remaining));
        prop_assert_eq!(outcome.absorbed_by_temp + outcome.hit_points_lost + outcome.overkill(), amount);
    }

    #[test]
    fn other_type_defenses_do_not_apply(
        hp in 0u32..10_000,
        amount in 1u32..10_000,
        kind in defense_kind(),
    ) {
        let character = target(hp, 0).with_defense(DamageType::Fire, kind);
        let (next, outcome) = resolve_damage(&character, amount, DamageType::Cold).unwrap();

        prop_assert_eq!(outcome.applied_defense, None);
        prop_assert_eq!(next.hit_points, hp.saturating_sub(amount));
    }

    #[test]
    fn immunity_wins_any_conflict(
        kinds in proptest::collection::vec(defense_kind(), 1..6),
        amount in 1u32..10_000,
    ) {
        let mut character = target(50, 0).with_defense(DamageType::Poison, DefenseKind::Immunity);
        for kind in kinds {
            character = character.with_defense(DamageType::Poison, kind);
        }
        let (next, _) = resolve_damage(&character, amount, DamageType::Poison).unwrap();
        prop_assert_eq!(next.hit_points, 50);
    }

    #[test]
    fn heal_is_additive(hp in 0u32..1_000_000, amount in 1u32..1_000_000) {
        let healed = apply_heal(&target(hp, 0), amount).unwrap();
        prop_assert_eq!(healed.hit_points, hp + amount);
    }

    #[test]
    fn temp_hp_keeps_the_higher_value(current in 0u32..10_000, granted in 0u32..10_000) {
        let next = apply_temporary_hp(&target(10, current), granted);
        prop_assert_eq!(next.temp_hit_points, current.max(granted));
        prop_assert!(next.temp_hit_points >= current);
    }
}
