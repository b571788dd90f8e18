//! CharacterService - Validate, load, resolve and save
//!
//! Every mutating operation validates its request first, then runs the
//! engine inside [`CharacterRepository::update`] so the read-modify-write
//! happens under the repository's lock.

use crate::character::{Character, CharacterId};
use crate::combat::{apply_heal, apply_temporary_hp, resolve_damage, DamageOutcome};
use crate::error::SheetError;
use crate::request::{DamageRequest, HealRequest, TempHpRequest};
use crate::store::CharacterRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct CharacterService {
    repository: Arc<dyn CharacterRepository>,
}

impl CharacterService {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        CharacterService { repository }
    }

    pub fn repository(&self) -> &Arc<dyn CharacterRepository> {
        &self.repository
    }

    pub fn list(&self) -> Result<Vec<Character>, SheetError> {
        Ok(self.repository.list()?)
    }

    pub fn get(&self, id: CharacterId) -> Result<Character, SheetError> {
        self.repository.get(id)?.ok_or(SheetError::NotFound(id))
    }

    /// Deal damage and return the updated character with its breakdown
    pub fn deal_damage(
        &self,
        id: CharacterId,
        request: &DamageRequest,
    ) -> Result<(Character, DamageOutcome), SheetError> {
        let amount = request.validate().inspect_err(|e| {
            tracing::warn!(character_id = %id, amount = request.amount, error = %e, "rejected damage request");
        })?;

        let mut outcome = None;
        let updated = self.repository.update(id, &mut |current| {
            let (next, result) = resolve_damage(current, amount, request.damage_type)?;
            outcome = Some(result);
            Ok(next)
        })?;

        // update() only succeeds after the closure ran
        let outcome = outcome.ok_or(SheetError::NotFound(id))?;
        tracing::info!(
            character_id = %id,
            amount,
            damage_type = %request.damage_type,
            hit_points = updated.hit_points,
            temp_hit_points = updated.temp_hit_points,
            "{}",
            outcome.summary()
        );

        Ok((updated, outcome))
    }

    pub fn heal(&self, id: CharacterId, request: &HealRequest) -> Result<Character, SheetError> {
        let amount = request.validate().inspect_err(|e| {
            tracing::warn!(character_id = %id, amount = request.amount, error = %e, "rejected heal request");
        })?;

        let updated = self
            .repository
            .update(id, &mut |current| apply_heal(current, amount))?;

        tracing::info!(
            character_id = %id,
            amount,
            hit_points = updated.hit_points,
            "healed character"
        );
        Ok(updated)
    }

    pub fn set_temp_hp(
        &self,
        id: CharacterId,
        request: &TempHpRequest,
    ) -> Result<Character, SheetError> {
        let amount = request.validate().inspect_err(|e| {
            tracing::warn!(character_id = %id, amount = request.amount, error = %e, "rejected temp HP request");
        })?;

        let updated = self
            .repository
            .update(id, &mut |current| Ok(apply_temporary_hp(current, amount)))?;

        tracing::info!(
            character_id = %id,
            amount,
            temp_hit_points = updated.temp_hit_points,
            "granted temporary hit points"
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryRepository;
    use crate::types::{DamageType, DefenseKind};

    fn service_with(characters: Vec<Character>) -> CharacterService {
        CharacterService::new(Arc::new(InMemoryRepository::with_characters(characters)))
    }

    #[test]
    fn test_get_unknown_is_not_found() {
        let service = service_with(vec![]);
        assert!(matches!(
            service.get(CharacterId(3)),
            Err(SheetError::NotFound(CharacterId(3)))
        ));
    }

    #[test]
    fn test_deal_damage_persists() {
        let service = service_with(vec![Character::new("Eldric", 1, 11)
            .with_temp_hit_points(10)
            .with_defense(DamageType::Piercing, DefenseKind::Immunity)]);

        let (updated, outcome) = service
            .deal_damage(CharacterId(1), &DamageRequest::new(14, DamageType::Piercing))
            .unwrap();
        assert_eq!((updated.hit_points, updated.temp_hit_points), (11, 10));
        assert_eq!(outcome.applied_defense, Some(DefenseKind::Immunity));

        let (updated, _) = service
            .deal_damage(CharacterId(1), &DamageRequest::new(12, DamageType::Fire))
            .unwrap();
        assert_eq!((updated.hit_points, updated.temp_hit_points), (9, 0));
        assert_eq!(service.get(CharacterId(1)).unwrap(), updated);
    }

    #[test]
    fn test_validation_precedes_lookup() {
        let service = service_with(vec![]);
        let result = service.deal_damage(CharacterId(99), &DamageRequest::new(0, DamageType::Acid));
        assert!(matches!(result, Err(SheetError::InvalidArgument(_))));

        let result = service.heal(CharacterId(99), &HealRequest::new(5));
        assert!(matches!(result, Err(SheetError::NotFound(_))));
    }

    #[test]
    fn test_invalid_request_changes_nothing() {
        let service = service_with(vec![Character::new("Healee", 1, 5)]);

        assert!(service.heal(CharacterId(1), &HealRequest::new(-2)).is_err());
        assert!(service.set_temp_hp(CharacterId(1), &TempHpRequest::new(-1)).is_err());

        let unchanged = service.get(CharacterId(1)).unwrap();
        assert_eq!((unchanged.hit_points, unchanged.temp_hit_points), (5, 0));
    }

    #[test]
    fn test_heal_and_temp_hp() {
        let service = service_with(vec![Character::new("Tempster", 1, 30).with_temp_hit_points(3)]);

        let healed = service.heal(CharacterId(1), &HealRequest::new(10)).unwrap();
        assert_eq!(healed.hit_points, 40);

        let raised = service.set_temp_hp(CharacterId(1), &TempHpRequest::new(10)).unwrap();
        assert_eq!(raised.temp_hit_points, 10);

        let kept = service.set_temp_hp(CharacterId(1), &TempHpRequest::new(2)).unwrap();
        assert_eq!(kept.temp_hit_points, 10);
    }

    #[test]
    fn test_overflow_surfaces_and_stores_nothing() {
        let service = service_with(vec![Character::new("Nyx", 5, 28)
            .with_defense(DamageType::Psychic, DefenseKind::Vulnerability)]);

        let result = service.deal_damage(
            CharacterId(1),
            &DamageRequest::new(u32::MAX as i64, DamageType::Psychic),
        );

        assert!(matches!(result, Err(SheetError::ArithmeticOverflow { .. })));
        assert_eq!(service.get(CharacterId(1)).unwrap().hit_points, 28);
    }
}
