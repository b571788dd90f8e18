//! InMemoryRepository - RwLock-guarded character map

use super::{CharacterRepository, StoreError};
use crate::character::{Character, CharacterId};
use crate::error::SheetError;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// Characters keyed by id plus the next id to hand out
#[derive(Debug, Clone, Default)]
pub(crate) struct Roster {
    characters: BTreeMap<CharacterId, Character>,
    next_id: u32,
}

impl Roster {
    /// Build from already-stored characters. Characters without an id
    /// (id 0) get one assigned.
    pub(crate) fn from_characters(characters: Vec<Character>) -> Result<Self, StoreError> {
        let mut roster = Roster {
            characters: BTreeMap::new(),
            next_id: characters.iter().map(|c| c.id.0).max().unwrap_or(0),
        };

        for character in characters {
            if character.id.0 == 0 {
                roster.insert(character)?;
            } else {
                roster.characters.insert(character.id, character);
            }
        }
        Ok(roster)
    }

    pub(crate) fn list(&self) -> Vec<Character> {
        self.characters.values().cloned().collect()
    }

    pub(crate) fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.characters.len()
    }

    /// Store under the next id. Ids only count up, so once `u32::MAX` has
    /// been handed out the roster refuses new characters.
    pub(crate) fn insert(&mut self, mut character: Character) -> Result<CharacterId, StoreError> {
        let next = self
            .next_id
            .checked_add(1)
            .ok_or(StoreError::IdsExhausted(CharacterId(self.next_id)))?;
        self.next_id = next;
        let id = CharacterId(next);
        character.id = id;
        self.characters.insert(id, character);
        Ok(id)
    }

    /// Replace a stored character, returning the previous version
    pub(crate) fn replace(&mut self, character: Character) -> Result<Character, StoreError> {
        match self.characters.get_mut(&character.id) {
            Some(slot) => Ok(std::mem::replace(slot, character)),
            None => Err(StoreError::Missing(character.id)),
        }
    }

    /// Run `apply` against a stored character and store its result
    ///
    /// Returns the new character and the one it replaced.
    pub(crate) fn update(
        &mut self,
        id: CharacterId,
        apply: &mut dyn FnMut(&Character) -> Result<Character, SheetError>,
    ) -> Result<(Character, Character), SheetError> {
        let current = self.characters.get(&id).ok_or(SheetError::NotFound(id))?;
        let mut updated = apply(current)?;
        updated.id = id;
        let previous = self.replace(updated.clone())?;
        Ok((updated, previous))
    }
}

/// Volatile repository, lost on restart
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    roster: RwLock<Roster>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `characters`, assigning ids 1, 2, ...
    /// in order
    pub fn with_characters(characters: Vec<Character>) -> Self {
        let characters = characters
            .into_iter()
            .zip(1..=u32::MAX)
            .map(|(mut character, id)| {
                character.id = CharacterId(id);
                (character.id, character)
            })
            .collect::<BTreeMap<_, _>>();
        let next_id = characters.keys().next_back().map_or(0, |id| id.0);

        InMemoryRepository {
            roster: RwLock::new(Roster {
                characters,
                next_id,
            }),
        }
    }
}

impl CharacterRepository for InMemoryRepository {
    fn list(&self) -> Result<Vec<Character>, StoreError> {
        let roster = self.roster.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(roster.list())
    }

    fn get(&self, id: CharacterId) -> Result<Option<Character>, StoreError> {
        let roster = self.roster.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(roster.get(id).cloned())
    }

    fn insert(&self, character: Character) -> Result<CharacterId, StoreError> {
        let mut roster = self.roster.write().map_err(|_| StoreError::LockPoisoned)?;
        roster.insert(character)
    }

    fn save(&self, character: &Character) -> Result<(), StoreError> {
        let mut roster = self.roster.write().map_err(|_| StoreError::LockPoisoned)?;
        roster.replace(character.clone()).map(|_| ())
    }

    fn update(
        &self,
        id: CharacterId,
        apply: &mut dyn FnMut(&Character) -> Result<Character, SheetError>,
    ) -> Result<Character, SheetError> {
        let mut roster = self.roster.write().map_err(|_| StoreError::LockPoisoned)?;
        roster.update(id, apply).map(|(updated, _)| updated)
    }

    fn count(&self) -> Result<usize, StoreError> {
        let roster = self.roster.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(roster.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryRepository::new();
        let a = repo.insert(Character::new("A", 1, 10)).unwrap();
        let b = repo.insert(Character::new("B", 1, 20)).unwrap();

        assert_eq!(a, CharacterId(1));
        assert_eq!(b, CharacterId(2));
        assert_eq!(repo.get(b).unwrap().unwrap().name, "B");
        assert!(repo.get(CharacterId(3)).unwrap().is_none());
    }

    #[test]
    fn test_list_ordered_by_id() {
        let repo = InMemoryRepository::with_characters(vec![
            Character::new("Zed", 1, 1),
            Character::new("Amy", 1, 1),
        ]);
        let names: Vec<String> = repo.list().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
    }

    #[test]
    fn test_save_requires_existing() {
        let repo = InMemoryRepository::new();
        let mut character = Character::new("Ghost", 1, 1);
        character.id = CharacterId(9);
        assert!(matches!(repo.save(&character), Err(StoreError::Missing(CharacterId(9)))));
    }

    #[test]
    fn test_update_unknown_is_not_found() {
        let repo = InMemoryRepository::new();
        let result = repo.update(CharacterId(5), &mut |c| Ok(c.clone()));
        assert!(matches!(result, Err(SheetError::NotFound(CharacterId(5)))));
    }

    #[test]
    fn test_failed_update_stores_nothing() {
        let repo = InMemoryRepository::with_characters(vec![Character::new("A", 1, 10)]);

        let result = repo.update(CharacterId(1), &mut |_| {
            Err(SheetError::invalid_argument("nope"))
        });

        assert!(result.is_err());
        assert_eq!(repo.get(CharacterId(1)).unwrap().unwrap().hit_points, 10);
    }

    #[test]
    fn test_update_cannot_change_id() {
        let repo = InMemoryRepository::with_characters(vec![Character::new("A", 1, 10)]);

        let updated = repo
            .update(CharacterId(1), &mut |c| {
                let mut next = c.clone();
                next.id = CharacterId(77);
                next.hit_points = 4;
                Ok(next)
            })
            .unwrap();

        assert_eq!(updated.id, CharacterId(1));
        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.get(CharacterId(1)).unwrap().unwrap().hit_points, 4);
    }

    #[test]
    fn test_concurrent_updates_serialize() {
        let repo = Arc::new(InMemoryRepository::with_characters(vec![Character::new(
            "Tank", 1, 1000,
        )]));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let repo = Arc::clone(&repo);
                thread::spawn(move || {
                    for _ in 0..25 {
                        repo.update(CharacterId(1), &mut |c| {
                            let mut next = c.clone();
                            next.hit_points -= 1;
                            Ok(next)
                        })
                        .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(repo.get(CharacterId(1)).unwrap().unwrap().hit_points, 800);
    }

    #[test]
    fn test_roster_from_characters_keeps_ids() {
        let mut stored = Character::new("Stored", 1, 1);
        stored.id = CharacterId(7);
        let roster = Roster::from_characters(vec![stored, Character::new("Fresh", 1, 1)]).unwrap();

        assert_eq!(roster.get(CharacterId(7)).unwrap().name, "Stored");
        assert_eq!(roster.get(CharacterId(8)).unwrap().name, "Fresh");
    }

    #[test]
    fn test_insert_after_highest_id_is_error() {
        let mut last = Character::new("Last", 1, 1);
        last.id = CharacterId(u32::MAX);
        let mut roster = Roster::from_characters(vec![last]).unwrap();

        assert!(matches!(
            roster.insert(Character::new("Overflow", 1, 1)),
            Err(StoreError::IdsExhausted(CharacterId(u32::MAX)))
        ));
        assert_eq!(roster.len(), 1);

        let mut full = Character::new("Full", 1, 1);
        full.id = CharacterId(u32::MAX);
        assert!(Roster::from_characters(vec![full, Character::new("Fresh", 1, 1)]).is_err());
    }
}
