//! JsonFileRepository - Roster persisted as a JSON snapshot
//!
//! The whole roster is rewritten after every mutation: serialized to a
//! sibling temp file, then renamed over the data file.

use super::memory::Roster;
use super::{CharacterRepository, StoreError};
use crate::character::{Character, CharacterId};
use crate::error::SheetError;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Repository backed by a JSON file on disk
#[derive(Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
    roster: RwLock<Roster>,
}

impl JsonFileRepository {
    /// Open the data file, starting empty if it does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let characters: Vec<Character> = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            Vec::new()
        };

        tracing::debug!(
            path = %path.display(),
            count = characters.len(),
            "opened character data file"
        );

        Ok(JsonFileRepository {
            path,
            roster: RwLock::new(Roster::from_characters(characters)?),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, roster: &Roster) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&roster.list())?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl CharacterRepository for JsonFileRepository {
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
        let snapshot = roster.clone();
        let id = roster.insert(character)?;
        if let Err(e) = self.persist(&roster) {
            *roster = snapshot;
            return Err(e);
        }
        Ok(id)
    }

    fn save(&self, character: &Character) -> Result<(), StoreError> {
        let mut roster = self.roster.write().map_err(|_| StoreError::LockPoisoned)?;
        let previous = roster.replace(character.clone())?;
        if let Err(e) = self.persist(&roster) {
            roster.replace(previous)?;
            return Err(e);
        }
        Ok(())
    }

    fn update(
        &self,
        id: CharacterId,
        apply: &mut dyn FnMut(&Character) -> Result<Character, SheetError>,
    ) -> Result<Character, SheetError> {
        let mut roster = self.roster.write().map_err(|_| StoreError::LockPoisoned)?;
        let (updated, previous) = roster.update(id, apply)?;
        if let Err(e) = self.persist(&roster) {
            roster.replace(previous)?;
            return Err(e.into());
        }
        Ok(updated)
    }

    fn count(&self) -> Result<usize, StoreError> {
        let roster = self.roster.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(roster.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DamageType, DefenseKind};

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::open(dir.path().join("characters.json")).unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_changes_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("characters.json");

        {
            let repo = JsonFileRepository::open(&path).unwrap();
            let id = repo
                .insert(
                    Character::new("Thorm", 6, 48)
                        .with_defense(DamageType::Radiant, DefenseKind::Immunity),
                )
                .unwrap();
            repo.update(id, &mut |c| {
                let mut next = c.clone();
                next.temp_hit_points = 6;
                Ok(next)
            })
            .unwrap();
        }

        let reopened = JsonFileRepository::open(&path).unwrap();
        let thorm = reopened.get(CharacterId(1)).unwrap().unwrap();
        assert_eq!(thorm.name, "Thorm");
        assert_eq!(thorm.temp_hit_points, 6);
        assert_eq!(thorm.defenses.len(), 1);

        // Ids continue after the highest stored one
        let next = reopened.insert(Character::new("Lira", 4, 22)).unwrap();
        assert_eq!(next, CharacterId(2));
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("characters.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            JsonFileRepository::open(&path),
            Err(StoreError::Serialization(_))
        ));
    }

    #[test]
    fn test_insert_past_max_id_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("characters.json");
        fs::write(
            &path,
            format!(r#"[{{"id": {}, "name": "Last", "hitPoints": 3}}]"#, u32::MAX),
        )
        .unwrap();

        let repo = JsonFileRepository::open(&path).unwrap();
        assert!(matches!(
            repo.insert(Character::new("Overflow", 1, 1)),
            Err(StoreError::IdsExhausted(_))
        ));
        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(JsonFileRepository::open(&path).unwrap().count().unwrap(), 1);
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("characters.json");
        let repo = JsonFileRepository::open(&path).unwrap();
        repo.insert(Character::new("Nyx", 5, 28)).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }
}
