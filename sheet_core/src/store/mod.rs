//! Character storage - Repository trait and backends

mod json_file;
mod memory;

pub use json_file::JsonFileRepository;
pub use memory::InMemoryRepository;

use crate::character::{Character, CharacterId};
use crate::error::SheetError;
use thiserror::Error;

/// Storage failure
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to (de)serialize characters: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("character {0} is not stored")]
    Missing(CharacterId),
    #[error("repository lock poisoned")]
    LockPoisoned,
    #[error("no character ids left after {0}")]
    IdsExhausted(CharacterId),
}

/// Persistence collaborator for characters
///
/// `update` is the read-modify-write primitive: implementations hold an
/// exclusive lock from load to save so concurrent updates of one character
/// serialize, and they store nothing when `apply` fails.
pub trait CharacterRepository: Send + Sync {
    /// All characters ordered by id
    fn list(&self) -> Result<Vec<Character>, StoreError>;

    fn get(&self, id: CharacterId) -> Result<Option<Character>, StoreError>;

    /// Store a new character under a freshly assigned id
    fn insert(&self, character: Character) -> Result<CharacterId, StoreError>;

    /// Overwrite an existing character
    fn save(&self, character: &Character) -> Result<(), StoreError>;

    /// Atomically load, transform and save one character
    ///
    /// Returns [`SheetError::NotFound`] when the id is unknown and passes
    /// through any error from `apply`.
    fn update(
        &self,
        id: CharacterId,
        apply: &mut dyn FnMut(&Character) -> Result<Character, SheetError>,
    ) -> Result<Character, SheetError>;

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.list()?.len())
    }
}

/// Insert `roster` only when the repository is empty
///
/// Returns the number of characters inserted.
pub fn seed_if_empty(
    repository: &dyn CharacterRepository,
    roster: Vec<Character>,
) -> Result<usize, StoreError> {
    if repository.count()? > 0 {
        tracing::debug!("repository already populated, skipping seed");
        return Ok(0);
    }

    let mut inserted = 0;
    for character in roster {
        let name = character.name.clone();
        let id = repository.insert(character)?;
        tracing::debug!(character_id = %id, name = %name, "seeded character");
        inserted += 1;
    }

    tracing::info!(count = inserted, "seeded character roster");
    Ok(inserted)
}
