//! sheet_core - Character sheet model and hit point engine
//!
//! This library provides:
//! - Character: The stored sheet (stats, classes, items, defenses, hit points)
//! - DefenseTable: Per-damage-type defense lookup with conflict precedence
//! - Damage Resolution: Applying damage, healing and temporary hit points
//! - Requests: Validation of incoming amounts before they reach the engine
//! - CharacterRepository: Storage abstraction with in-memory and JSON file backends
//! - CharacterService: Validate, load, resolve and save in one step

pub mod character;
pub mod combat;
pub mod config;
pub mod defense;
pub mod error;
pub mod prelude;
pub mod request;
pub mod service;
pub mod store;
pub mod types;

// Re-export core types for convenience
pub use character::{Character, CharacterClass, CharacterId, HitPointState, Item, ItemModifier, Stats};
pub use combat::{apply_damage, apply_heal, apply_temporary_hp, resolve_damage, DamageOutcome};
pub use config::{default_roster, ConfigError};
pub use defense::{Defense, DefenseTable};
pub use error::SheetError;
pub use request::{DamageRequest, HealRequest, TempHpRequest};
pub use service::CharacterService;
pub use store::{seed_if_empty, CharacterRepository, InMemoryRepository, JsonFileRepository, StoreError};
pub use types::{DamageType, DefenseKind, StatType};
