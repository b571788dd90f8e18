//! Prelude module for convenient imports
//!
//! ```rust
//! use sheet_core::prelude::*;
//! ```

// Core types
pub use crate::character::{Character, CharacterId, HitPointState};
pub use crate::types::{DamageType, DefenseKind, StatType};

// Engine
pub use crate::combat::{apply_damage, apply_heal, apply_temporary_hp, resolve_damage, DamageOutcome};
pub use crate::defense::{Defense, DefenseTable};

// Requests and errors
pub use crate::error::SheetError;
pub use crate::request::{DamageRequest, HealRequest, TempHpRequest};

// Storage and service
pub use crate::service::CharacterService;
pub use crate::store::{CharacterRepository, InMemoryRepository, JsonFileRepository};
