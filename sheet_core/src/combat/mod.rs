//! Hit point resolution - Apply damage, healing and temporary hit points

mod resolution;
mod result;

pub use resolution::{apply_damage, apply_heal, apply_temporary_hp, resolve_damage};
pub use result::DamageOutcome;
