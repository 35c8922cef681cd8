//! weakpoint_core - Weak point resolution for combat damage
//!
//! This library provides:
//! - WeakpointAttack: Snapshot of an incoming attack and the traits it borrows
//! - Weakpoints: Per-target weak points and the weighted selector
//! - WeakpointFamilies: Proficiency-driven skill modifiers and practice
//! - Hit Resolution: Armor rescaling, mitigation, damage multipliers and effects
//! - Config: TOML definition loading

pub mod attack;
pub mod combat;
pub mod config;
pub mod damage;
pub mod prelude;
pub mod types;
pub mod weakpoint;

#[cfg(test)]
mod test_support;

// Re-export core types for convenience
pub use attack::{
    ProficiencyLearner, StatusEffectSink, WeakpointAttack, WeakpointAttacker, WeakpointTarget,
    WeakpointWeapon,
};
pub use combat::{resolve_weakpoint_hit, resolve_weakpoint_hit_with_rng, WeakpointHitResult};
pub use config::{ConfigError, DefinitionCatalog, IdCatalog, PracticeConstants};
pub use damage::{DamageInstance, DamageUnit, Resistances};
pub use types::{AttackType, DamageTable, DamageType, SkillStyle};
pub use weakpoint::{
    EffectApplication, EffectDuration, Weakpoint, WeakpointDifficulty, WeakpointEffect,
    WeakpointFamilies, WeakpointFamily, Weakpoints,
};
