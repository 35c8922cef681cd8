//! Prelude module for convenient imports
//!
//! ```rust
//! use weakpoint_core::prelude::*;
//! ```

// Collaborator traits
pub use crate::attack::{
    ProficiencyLearner, StatusEffectSink, WeakpointAttack, WeakpointAttacker, WeakpointTarget,
    WeakpointWeapon,
};

// Core types
pub use crate::types::{AttackType, DamageType, SkillStyle};
pub use crate::damage::{DamageInstance, Resistances};

// Weak points
pub use crate::weakpoint::{EffectApplication, EffectDuration, Weakpoint, WeakpointFamilies, Weakpoints};

// Combat
pub use crate::combat::{resolve_weakpoint_hit, resolve_weakpoint_hit_with_rng, WeakpointHitResult};

// Config
pub use crate::config::{load_families, load_weakpoints, ConfigError, DefinitionCatalog, IdCatalog};
