//! Weak points - sub-locations of a target that change how a hit lands
//!
//! A `Weakpoints` set is attached to each kind of target. When an attack
//! connects, one weak point is selected, and its multipliers reshape the
//! target's armor and the incoming damage before any effects are rolled.

mod difficulty;
mod effect;
mod family;
mod point;
mod set;

pub use difficulty::{DifficultyDef, WeakpointDifficulty};
pub use effect::{EffectApplication, EffectDuration, WeakpointEffect, WeakpointEffectDef};
pub use family::{FamilyDef, WeakpointFamilies, WeakpointFamily};
pub use point::{Weakpoint, WeakpointDef};
pub use set::Weakpoints;
