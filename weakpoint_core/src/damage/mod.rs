//! Damage model - damage instances and the resistances that mitigate them

mod instance;
mod resistances;

pub use instance::{DamageInstance, DamageUnit};
pub use resistances::Resistances;
