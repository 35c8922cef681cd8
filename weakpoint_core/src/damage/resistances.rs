//! Resistances - Flat per-type damage reduction
//!
//! Formula:
//! - damage_after = max(0, amount - resistance)
//!
//! Weak points rescale resistances before this subtraction happens,
//! and rescale the damage multiplier after it.

use super::DamageInstance;
use crate::types::{DamageTable, DamageTableDef, DamageType};
use serde::{Deserialize, Serialize};

/// Flat resistance values, one per damage type
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "DamageTableDef")]
#[serde(into = "DamageTableDef")]
pub struct Resistances {
    pub values: DamageTable,
}

impl Resistances {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same resistance against every type
    pub fn uniform(value: f64) -> Self {
        Resistances {
            values: DamageTable::filled(value),
        }
    }

    pub fn get(&self, damage_type: DamageType) -> f64 {
        self.values[damage_type]
    }

    pub fn set(&mut self, damage_type: DamageType, value: f64) {
        self.values[damage_type] = value;
    }

    /// Builder-style setter
    pub fn with(mut self, damage_type: DamageType, value: f64) -> Self {
        self.set(damage_type, value);
        self
    }

    /// Subtract resistance from each unit's raw amount
    ///
    /// Returns the total amount removed.
    pub fn mitigate(&self, damage: &mut DamageInstance) -> f64 {
        let mut mitigated = 0.0;
        for unit in &mut damage.units {
            let before = unit.amount.max(0.0);
            let after = (before - self.get(unit.damage_type)).max(0.0);
            mitigated += before - after;
            unit.amount = after;
        }
        mitigated
    }
}

impl From<DamageTableDef> for Resistances {
    fn from(def: DamageTableDef) -> Self {
        Resistances {
            values: def.to_table(0.0),
        }
    }
}

impl From<Resistances> for DamageTableDef {
    fn from(resistances: Resistances) -> Self {
        let v = |t| Some(resistances.get(t));
        DamageTableDef {
            pure: v(DamageType::Pure),
            biological: v(DamageType::Biological),
            bash: v(DamageType::Bash),
            cut: v(DamageType::Cut),
            acid: v(DamageType::Acid),
            stab: v(DamageType::Stab),
            heat: v(DamageType::Heat),
            cold: v(DamageType::Cold),
            electric: v(DamageType::Electric),
            bullet: v(DamageType::Bullet),
            ..Default::default()
        }
    }
}
