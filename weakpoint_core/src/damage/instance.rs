//! DamageInstance - A bundle of typed damage units

use crate::types::DamageType;
use serde::{Deserialize, Serialize};

/// Damage of a single type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageUnit {
    #[serde(rename = "type")]
    pub damage_type: DamageType,
    pub amount: f64,
    /// Scaling applied after mitigation (weak points, crits)
    #[serde(default = "default_multiplier")]
    pub damage_multiplier: f64,
}

fn default_multiplier() -> f64 {
    1.0
}

impl DamageUnit {
    pub fn new(damage_type: DamageType, amount: f64) -> Self {
        DamageUnit {
            damage_type,
            amount,
            damage_multiplier: 1.0,
        }
    }

    /// Amount after the multiplier, never negative
    pub fn total(&self) -> f64 {
        (self.amount * self.damage_multiplier).max(0.0)
    }
}

/// An ordered list of damage units making up one hit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageInstance {
    pub units: Vec<DamageUnit>,
}

impl DamageInstance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instance with a single unit
    pub fn single(damage_type: DamageType, amount: f64) -> Self {
        DamageInstance {
            units: vec![DamageUnit::new(damage_type, amount)],
        }
    }

    /// Add a unit, merging with an existing unit of the same type
    pub fn add(&mut self, damage_type: DamageType, amount: f64) {
        if let Some(existing) = self
            .units
            .iter_mut()
            .find(|u| u.damage_type == damage_type)
        {
            existing.amount += amount;
        } else {
            self.units.push(DamageUnit::new(damage_type, amount));
        }
    }

    /// Raw amount of a type, before multipliers
    pub fn amount_of(&self, damage_type: DamageType) -> f64 {
        self.units
            .iter()
            .filter(|u| u.damage_type == damage_type)
            .map(|u| u.amount)
            .sum()
    }

    /// Sum of every unit after multipliers
    pub fn total(&self) -> f64 {
        self.units.iter().map(DamageUnit::total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Get a damage breakdown string for display
    pub fn breakdown(&self) -> String {
        self.units
            .iter()
            .map(|u| format!("{:?}: {:.1}", u.damage_type, u.total()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
