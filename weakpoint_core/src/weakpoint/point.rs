//! Weakpoint - A named sub-location with its own armor and damage scaling

use super::difficulty::{DifficultyDef, WeakpointDifficulty};
use super::effect::{EffectApplication, WeakpointEffect, WeakpointEffectDef};
use crate::attack::{StatusEffectSink, WeakpointAttack};
use crate::config::{ConfigError, DefinitionCatalog};
use crate::damage::{DamageInstance, Resistances};
use crate::types::{DamageTable, DamageTableDef, DamageType};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A weak point on an attackable entity
#[derive(Debug, Clone, PartialEq)]
pub struct Weakpoint {
    /// Unique within its set. Equal to the name if not provided.
    pub id: String,
    /// Display name. Can be empty.
    pub name: String,
    /// Percent chance of hitting the weak point
    pub coverage: f64,
    /// Multiplier for existing armor values
    pub armor_mult: DamageTable,
    /// Flat armor penalty, applied after the multiplier
    pub armor_penalty: DamageTable,
    /// Damage multipliers, applied after armor
    pub damage_mult: DamageTable,
    /// Used instead of `damage_mult` on critical hits
    pub crit_mult: DamageTable,
    /// Effects the target must already have for this weak point to be hit
    pub required_effects: Vec<String>,
    /// Effects that hitting this weak point may cause
    pub effects: Vec<WeakpointEffect>,
    /// Constant coverage multipliers, by attack type
    pub coverage_mult: WeakpointDifficulty,
    /// Skill needed to target this weak point, by attack type
    pub difficulty: WeakpointDifficulty,
}

impl Default for Weakpoint {
    fn default() -> Self {
        Weakpoint {
            id: String::new(),
            name: String::new(),
            coverage: 100.0,
            armor_mult: DamageTable::filled(1.0),
            armor_penalty: DamageTable::filled(0.0),
            damage_mult: DamageTable::filled(1.0),
            crit_mult: DamageTable::filled(1.0),
            required_effects: Vec::new(),
            effects: Vec::new(),
            coverage_mult: WeakpointDifficulty::new(1.0),
            difficulty: WeakpointDifficulty::new(-100.0),
        }
    }
}

impl Weakpoint {
    /// Weak point with identity modifiers
    pub fn new(id: &str) -> Self {
        Weakpoint {
            id: id.to_string(),
            name: id.to_string(),
            ..Default::default()
        }
    }

    /// Build and validate a weak point from its definition
    pub fn load(def: &WeakpointDef, catalog: &dyn DefinitionCatalog) -> Result<Self, ConfigError> {
        let mut weakpoint = Weakpoint::default();

        weakpoint.name = def.name.clone().unwrap_or_default();
        weakpoint.id = def.id.clone().unwrap_or_else(|| weakpoint.name.clone());
        // The empty id is reserved for the default weak point
        if weakpoint.id.is_empty() {
            return Err(ConfigError::MissingWeakpointId);
        }
        if let Some(coverage) = def.coverage {
            if !coverage.is_finite() || coverage < 0.0 {
                return Err(ConfigError::InvalidCoverage {
                    weakpoint: weakpoint.id,
                    coverage,
                });
            }
            weakpoint.coverage = coverage;
        }

        def.armor_mult.apply_to(&mut weakpoint.armor_mult);
        def.armor_penalty.apply_to(&mut weakpoint.armor_penalty);
        def.damage_mult.apply_to(&mut weakpoint.damage_mult);
        // Crits default to the regular multiplier unless given their own
        weakpoint.crit_mult = weakpoint.damage_mult;
        def.crit_mult.apply_to(&mut weakpoint.crit_mult);

        for effect in &def.required_effects {
            if !catalog.has_effect(effect) {
                return Err(ConfigError::UnknownEffect {
                    weakpoint: weakpoint.id.clone(),
                    effect: effect.clone(),
                });
            }
        }
        weakpoint.required_effects = def.required_effects.clone();

        weakpoint.effects = def
            .effects
            .iter()
            .map(|e| WeakpointEffect::load(e, &weakpoint.id, catalog))
            .collect::<Result<_, _>>()?;

        weakpoint.coverage_mult.load(&def.coverage_mult);
        weakpoint.difficulty.load(&def.difficulty);

        Ok(weakpoint)
    }

    /// Apply the armor multipliers and penalties to a set of resistances
    ///
    /// Resistance never drops below zero.
    pub fn apply_to_resistances(&self, resistances: &mut Resistances) {
        for &damage_type in DamageType::all() {
            let scaled = resistances.get(damage_type) * self.armor_mult[damage_type]
                - self.armor_penalty[damage_type];
            resistances.set(damage_type, scaled.max(0.0));
        }
    }

    /// Apply the damage multipliers, or crit multipliers if `is_crit`
    pub fn apply_to_damage(&self, damage: &mut DamageInstance, is_crit: bool) {
        let table = if is_crit {
            &self.crit_mult
        } else {
            &self.damage_mult
        };
        for unit in &mut damage.units {
            unit.damage_multiplier *= table[unit.damage_type];
        }
    }

    /// Roll every effect; returns those that took hold
    pub fn apply_effects(
        &self,
        sink: &mut dyn StatusEffectSink,
        total_damage: f64,
        attack: &WeakpointAttack<'_>,
        rng: &mut impl Rng,
    ) -> Vec<EffectApplication> {
        let mut applied = Vec::new();
        for effect in &self.effects {
            if let Some(application) = effect.apply_to(sink, total_damage, attack, rng) {
                applied.push(application);
            }
        }
        applied
    }

    /// Selection weight as a probability: coverage × coverage multiplier / 100
    pub fn hit_chance(&self, attack: &WeakpointAttack<'_>) -> f64 {
        (self.coverage * self.coverage_mult.of(attack) / 100.0).max(0.0)
    }

    /// Whether the target has every required effect
    pub fn is_available(&self, attack: &WeakpointAttack<'_>) -> bool {
        if self.required_effects.is_empty() {
            return true;
        }
        match attack.target {
            Some(target) => self.required_effects.iter().all(|e| target.has_effect(e)),
            None => false,
        }
    }

    /// Skill gate: effective skill must reach the difficulty for this attack type
    pub fn passes_difficulty(&self, attack: &WeakpointAttack<'_>, family_modifier: f64) -> bool {
        attack.wp_skill + family_modifier >= self.difficulty.of(attack)
    }
}

/// Weak point as written in definition files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeakpointDef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub coverage: Option<f64>,
    #[serde(default)]
    pub armor_mult: DamageTableDef,
    #[serde(default)]
    pub armor_penalty: DamageTableDef,
    #[serde(default)]
    pub damage_mult: DamageTableDef,
    #[serde(default)]
    pub crit_mult: DamageTableDef,
    #[serde(default)]
    pub required_effects: Vec<String>,
    #[serde(default)]
    pub effects: Vec<WeakpointEffectDef>,
    #[serde(default)]
    pub coverage_mult: DifficultyDef,
    #[serde(default)]
    pub difficulty: DifficultyDef,
}
