//! Scenario files - one attacker, one target, one attack, repeated

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::time::Duration;
use weakpoint_core::config::{
    load_toml, ConfigError, FamiliesConfig, PracticeConstants, WeakpointsConfig,
};
use weakpoint_core::damage::DamageUnit;
use weakpoint_core::prelude::*;
use weakpoint_core::weakpoint::{FamilyDef, WeakpointDef};

fn default_seed() -> u64 {
    42
}

fn default_trials() -> u32 {
    10_000
}

fn default_learn_seconds() -> u64 {
    10 * 60
}

/// A complete scenario as read from TOML
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_trials")]
    pub trials: u32,
    #[serde(default)]
    pub catalog: CatalogDef,
    #[serde(default)]
    pub attacker: SimAttacker,
    pub target: SimTarget,
    pub attack: AttackDef,
    #[serde(default)]
    pub families: Vec<FamilyDef>,
    #[serde(default)]
    pub practice: PracticeConstants,
    #[serde(default)]
    pub weakpoints: Vec<WeakpointDef>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        load_toml(path)
    }

    pub fn catalog(&self) -> IdCatalog {
        IdCatalog::new()
            .with_proficiencies(self.catalog.proficiencies.iter().cloned())
            .with_effects(self.catalog.effects.iter().cloned())
    }

    pub fn build_families(&self, catalog: &IdCatalog) -> Result<WeakpointFamilies, ConfigError> {
        FamiliesConfig {
            families: self.families.clone(),
            practice: self.practice.clone(),
        }
        .build(catalog)
    }

    pub fn build_weakpoints(&self, catalog: &IdCatalog) -> Result<Weakpoints, ConfigError> {
        WeakpointsConfig {
            weakpoints: self.weakpoints.clone(),
        }
        .build(catalog)
    }
}

/// Ids known to the rest of the game
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogDef {
    #[serde(default)]
    pub proficiencies: Vec<String>,
    #[serde(default)]
    pub effects: Vec<String>,
}

/// Attacker with fixed per-style skill and a simple practice counter
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimAttacker {
    #[serde(default)]
    pub melee: f64,
    #[serde(default)]
    pub ranged: f64,
    #[serde(default)]
    pub thrown: f64,
    #[serde(default)]
    pub bonus: f64,
    #[serde(default)]
    pub proficiencies: HashSet<String>,
    /// Practice needed to learn a proficiency
    #[serde(default = "default_learn_seconds")]
    pub learn_seconds: u64,
    #[serde(skip)]
    pub practiced: HashMap<String, Duration>,
}

impl Default for SimAttacker {
    fn default() -> Self {
        SimAttacker {
            melee: 0.0,
            ranged: 0.0,
            thrown: 0.0,
            bonus: 0.0,
            proficiencies: HashSet::new(),
            learn_seconds: default_learn_seconds(),
            practiced: HashMap::new(),
        }
    }
}

impl WeakpointAttacker for SimAttacker {
    fn weakpoint_skill(&self, style: SkillStyle, _weapon: Option<&dyn WeakpointWeapon>) -> f64 {
        match style {
            SkillStyle::Melee => self.melee,
            SkillStyle::Ranged => self.ranged,
            SkillStyle::Thrown => self.thrown,
        }
    }

    fn weakpoint_skill_bonus(&self) -> f64 {
        self.bonus
    }

    fn has_proficiency(&self, proficiency: &str) -> bool {
        self.proficiencies.contains(proficiency)
    }
}

impl ProficiencyLearner for SimAttacker {
    fn practice_proficiency(&mut self, proficiency: &str, amount: Duration) -> bool {
        if self.proficiencies.contains(proficiency) {
            return false;
        }
        let total = self.practiced.entry(proficiency.to_string()).or_default();
        *total += amount;
        if *total < Duration::from_secs(self.learn_seconds) {
            return false;
        }
        tracing::info!(proficiency, "proficiency learned");
        self.proficiencies.insert(proficiency.to_string())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimTarget {
    pub max_health: f64,
    #[serde(default)]
    pub effects: HashSet<String>,
    #[serde(default)]
    pub player: bool,
}

impl WeakpointTarget for SimTarget {
    fn has_effect(&self, effect: &str) -> bool {
        self.effects.contains(effect)
    }

    fn max_health(&self) -> f64 {
        self.max_health
    }

    fn is_player_controlled(&self) -> bool {
        self.player
    }
}

/// How the attack is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackKind {
    /// Typed by the dominant physical damage
    #[default]
    Melee,
    Projectile,
    /// No attacker
    Environmental,
}

/// The attack repeated each trial
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttackDef {
    #[serde(default)]
    pub kind: AttackKind,
    #[serde(default)]
    pub thrown: bool,
    /// Chance per trial that the hit is a crit, 0..=1
    #[serde(default)]
    pub crit_chance: f64,
    pub damage: Vec<DamageUnit>,
    #[serde(default)]
    pub resistances: Resistances,
}

impl AttackDef {
    pub fn damage(&self) -> DamageInstance {
        DamageInstance {
            units: self.damage.clone(),
        }
    }
}

/// Weapon whose profile is the scenario's damage
#[derive(Debug, Clone)]
pub struct SimWeapon {
    pub damage: DamageInstance,
    pub thrown: bool,
}

impl WeakpointWeapon for SimWeapon {
    fn damage_profile(&self) -> DamageInstance {
        self.damage.clone()
    }

    fn is_thrown(&self) -> bool {
        self.thrown
    }
}
