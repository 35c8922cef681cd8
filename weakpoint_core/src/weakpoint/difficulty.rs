//! WeakpointDifficulty - Per-attack-type scalar table

use crate::attack::WeakpointAttack;
use crate::types::AttackType;
use serde::{Deserialize, Serialize};

/// One value per attack type
///
/// Serves as a coverage multiplier or as a skill gate, depending on
/// which slot of a `Weakpoint` holds it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeakpointDifficulty {
    values: [f64; AttackType::COUNT],
}

impl WeakpointDifficulty {
    pub fn new(default_value: f64) -> Self {
        WeakpointDifficulty {
            values: [default_value; AttackType::COUNT],
        }
    }

    /// Value for the attack's type
    pub fn of(&self, attack: &WeakpointAttack<'_>) -> f64 {
        self.get(attack.attack_type)
    }

    pub fn get(&self, attack_type: AttackType) -> f64 {
        self.values[attack_type.index()]
    }

    pub fn set(&mut self, attack_type: AttackType, value: f64) {
        self.values[attack_type.index()] = value;
    }

    /// Overwrite the entries the definition covers
    pub fn load(&mut self, def: &DifficultyDef) {
        for &attack_type in AttackType::all() {
            if let Some(value) = def.resolve(attack_type) {
                self.set(attack_type, value);
            }
        }
    }
}

/// Difficulty table as written in definition files
///
/// `bash`, `cut` and `stab` fall back to `melee`; `projectile` uses
/// `ranged`; everything falls back to `all`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DifficultyDef {
    #[serde(default)]
    pub all: Option<f64>,
    #[serde(default)]
    pub none: Option<f64>,
    #[serde(default)]
    pub melee: Option<f64>,
    #[serde(default)]
    pub bash: Option<f64>,
    #[serde(default)]
    pub cut: Option<f64>,
    #[serde(default)]
    pub stab: Option<f64>,
    #[serde(default)]
    pub ranged: Option<f64>,
}

impl DifficultyDef {
    pub fn resolve(&self, attack_type: AttackType) -> Option<f64> {
        let specific = match attack_type {
            AttackType::None => self.none,
            AttackType::MeleeBash => self.bash.or(self.melee),
            AttackType::MeleeCut => self.cut.or(self.melee),
            AttackType::MeleeStab => self.stab.or(self.melee),
            AttackType::Projectile => self.ranged,
        };
        specific.or(self.all)
    }
}
