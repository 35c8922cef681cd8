//! Core types shared by the weakpoint system

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Damage type carried by a single damage unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Pure,
    Biological,
    Bash,
    Cut,
    Acid,
    Stab,
    Heat,
    Cold,
    Electric,
    Bullet,
}

impl DamageType {
    /// Number of damage types; sizes every per-type table
    pub const COUNT: usize = 10;

    /// Get all damage types, in table order
    pub fn all() -> &'static [DamageType; DamageType::COUNT] {
        &[
            DamageType::Pure,
            DamageType::Biological,
            DamageType::Bash,
            DamageType::Cut,
            DamageType::Acid,
            DamageType::Stab,
            DamageType::Heat,
            DamageType::Cold,
            DamageType::Electric,
            DamageType::Bullet,
        ]
    }

    /// Position of this type in a `DamageTable`
    pub fn index(self) -> usize {
        self as usize
    }

    /// Physical damage is stopped by ordinary armor
    pub fn is_physical(self) -> bool {
        matches!(
            self,
            DamageType::Bash | DamageType::Cut | DamageType::Stab | DamageType::Bullet
        )
    }
}

/// One value per damage type. Always fully populated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageTable {
    values: [f64; DamageType::COUNT],
}

impl DamageTable {
    /// Table with every entry set to `value`
    pub fn filled(value: f64) -> Self {
        DamageTable {
            values: [value; DamageType::COUNT],
        }
    }

    pub fn get(&self, damage_type: DamageType) -> f64 {
        self.values[damage_type.index()]
    }

    pub fn set(&mut self, damage_type: DamageType, value: f64) {
        self.values[damage_type.index()] = value;
    }

    /// Iterate `(type, value)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (DamageType, f64)> + '_ {
        DamageType::all().iter().map(move |&t| (t, self.get(t)))
    }
}

impl Default for DamageTable {
    fn default() -> Self {
        DamageTable::filled(0.0)
    }
}

impl Index<DamageType> for DamageTable {
    type Output = f64;

    fn index(&self, damage_type: DamageType) -> &f64 {
        &self.values[damage_type.index()]
    }
}

impl IndexMut<DamageType> for DamageTable {
    fn index_mut(&mut self, damage_type: DamageType) -> &mut f64 {
        &mut self.values[damage_type.index()]
    }
}

/// Per-damage-type values as written in definition files
///
/// Precedence when resolving a type: its own key, then `physical` /
/// `non_physical`, then `all`. Types with no matching key keep the
/// value already in the table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DamageTableDef {
    #[serde(default)]
    pub all: Option<f64>,
    #[serde(default)]
    pub physical: Option<f64>,
    #[serde(default)]
    pub non_physical: Option<f64>,
    #[serde(default)]
    pub pure: Option<f64>,
    #[serde(default)]
    pub biological: Option<f64>,
    #[serde(default)]
    pub bash: Option<f64>,
    #[serde(default)]
    pub cut: Option<f64>,
    #[serde(default)]
    pub acid: Option<f64>,
    #[serde(default)]
    pub stab: Option<f64>,
    #[serde(default)]
    pub heat: Option<f64>,
    #[serde(default)]
    pub cold: Option<f64>,
    #[serde(default)]
    pub electric: Option<f64>,
    #[serde(default)]
    pub bullet: Option<f64>,
}

impl DamageTableDef {
    fn specific(&self, damage_type: DamageType) -> Option<f64> {
        match damage_type {
            DamageType::Pure => self.pure,
            DamageType::Biological => self.biological,
            DamageType::Bash => self.bash,
            DamageType::Cut => self.cut,
            DamageType::Acid => self.acid,
            DamageType::Stab => self.stab,
            DamageType::Heat => self.heat,
            DamageType::Cold => self.cold,
            DamageType::Electric => self.electric,
            DamageType::Bullet => self.bullet,
        }
    }

    /// Resolve the value for one type, if any key covers it
    pub fn resolve(&self, damage_type: DamageType) -> Option<f64> {
        let group = if damage_type.is_physical() {
            self.physical
        } else {
            self.non_physical
        };
        self.specific(damage_type).or(group).or(self.all)
    }

    /// Overwrite the covered entries of `table`
    pub fn apply_to(&self, table: &mut DamageTable) {
        for &damage_type in DamageType::all() {
            if let Some(value) = self.resolve(damage_type) {
                table[damage_type] = value;
            }
        }
    }

    /// Build a table from `default`, overwritten by this definition
    pub fn to_table(&self, default: f64) -> DamageTable {
        let mut table = DamageTable::filled(default);
        self.apply_to(&mut table);
        table
    }
}

/// Category of an incoming attack, as seen by weak points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackType {
    /// Falls, spells, effects and other non-combat damage
    #[default]
    None,
    MeleeBash,
    MeleeCut,
    MeleeStab,
    /// Ranged projectiles, including thrown objects
    Projectile,
}

impl AttackType {
    pub const COUNT: usize = 5;

    pub fn all() -> &'static [AttackType; AttackType::COUNT] {
        &[
            AttackType::None,
            AttackType::MeleeBash,
            AttackType::MeleeCut,
            AttackType::MeleeStab,
            AttackType::Projectile,
        ]
    }

    /// Position in a difficulty table; `None` is always 0
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_melee(self) -> bool {
        matches!(
            self,
            AttackType::MeleeBash | AttackType::MeleeCut | AttackType::MeleeStab
        )
    }
}

/// Which of the attacker's weak point skills an attack draws on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillStyle {
    Melee,
    Ranged,
    Thrown,
}
