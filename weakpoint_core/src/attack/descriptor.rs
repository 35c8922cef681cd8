//! WeakpointAttack - Snapshot of one incoming attack

use super::{WeakpointAttacker, WeakpointTarget, WeakpointWeapon};
use crate::damage::DamageInstance;
use crate::types::{AttackType, DamageType, SkillStyle};

/// Information about an attack on a weak point
///
/// Borrows its participants for the duration of one resolution.
#[derive(Clone, Copy, Default)]
pub struct WeakpointAttack<'a> {
    /// Who made the attack. Absent for environmental damage.
    pub source: Option<&'a dyn WeakpointAttacker>,
    /// Who is being hit
    pub target: Option<&'a dyn WeakpointTarget>,
    /// What the attack was made with. Absent when unarmed.
    pub weapon: Option<&'a dyn WeakpointWeapon>,
    pub attack_type: AttackType,
    pub is_thrown: bool,
    pub is_crit: bool,
    /// Attacker's skill at hitting weak points; set by `compute_wp_skill`
    pub wp_skill: f64,
}

impl<'a> WeakpointAttack<'a> {
    /// Melee attack, typed by the dominant damage of `damage`
    pub fn melee(
        source: &'a dyn WeakpointAttacker,
        target: &'a dyn WeakpointTarget,
        weapon: Option<&'a dyn WeakpointWeapon>,
        damage: &DamageInstance,
        is_crit: bool,
    ) -> Self {
        let mut attack = WeakpointAttack {
            source: Some(source),
            target: Some(target),
            weapon,
            attack_type: Self::type_of_melee_attack(damage),
            is_crit,
            ..Default::default()
        };
        attack.compute_wp_skill();
        attack
    }

    /// Ranged or thrown attack
    pub fn projectile(
        source: &'a dyn WeakpointAttacker,
        target: &'a dyn WeakpointTarget,
        weapon: Option<&'a dyn WeakpointWeapon>,
        is_thrown: bool,
        is_crit: bool,
    ) -> Self {
        let is_thrown = is_thrown || weapon.is_some_and(|w| w.is_thrown());
        let mut attack = WeakpointAttack {
            source: Some(source),
            target: Some(target),
            weapon,
            attack_type: AttackType::Projectile,
            is_thrown,
            is_crit,
            ..Default::default()
        };
        attack.compute_wp_skill();
        attack
    }

    /// Damage with no attacker: falls, fire, effects
    pub fn environmental(target: &'a dyn WeakpointTarget) -> Self {
        WeakpointAttack {
            target: Some(target),
            ..Default::default()
        }
    }

    /// Attack type of a melee hit
    ///
    /// Picks whichever of bash, cut and stab deals the most raw damage.
    /// Ties resolve bash, then cut, then stab. Returns `AttackType::None`
    /// when none of the three is present.
    pub fn type_of_melee_attack(damage: &DamageInstance) -> AttackType {
        let candidates = [
            (DamageType::Bash, AttackType::MeleeBash),
            (DamageType::Cut, AttackType::MeleeCut),
            (DamageType::Stab, AttackType::MeleeStab),
        ];

        let mut best = AttackType::None;
        let mut best_amount = 0.0;
        for (damage_type, attack_type) in candidates {
            let amount = damage.amount_of(damage_type);
            // Strictly greater keeps the earlier type on ties
            if amount > best_amount {
                best = attack_type;
                best_amount = amount;
            }
        }
        best
    }

    /// Which skill this attack draws on, if any
    pub fn skill_style(&self) -> Option<SkillStyle> {
        match self.attack_type {
            AttackType::None => None,
            AttackType::MeleeBash | AttackType::MeleeCut | AttackType::MeleeStab => {
                Some(SkillStyle::Melee)
            }
            AttackType::Projectile if self.is_thrown => Some(SkillStyle::Thrown),
            AttackType::Projectile => Some(SkillStyle::Ranged),
        }
    }

    /// Compute and store `wp_skill`
    pub fn compute_wp_skill(&mut self) {
        self.wp_skill = match (self.source, self.skill_style()) {
            (Some(source), Some(style)) => {
                source.weakpoint_skill(style, self.weapon) + source.weakpoint_skill_bonus()
            }
            _ => 0.0,
        };
    }
}
