//! Attack descriptor and the collaborator traits it borrows
//!
//! The combat loop owns attackers, targets and weapons. This module only
//! describes what the weakpoint system needs to ask of them.

mod descriptor;

pub use descriptor::WeakpointAttack;

use crate::damage::DamageInstance;
use crate::types::SkillStyle;
use crate::weakpoint::EffectApplication;
use std::time::Duration;

/// An entity that can aim at weak points
pub trait WeakpointAttacker {
    /// Base weak point skill for an attack style
    fn weakpoint_skill(&self, style: SkillStyle, weapon: Option<&dyn WeakpointWeapon>) -> f64;

    /// Flat bonus from held items, traits and the like
    fn weakpoint_skill_bonus(&self) -> f64 {
        0.0
    }

    fn has_proficiency(&self, proficiency: &str) -> bool;
}

/// An attacker whose proficiencies can grow through practice
pub trait ProficiencyLearner: WeakpointAttacker {
    /// Practice a proficiency. Returns true if it became learned by this call.
    fn practice_proficiency(&mut self, proficiency: &str, amount: Duration) -> bool;
}

/// Read-only view of the entity being hit
pub trait WeakpointTarget {
    fn has_effect(&self, effect: &str) -> bool;

    fn max_health(&self) -> f64;

    fn is_player_controlled(&self) -> bool {
        false
    }
}

/// The item an attack is made with
pub trait WeakpointWeapon {
    fn damage_profile(&self) -> DamageInstance;

    fn is_thrown(&self) -> bool {
        false
    }
}

/// The target's status-effect subsystem
pub trait StatusEffectSink {
    /// Request an effect. Returns true if it newly took hold.
    fn add_effect(&mut self, application: &EffectApplication) -> bool;

    /// Show a message to the player
    fn add_message(&mut self, message: &str);
}
