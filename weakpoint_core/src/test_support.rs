//! Stand-ins for the combat collaborators, shared by unit tests

use crate::attack::{
    ProficiencyLearner, StatusEffectSink, WeakpointAttacker, WeakpointTarget, WeakpointWeapon,
};
use crate::damage::DamageInstance;
use crate::types::SkillStyle;
use crate::weakpoint::EffectApplication;
use rand::RngCore;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct TestAttacker {
    pub skills: HashMap<SkillStyle, f64>,
    pub bonus: f64,
    pub proficiencies: HashSet<String>,
    pub practiced: HashMap<String, Duration>,
    /// Practice needed before a proficiency is learned
    pub learn_after: Duration,
    pub practice_calls: u32,
}

impl TestAttacker {
    pub fn new() -> Self {
        TestAttacker {
            learn_after: Duration::from_secs(600),
            ..Default::default()
        }
    }

    pub fn with_skill(mut self, style: SkillStyle, skill: f64) -> Self {
        self.skills.insert(style, skill);
        self
    }

    pub fn with_bonus(mut self, bonus: f64) -> Self {
        self.bonus = bonus;
        self
    }

    pub fn with_proficiency(mut self, proficiency: &str) -> Self {
        self.proficiencies.insert(proficiency.to_string());
        self
    }
}

impl WeakpointAttacker for TestAttacker {
    fn weakpoint_skill(&self, style: SkillStyle, _weapon: Option<&dyn WeakpointWeapon>) -> f64 {
        self.skills.get(&style).copied().unwrap_or(0.0)
    }

    fn weakpoint_skill_bonus(&self) -> f64 {
        self.bonus
    }

    fn has_proficiency(&self, proficiency: &str) -> bool {
        self.proficiencies.contains(proficiency)
    }
}

impl ProficiencyLearner for TestAttacker {
    fn practice_proficiency(&mut self, proficiency: &str, amount: Duration) -> bool {
        self.practice_calls += 1;
        if self.proficiencies.contains(proficiency) {
            return false;
        }
        let total = self.practiced.entry(proficiency.to_string()).or_default();
        *total += amount;
        if *total >= self.learn_after {
            self.proficiencies.insert(proficiency.to_string());
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Default)]
pub struct TestTarget {
    pub max_health: f64,
    pub effects: HashSet<String>,
    pub is_player: bool,
}

impl TestTarget {
    pub fn new(max_health: f64) -> Self {
        TestTarget {
            max_health,
            ..Default::default()
        }
    }

    pub fn with_effect(mut self, effect: &str) -> Self {
        self.effects.insert(effect.to_string());
        self
    }

    pub fn player(mut self) -> Self {
        self.is_player = true;
        self
    }
}

impl WeakpointTarget for TestTarget {
    fn has_effect(&self, effect: &str) -> bool {
        self.effects.contains(effect)
    }

    fn max_health(&self) -> f64 {
        self.max_health
    }

    fn is_player_controlled(&self) -> bool {
        self.is_player
    }
}

#[derive(Debug)]
pub struct TestWeapon {
    pub damage: DamageInstance,
    pub thrown: bool,
}

impl TestWeapon {
    pub fn thrown(damage: DamageInstance) -> Self {
        TestWeapon {
            damage,
            thrown: true,
        }
    }
}

impl WeakpointWeapon for TestWeapon {
    fn damage_profile(&self) -> DamageInstance {
        self.damage.clone()
    }

    fn is_thrown(&self) -> bool {
        self.thrown
    }
}

/// Records every request; accepts unless `reject` is set
#[derive(Debug, Default)]
pub struct TestSink {
    pub applied: Vec<EffectApplication>,
    pub messages: Vec<String>,
    pub reject: bool,
}

impl StatusEffectSink for TestSink {
    fn add_effect(&mut self, application: &EffectApplication) -> bool {
        if self.reject {
            return false;
        }
        self.applied.push(application.clone());
        true
    }

    fn add_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Replays a fixed cycle of uniform draws through `Rng::gen::<f64>()`
pub struct SequenceRng {
    values: Vec<f64>,
    next: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<f64>) -> Self {
        SequenceRng { values, next: 0 }
    }

    /// `n` evenly spaced midpoints covering [0, 1)
    pub fn stepped(n: usize) -> Self {
        Self::new((0..n).map(|i| (i as f64 + 0.5) / n as f64).collect())
    }
}

impl RngCore for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        // `gen::<f64>()` keeps the top 53 bits
        ((value * (1u64 << 53) as f64) as u64) << 11
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
