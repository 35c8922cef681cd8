//! WeakpointHitResult - Outcome of resolving one hit

use crate::damage::DamageInstance;
use crate::weakpoint::EffectApplication;
use serde::{Deserialize, Serialize};

/// What a hit did after weak point selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeakpointHitResult {
    /// Id of the weak point struck; empty for the default
    pub weakpoint_id: String,
    pub weakpoint_name: String,
    /// Damage after mitigation and weak point multipliers
    pub damage: DamageInstance,
    pub total_damage: f64,
    /// Raw damage removed by the (rescaled) resistances
    pub mitigated: f64,
    pub is_crit: bool,
    /// Effects the target accepted
    pub effects_applied: Vec<EffectApplication>,
}

impl WeakpointHitResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a listed weak point, rather than the default, was struck
    pub fn hit_weakpoint(&self) -> bool {
        !self.weakpoint_id.is_empty()
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if self.hit_weakpoint() {
            let name = if self.weakpoint_name.is_empty() {
                &self.weakpoint_id
            } else {
                &self.weakpoint_name
            };
            parts.push(format!("hit {}", name));
        }

        parts.push(format!("{:.1} damage", self.total_damage));

        if self.mitigated > 0.0 {
            parts.push(format!("{:.1} mitigated", self.mitigated));
        }

        if self.is_crit {
            parts.push("CRIT".to_string());
        }

        for effect in &self.effects_applied {
            parts.push(format!("applied {}", effect.effect));
        }

        parts.join(", ")
    }
}
