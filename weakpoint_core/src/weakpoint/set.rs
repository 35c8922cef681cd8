//! Weakpoints - The weak points of one kind of target, and selection among them
//!
//! Selection runs in three stages:
//! 1. Filter: drop weak points whose required effects the target lacks
//! 2. Gate: drop weak points whose difficulty exceeds skill + family modifier
//! 3. Weight: draw once, each survivor taking `hit_chance` of the probability space
//!
//! Mass left over after stage 3 belongs to the default weak point. If the
//! survivors' chances add up to more than 1 they are scaled down to fill
//! the space exactly, leaving nothing for the default.

use super::family::WeakpointFamilies;
use super::point::{Weakpoint, WeakpointDef};
use crate::attack::WeakpointAttack;
use crate::config::{ConfigError, DefinitionCatalog};
use rand::Rng;
use std::collections::HashSet;

/// Weak points plus the default used when none is hit
#[derive(Debug, Clone, PartialEq)]
pub struct Weakpoints {
    /// Each weak point should have a unique id
    pub weakpoint_list: Vec<Weakpoint>,
    /// Returned when no listed weak point is selected
    pub default_weakpoint: Weakpoint,
}

impl Default for Weakpoints {
    fn default() -> Self {
        Weakpoints {
            weakpoint_list: Vec::new(),
            default_weakpoint: Weakpoint::default(),
        }
    }
}

impl Weakpoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the weak point an attack strikes
    pub fn select_weakpoint<'s>(
        &'s self,
        attack: &WeakpointAttack<'_>,
        families: &WeakpointFamilies,
        rng: &mut impl Rng,
    ) -> &'s Weakpoint {
        let family_modifier = attack.source.map_or(0.0, |s| families.modifier(s));
        tracing::debug!(
            attack_type = ?attack.attack_type,
            wp_skill = attack.wp_skill,
            family_modifier,
            "weakpoint selection"
        );

        let mut candidates: Vec<(&Weakpoint, f64)> = Vec::new();
        for weakpoint in &self.weakpoint_list {
            if !weakpoint.is_available(attack) {
                tracing::debug!(weakpoint = %weakpoint.id, "weakpoint unavailable: missing required effect");
                continue;
            }
            if !weakpoint.passes_difficulty(attack, family_modifier) {
                tracing::debug!(
                    weakpoint = %weakpoint.id,
                    difficulty = weakpoint.difficulty.of(attack),
                    "weakpoint gated by difficulty"
                );
                continue;
            }
            let hit_chance = weakpoint.hit_chance(attack);
            tracing::debug!(weakpoint = %weakpoint.id, hit_chance, "weakpoint candidate");
            if hit_chance > 0.0 {
                candidates.push((weakpoint, hit_chance));
            }
        }

        let total: f64 = candidates.iter().map(|(_, chance)| chance).sum();
        if total <= 0.0 {
            tracing::debug!("weakpoint selection: default (no candidates)");
            return &self.default_weakpoint;
        }

        let scale = if total > 1.0 { 1.0 / total } else { 1.0 };
        let roll = rng.gen::<f64>();
        let mut cumulative = 0.0;
        for (weakpoint, chance) in candidates {
            cumulative += chance * scale;
            if roll < cumulative {
                tracing::debug!(weakpoint = %weakpoint.id, roll, "weakpoint selected");
                return weakpoint;
            }
        }

        tracing::debug!(roll, "weakpoint selection: default");
        &self.default_weakpoint
    }

    pub fn get(&self, id: &str) -> Option<&Weakpoint> {
        self.weakpoint_list.iter().find(|w| w.id == id)
    }

    /// Ids in list order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.weakpoint_list.iter().map(|w| w.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.weakpoint_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weakpoint_list.is_empty()
    }

    pub fn clear(&mut self) {
        self.weakpoint_list.clear();
    }

    /// Add weak points, replacing any with the same id in place
    ///
    /// The batch is validated first; on error nothing changes.
    pub fn load(
        &mut self,
        defs: &[WeakpointDef],
        catalog: &dyn DefinitionCatalog,
    ) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        let mut loaded = Vec::with_capacity(defs.len());
        for def in defs {
            let weakpoint = Weakpoint::load(def, catalog)?;
            if !seen.insert(weakpoint.id.clone()) {
                return Err(ConfigError::DuplicateWeakpoint(weakpoint.id));
            }
            loaded.push(weakpoint);
        }

        for weakpoint in loaded {
            if let Some(existing) = self.weakpoint_list.iter_mut().find(|w| w.id == weakpoint.id) {
                tracing::debug!(weakpoint = %weakpoint.id, "replacing weakpoint");
                *existing = weakpoint;
            } else {
                tracing::debug!(weakpoint = %weakpoint.id, "loading weakpoint");
                self.weakpoint_list.push(weakpoint);
            }
        }
        Ok(())
    }

    /// Remove weak points by id
    pub fn remove<S: AsRef<str>>(&mut self, ids: &[S]) {
        for id in ids {
            let id = id.as_ref();
            let before = self.weakpoint_list.len();
            self.weakpoint_list.retain(|w| w.id != id);
            if self.weakpoint_list.len() == before {
                tracing::warn!(weakpoint = id, "cannot remove unknown weakpoint");
            }
        }
    }
}
