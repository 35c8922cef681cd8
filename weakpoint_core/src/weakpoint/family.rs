//! Weakpoint families - Proficiency-driven skill modifiers

use crate::attack::{ProficiencyLearner, WeakpointAttacker};
use crate::config::{ConfigError, DefinitionCatalog, PracticeConstants};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// Ties a skill bonus/penalty pair to a proficiency
#[derive(Debug, Clone, PartialEq)]
pub struct WeakpointFamily {
    /// Family id; the proficiency id unless given
    pub id: String,
    pub proficiency: String,
    /// Skill bonus for holding the proficiency
    pub bonus: Option<f64>,
    /// Skill penalty for lacking it
    pub penalty: Option<f64>,
}

impl WeakpointFamily {
    pub fn new(proficiency: &str) -> Self {
        WeakpointFamily {
            id: proficiency.to_string(),
            proficiency: proficiency.to_string(),
            bonus: None,
            penalty: None,
        }
    }

    pub fn load(def: &FamilyDef, catalog: &dyn DefinitionCatalog) -> Result<Self, ConfigError> {
        let id = def.id.clone().unwrap_or_else(|| def.proficiency.clone());
        if !catalog.has_proficiency(&def.proficiency) {
            return Err(ConfigError::UnknownProficiency {
                family: id,
                proficiency: def.proficiency.clone(),
            });
        }
        Ok(WeakpointFamily {
            id,
            proficiency: def.proficiency.clone(),
            bonus: def.bonus,
            penalty: def.penalty,
        })
    }

    /// `+bonus` with the proficiency, `-penalty` without
    pub fn modifier(&self, attacker: &dyn WeakpointAttacker) -> f64 {
        if attacker.has_proficiency(&self.proficiency) {
            self.bonus.unwrap_or(0.0)
        } else {
            -self.penalty.unwrap_or(0.0)
        }
    }
}

/// The set of families relevant to one kind of target
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeakpointFamilies {
    pub families: Vec<WeakpointFamily>,
    pub practice: PracticeConstants,
}

impl WeakpointFamilies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Net skill modifier across every family
    pub fn modifier(&self, attacker: &dyn WeakpointAttacker) -> f64 {
        self.families.iter().map(|f| f.modifier(attacker)).sum()
    }

    /// Practice every family for `amount`. Returns true if a proficiency was learned.
    ///
    /// Proficiencies the learner already holds are skipped entirely.
    pub fn practice(&self, learner: &mut dyn ProficiencyLearner, amount: Duration) -> bool {
        let mut learned = false;
        for family in &self.families {
            if learner.has_proficiency(&family.proficiency) {
                continue;
            }
            if learner.practice_proficiency(&family.proficiency, amount) {
                tracing::debug!(proficiency = %family.proficiency, "weakpoint proficiency learned");
                learned = true;
            }
        }
        learned
    }

    pub fn practice_hit(&self, learner: &mut dyn ProficiencyLearner) -> bool {
        self.practice(learner, self.practice.hit())
    }

    pub fn practice_kill(&self, learner: &mut dyn ProficiencyLearner) -> bool {
        self.practice(learner, self.practice.kill())
    }

    pub fn practice_dissect(&self, learner: &mut dyn ProficiencyLearner) -> bool {
        self.practice(learner, self.practice.dissect())
    }

    pub fn get(&self, id: &str) -> Option<&WeakpointFamily> {
        self.families.iter().find(|f| f.id == id)
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    pub fn clear(&mut self) {
        self.families.clear();
    }

    /// Add families, replacing any with the same id
    ///
    /// The batch is validated first; on error nothing changes.
    pub fn load(
        &mut self,
        defs: &[FamilyDef],
        catalog: &dyn DefinitionCatalog,
    ) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        let mut loaded = Vec::with_capacity(defs.len());
        for def in defs {
            let family = WeakpointFamily::load(def, catalog)?;
            if !seen.insert(family.id.clone()) {
                return Err(ConfigError::DuplicateFamily(family.id));
            }
            loaded.push(family);
        }

        for family in loaded {
            if let Some(existing) = self.families.iter_mut().find(|f| f.id == family.id) {
                tracing::debug!(family = %family.id, "replacing weakpoint family");
                *existing = family;
            } else {
                tracing::debug!(family = %family.id, "loading weakpoint family");
                self.families.push(family);
            }
        }
        Ok(())
    }

    /// Remove families by id
    pub fn remove<S: AsRef<str>>(&mut self, ids: &[S]) {
        for id in ids {
            let id = id.as_ref();
            let before = self.families.len();
            self.families.retain(|f| f.id != id);
            if self.families.len() == before {
                tracing::warn!(family = id, "cannot remove unknown weakpoint family");
            }
        }
    }
}

/// Family as written in definition files
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FamilyDef {
    #[serde(default)]
    pub id: Option<String>,
    pub proficiency: String,
    #[serde(default)]
    pub bonus: Option<f64>,
    #[serde(default)]
    pub penalty: Option<f64>,
}

impl FamilyDef {
    pub fn new(proficiency: &str) -> Self {
        FamilyDef {
            id: None,
            proficiency: proficiency.to_string(),
            bonus: None,
            penalty: None,
        }
    }
}
