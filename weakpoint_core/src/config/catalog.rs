//! Known ids that definitions may refer to

use std::collections::HashSet;

/// Lookup of ids owned by other subsystems
///
/// Loaders consult this so a typo in a definition fails at load time
/// instead of silently never matching.
pub trait DefinitionCatalog {
    fn has_proficiency(&self, id: &str) -> bool;
    fn has_effect(&self, id: &str) -> bool;
}

/// Set-backed catalog
#[derive(Debug, Clone, Default)]
pub struct IdCatalog {
    proficiencies: HashSet<String>,
    effects: HashSet<String>,
}

impl IdCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_proficiencies<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.proficiencies.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_effects<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.effects.extend(ids.into_iter().map(Into::into));
        self
    }
}

impl DefinitionCatalog for IdCatalog {
    fn has_proficiency(&self, id: &str) -> bool {
        self.proficiencies.contains(id)
    }

    fn has_effect(&self, id: &str) -> bool {
        self.effects.contains(id)
    }
}
