//! Weak point family loading

use super::{ConfigError, DefinitionCatalog, PracticeConstants};
use crate::weakpoint::{FamilyDef, WeakpointFamilies};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for family definitions and practice tuning
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FamiliesConfig {
    #[serde(default)]
    pub families: Vec<FamilyDef>,
    #[serde(default)]
    pub practice: PracticeConstants,
}

impl FamiliesConfig {
    /// Validate every definition into a fresh set
    pub fn build(&self, catalog: &dyn DefinitionCatalog) -> Result<WeakpointFamilies, ConfigError> {
        let mut families = WeakpointFamilies::new();
        families.load(&self.families, catalog)?;
        families.practice = self.practice.clone();
        Ok(families)
    }
}

/// Load families from a TOML file
pub fn load_families(
    path: &Path,
    catalog: &dyn DefinitionCatalog,
) -> Result<WeakpointFamilies, ConfigError> {
    let config: FamiliesConfig = super::load_toml(path)?;
    config.build(catalog)
}

/// Load families from a TOML string
pub fn parse_families(
    content: &str,
    catalog: &dyn DefinitionCatalog,
) -> Result<WeakpointFamilies, ConfigError> {
    let config: FamiliesConfig = super::parse_toml(content)?;
    config.build(catalog)
}
