//! Definition loading from TOML files

mod catalog;
mod constants;
mod families;
mod weakpoints;

pub use catalog::{DefinitionCatalog, IdCatalog};
pub use constants::PracticeConstants;
pub use families::{load_families, parse_families, FamiliesConfig};
pub use weakpoints::{load_weakpoints, parse_weakpoints, WeakpointsConfig};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Definition loading error
///
/// Every variant is raised while loading; selection and effect
/// application never fail.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Weakpoint family '{family}' names unknown proficiency '{proficiency}'")]
    UnknownProficiency { family: String, proficiency: String },
    #[error("Weakpoint '{weakpoint}' names unknown effect '{effect}'")]
    UnknownEffect { weakpoint: String, effect: String },
    #[error("{context}: {field} range has min {min} > max {max}")]
    InvalidRange {
        context: String,
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("{context}: chance {chance} is outside 0..=1")]
    InvalidChance { context: String, chance: f64 },
    #[error("Weakpoint definition has neither an id nor a name")]
    MissingWeakpointId,
    #[error("Weakpoint '{weakpoint}': coverage {coverage} must be finite and at least 0")]
    InvalidCoverage { weakpoint: String, coverage: f64 },
    #[error("Weakpoint '{0}' is defined more than once")]
    DuplicateWeakpoint(String),
    #[error("Weakpoint family '{0}' is defined more than once")]
    DuplicateFamily(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Reject a `(min, max)` pair with min > max
pub(crate) fn check_range<T: Into<f64> + Copy>(
    context: &str,
    field: &'static str,
    range: (T, T),
) -> Result<(), ConfigError> {
    let (min, max) = (range.0.into(), range.1.into());
    if min > max {
        return Err(ConfigError::InvalidRange {
            context: context.to_string(),
            field,
            min,
            max,
        });
    }
    Ok(())
}
