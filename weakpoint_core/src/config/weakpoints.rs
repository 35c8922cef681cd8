//! Weak point definition loading

use super::{ConfigError, DefinitionCatalog};
use crate::weakpoint::{WeakpointDef, Weakpoints};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for weak point definitions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeakpointsConfig {
    #[serde(default)]
    pub weakpoints: Vec<WeakpointDef>,
}

impl WeakpointsConfig {
    /// Validate every definition into a fresh set
    pub fn build(&self, catalog: &dyn DefinitionCatalog) -> Result<Weakpoints, ConfigError> {
        let mut weakpoints = Weakpoints::new();
        weakpoints.load(&self.weakpoints, catalog)?;
        Ok(weakpoints)
    }
}

/// Load weak points from a TOML file
pub fn load_weakpoints(
    path: &Path,
    catalog: &dyn DefinitionCatalog,
) -> Result<Weakpoints, ConfigError> {
    let config: WeakpointsConfig = super::load_toml(path)?;
    config.build(catalog)
}

/// Load weak points from a TOML string
pub fn parse_weakpoints(
    content: &str,
    catalog: &dyn DefinitionCatalog,
) -> Result<Weakpoints, ConfigError> {
    let config: WeakpointsConfig = super::parse_toml(content)?;
    config.build(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdCatalog;
    use crate::types::{AttackType, DamageType};

    fn catalog() -> IdCatalog {
        IdCatalog::new().with_effects(["bleed", "stunned", "downed"])
    }

    #[test]
    fn test_parse_weakpoints() {
        let toml = r#"
[[weakpoints]]
name = "the eye"
id = "eye"
coverage = 1.5
armor_mult = { all = 0.5, physical = 0.25 }
armor_penalty = { cut = 2.0 }
damage_mult = { all = 2.0 }
crit_mult = { all = 3.0 }
difficulty = { all = 10.0, melee = 4.0, stab = 2.0 }
coverage_mult = { ranged = 0.5 }

[[weakpoints.effects]]
effect = "stunned"
chance = 0.5
duration = [1, 3]
damage_required = [0.1, 1.0]
message = "Your vision blurs!"

[[weakpoints]]
name = "soft belly"
required_effects = ["downed"]

[[weakpoints.effects]]
effect = "bleed"
permanent = true
intensity = [1, 2]
"#;

        let weakpoints = parse_weakpoints(toml, &catalog()).unwrap();
        assert_eq!(weakpoints.ids().collect::<Vec<_>>(), vec!["eye", "soft belly"]);

        let eye = weakpoints.get("eye").unwrap();
        assert_eq!(eye.name, "the eye");
        assert!((eye.coverage - 1.5).abs() < f64::EPSILON);
        assert!((eye.armor_mult[DamageType::Heat] - 0.5).abs() < f64::EPSILON);
        assert!((eye.armor_mult[DamageType::Bullet] - 0.25).abs() < f64::EPSILON);
        assert!((eye.armor_penalty[DamageType::Cut] - 2.0).abs() < f64::EPSILON);
        assert!(eye.armor_penalty[DamageType::Bash].abs() < f64::EPSILON);
        assert!((eye.crit_mult[DamageType::Stab] - 3.0).abs() < f64::EPSILON);
        assert!((eye.difficulty.get(AttackType::MeleeStab) - 2.0).abs() < f64::EPSILON);
        assert!((eye.difficulty.get(AttackType::MeleeBash) - 4.0).abs() < f64::EPSILON);
        assert!((eye.difficulty.get(AttackType::Projectile) - 10.0).abs() < f64::EPSILON);
        assert!((eye.coverage_mult.get(AttackType::Projectile) - 0.5).abs() < f64::EPSILON);
        assert!((eye.coverage_mult.get(AttackType::MeleeCut) - 1.0).abs() < f64::EPSILON);

        let stunned = &eye.effects[0];
        assert_eq!(stunned.duration, (1, 3));
        assert_eq!(stunned.intensity, (1, 1));
        assert_eq!(stunned.message.as_deref(), Some("Your vision blurs!"));

        let belly = weakpoints.get("soft belly").unwrap();
        assert_eq!(belly.required_effects, vec!["downed".to_string()]);
        assert!(belly.effects[0].permanent);
        assert!((belly.coverage - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_empty() {
        let weakpoints = parse_weakpoints("", &catalog()).unwrap();
        assert!(weakpoints.is_empty());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let toml = r#"
[[weakpoints]]
id = "eye"
covrage = 10.0
"#;
        let err = parse_weakpoints(toml, &catalog()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_unknown_effect_rejected() {
        let toml = r#"
[[weakpoints]]
id = "eye"

[[weakpoints.effects]]
effect = "on_fire"
"#;
        let err = parse_weakpoints(toml, &catalog()).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownEffect { ref effect, .. } if effect == "on_fire"));
    }

    #[test]
    fn test_unnamed_weakpoint_rejected() {
        let toml = r#"
[[weakpoints]]
coverage = 100.0
damage_mult = { all = 3.0 }
"#;
        let err = parse_weakpoints(toml, &catalog()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingWeakpointId));
    }

    #[test]
    fn test_infinite_coverage_rejected() {
        let toml = r#"
[[weakpoints]]
id = "eye"
coverage = inf
"#;
        let err = parse_weakpoints(toml, &catalog()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCoverage { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_weakpoints(Path::new("/nonexistent/weakpoints.toml"), &catalog()).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
