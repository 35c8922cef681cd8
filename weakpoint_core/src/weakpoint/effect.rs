//! WeakpointEffect - Secondary effects triggered by hitting a weak point

use crate::attack::{StatusEffectSink, WeakpointAttack};
use crate::config::{check_range, ConfigError, DefinitionCatalog};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How long an applied effect lasts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "turns", rename_all = "snake_case")]
pub enum EffectDuration {
    Turns(u32),
    Permanent,
}

/// A request to the target's status-effect subsystem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectApplication {
    pub effect: String,
    pub duration: EffectDuration,
    pub intensity: i32,
}

/// An effect that a weak point can cause
#[derive(Debug, Clone, PartialEq)]
pub struct WeakpointEffect {
    /// Status effect id
    pub effect: String,
    /// Probability of applying, 0..=1
    pub chance: f64,
    /// Permanent effects ignore the rolled duration
    pub permanent: bool,
    /// Duration range in turns, inclusive
    pub duration: (u32, u32),
    /// Intensity range, inclusive
    pub intensity: (i32, i32),
    /// Damage dealt, as a fraction of the target's max health, needed to trigger
    pub damage_required: (f64, f64),
    /// Shown when the effect lands on a player-controlled target
    pub message: Option<String>,
}

impl Default for WeakpointEffect {
    fn default() -> Self {
        WeakpointEffect {
            effect: String::new(),
            chance: 1.0,
            permanent: false,
            duration: (1, 1),
            intensity: (1, 1),
            damage_required: (0.0, 1.0),
            message: None,
        }
    }
}

impl WeakpointEffect {
    /// Validate a definition. `weakpoint` names the owner for error messages.
    pub fn load(
        def: &WeakpointEffectDef,
        weakpoint: &str,
        catalog: &dyn DefinitionCatalog,
    ) -> Result<Self, ConfigError> {
        if !catalog.has_effect(&def.effect) {
            return Err(ConfigError::UnknownEffect {
                weakpoint: weakpoint.to_string(),
                effect: def.effect.clone(),
            });
        }

        let context = format!("weakpoint '{}' effect '{}'", weakpoint, def.effect);
        if !(0.0..=1.0).contains(&def.chance) {
            return Err(ConfigError::InvalidChance {
                context,
                chance: def.chance,
            });
        }
        check_range(&context, "duration", def.duration)?;
        check_range(&context, "intensity", def.intensity)?;
        check_range(&context, "damage_required", def.damage_required)?;

        Ok(WeakpointEffect {
            effect: def.effect.clone(),
            chance: def.chance,
            permanent: def.permanent,
            duration: def.duration,
            intensity: def.intensity,
            damage_required: def.damage_required,
            message: def.message.clone().filter(|m| !m.is_empty()),
        })
    }

    /// Whether `total_damage` against `max_health` falls in the required band
    pub fn damage_in_range(&self, total_damage: f64, max_health: f64) -> bool {
        if max_health <= 0.0 {
            return false;
        }
        let fraction = total_damage / max_health;
        fraction >= self.damage_required.0 && fraction <= self.damage_required.1
    }

    /// Maybe apply the effect to the attack's target
    ///
    /// Returns the application when the sink accepted it.
    pub fn apply_to(
        &self,
        sink: &mut dyn StatusEffectSink,
        total_damage: f64,
        attack: &WeakpointAttack<'_>,
        rng: &mut impl Rng,
    ) -> Option<EffectApplication> {
        let target = attack.target?;

        if !self.damage_in_range(total_damage, target.max_health()) {
            tracing::trace!(
                effect = %self.effect,
                total_damage,
                max_health = target.max_health(),
                "weakpoint effect skipped: damage outside required range"
            );
            return None;
        }

        if rng.gen::<f64>() >= self.chance {
            tracing::trace!(effect = %self.effect, chance = self.chance, "weakpoint effect roll failed");
            return None;
        }

        let duration = if self.permanent {
            EffectDuration::Permanent
        } else {
            EffectDuration::Turns(roll_inclusive(self.duration, rng))
        };
        let application = EffectApplication {
            effect: self.effect.clone(),
            duration,
            intensity: roll_inclusive(self.intensity, rng),
        };

        if !sink.add_effect(&application) {
            tracing::trace!(effect = %self.effect, "weakpoint effect refused by target");
            return None;
        }
        tracing::debug!(
            effect = %application.effect,
            intensity = application.intensity,
            duration = ?application.duration,
            "weakpoint effect applied"
        );

        if let Some(message) = &self.message {
            if target.is_player_controlled() {
                sink.add_message(message);
            }
        }

        Some(application)
    }
}

fn roll_inclusive<T>(range: (T, T), rng: &mut impl Rng) -> T
where
    T: rand::distributions::uniform::SampleUniform + PartialOrd + Copy,
{
    if range.0 >= range.1 {
        range.1
    } else {
        rng.gen_range(range.0..=range.1)
    }
}

/// Effect as written in definition files
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeakpointEffectDef {
    pub effect: String,
    #[serde(default = "default_chance")]
    pub chance: f64,
    #[serde(default)]
    pub permanent: bool,
    #[serde(default = "default_duration")]
    pub duration: (u32, u32),
    #[serde(default = "default_intensity")]
    pub intensity: (i32, i32),
    #[serde(default = "default_damage_required")]
    pub damage_required: (f64, f64),
    #[serde(default)]
    pub message: Option<String>,
}

fn default_chance() -> f64 {
    1.0
}

fn default_duration() -> (u32, u32) {
    (1, 1)
}

fn default_intensity() -> (i32, i32) {
    (1, 1)
}

fn default_damage_required() -> (f64, f64) {
    (0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdCatalog;
    use crate::test_support::{TestSink, TestTarget};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog() -> IdCatalog {
        IdCatalog::new().with_effects(["bleed", "stunned"])
    }

    fn bleed() -> WeakpointEffect {
        WeakpointEffect {
            effect: "bleed".to_string(),
            chance: 1.0,
            duration: (3, 6),
            intensity: (1, 2),
            damage_required: (0.1, 0.5),
            message: Some("The wound bleeds freely!".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_applies_within_range() {
        let target = TestTarget::new(100.0);
        let attack = WeakpointAttack::environmental(&target);
        let mut sink = TestSink::default();
        let mut rng = StdRng::seed_from_u64(12345);

        let applied = bleed().apply_to(&mut sink, 20.0, &attack, &mut rng).unwrap();

        assert_eq!(applied.effect, "bleed");
        match applied.duration {
            EffectDuration::Turns(turns) => assert!((3..=6).contains(&turns)),
            EffectDuration::Permanent => panic!("bleed is not permanent"),
        }
        assert!((1..=2).contains(&applied.intensity));
        assert_eq!(sink.applied.len(), 1);
        // Not a player, so no message
        assert!(sink.messages.is_empty());
    }

    #[test]
    fn test_out_of_range_never_applies() {
        let target = TestTarget::new(100.0);
        let attack = WeakpointAttack::environmental(&target);
        let effect = bleed();
        let mut sink = TestSink::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            // 5% and 80% of max health, both outside 10%..=50%
            assert!(effect.apply_to(&mut sink, 5.0, &attack, &mut rng).is_none());
            assert!(effect.apply_to(&mut sink, 80.0, &attack, &mut rng).is_none());
        }
        assert!(sink.applied.is_empty());
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let effect = bleed();
        assert!(effect.damage_in_range(10.0, 100.0));
        assert!(effect.damage_in_range(50.0, 100.0));
        assert!(!effect.damage_in_range(50.5, 100.0));
        assert!(!effect.damage_in_range(10.0, 0.0));
    }

    #[test]
    fn test_zero_chance_never_applies() {
        let target = TestTarget::new(100.0);
        let attack = WeakpointAttack::environmental(&target);
        let effect = WeakpointEffect {
            chance: 0.0,
            ..bleed()
        };
        let mut sink = TestSink::default();
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..200 {
            assert!(effect.apply_to(&mut sink, 25.0, &attack, &mut rng).is_none());
        }
    }

    #[test]
    fn test_partial_chance_rate() {
        let target = TestTarget::new(100.0);
        let attack = WeakpointAttack::environmental(&target);
        let effect = WeakpointEffect {
            chance: 0.25,
            ..bleed()
        };
        let mut sink = TestSink::default();
        let mut rng = StdRng::seed_from_u64(2024);

        let trials = 4000;
        let hits = (0..trials)
            .filter(|_| effect.apply_to(&mut sink, 25.0, &attack, &mut rng).is_some())
            .count();
        let rate = hits as f64 / trials as f64;
        assert!((rate - 0.25).abs() < 0.03, "rate was {}", rate);
    }

    #[test]
    fn test_permanent_requests_permanent_duration() {
        let target = TestTarget::new(100.0);
        let attack = WeakpointAttack::environmental(&target);
        let effect = WeakpointEffect {
            permanent: true,
            ..bleed()
        };
        let mut sink = TestSink::default();
        let mut rng = StdRng::seed_from_u64(1);

        let applied = effect.apply_to(&mut sink, 30.0, &attack, &mut rng).unwrap();
        assert_eq!(applied.duration, EffectDuration::Permanent);
    }

    #[test]
    fn test_message_only_for_player_targets() {
        let player = TestTarget::new(100.0).player();
        let attack = WeakpointAttack::environmental(&player);
        let mut sink = TestSink::default();
        let mut rng = StdRng::seed_from_u64(3);

        bleed().apply_to(&mut sink, 30.0, &attack, &mut rng);
        assert_eq!(sink.messages, vec!["The wound bleeds freely!".to_string()]);
    }

    #[test]
    fn test_refused_effect_has_no_message() {
        let player = TestTarget::new(100.0).player();
        let attack = WeakpointAttack::environmental(&player);
        let mut sink = TestSink {
            reject: true,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(3);

        assert!(bleed().apply_to(&mut sink, 30.0, &attack, &mut rng).is_none());
        assert!(sink.messages.is_empty());
    }

    #[test]
    fn test_no_target_is_noop() {
        let attack = WeakpointAttack::default();
        let mut sink = TestSink::default();
        let mut rng = StdRng::seed_from_u64(3);

        assert!(bleed().apply_to(&mut sink, 30.0, &attack, &mut rng).is_none());
    }

    #[test]
    fn test_load_defaults() {
        let def: WeakpointEffectDef = toml::from_str("effect = \"stunned\"").unwrap();
        let effect = WeakpointEffect::load(&def, "head", &catalog()).unwrap();

        assert_eq!(effect, WeakpointEffect {
            effect: "stunned".to_string(),
            ..Default::default()
        });
    }

    #[test]
    fn test_load_rejects_unknown_effect() {
        let def: WeakpointEffectDef = toml::from_str("effect = \"on_fire\"").unwrap();
        let err = WeakpointEffect::load(&def, "head", &catalog()).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownEffect { .. }));
    }

    #[test]
    fn test_load_rejects_inverted_range() {
        let def: WeakpointEffectDef = toml::from_str(
            r#"
effect = "bleed"
duration = [10, 2]
"#,
        )
        .unwrap();
        let err = WeakpointEffect::load(&def, "neck", &catalog()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidRange {
                field: "duration",
                ..
            }
        ));
    }

    #[test]
    fn test_load_rejects_bad_chance() {
        let def: WeakpointEffectDef = toml::from_str(
            r#"
effect = "bleed"
chance = 25
"#,
        )
        .unwrap();
        let err = WeakpointEffect::load(&def, "neck", &catalog()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidChance { .. }));
    }

    #[test]
    fn test_duration_serialization() {
        let json = serde_json::to_string(&EffectDuration::Turns(4)).unwrap();
        assert!(json.contains("turns"));
    }
}
