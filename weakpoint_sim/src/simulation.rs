//! Weak point simulation utilities

use crate::scenario::{AttackKind, Scenario, SimAttacker, SimTarget, SimWeapon};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;
use weakpoint_core::config::ConfigError;
use weakpoint_core::prelude::*;

/// Counts effects and messages instead of applying them
#[derive(Debug, Default)]
struct CountingSink {
    messages: usize,
}

impl StatusEffectSink for CountingSink {
    fn add_effect(&mut self, _application: &EffectApplication) -> bool {
        true
    }

    fn add_message(&mut self, _message: &str) {
        self.messages += 1;
    }
}

/// A scenario with its definitions validated
pub struct Simulation {
    pub seed: u64,
    pub trials: u32,
    attacker: SimAttacker,
    target: SimTarget,
    weapon: SimWeapon,
    kind: AttackKind,
    crit_chance: f64,
    damage: DamageInstance,
    resistances: Resistances,
    families: WeakpointFamilies,
    weakpoints: Weakpoints,
}

/// Aggregated outcome of a run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimReport {
    pub trials: u32,
    /// Selections per weak point id; the default is keyed by ""
    pub selections: BTreeMap<String, u32>,
    pub crit_count: u32,
    pub total_damage: f64,
    /// Applications per effect id
    pub effects: BTreeMap<String, u32>,
    pub messages: usize,
    /// Trial (1-based) on which each proficiency was learned
    pub learned: BTreeMap<String, u32>,
}

impl Simulation {
    pub fn new(scenario: &Scenario) -> Result<Self, ConfigError> {
        let catalog = scenario.catalog();
        let families = scenario.build_families(&catalog)?;
        let weakpoints = scenario.build_weakpoints(&catalog)?;
        let damage = scenario.attack.damage();

        tracing::info!(
            weakpoints = weakpoints.len(),
            families = families.len(),
            trials = scenario.trials,
            seed = scenario.seed,
            "scenario loaded"
        );

        Ok(Simulation {
            seed: scenario.seed,
            trials: scenario.trials,
            attacker: scenario.attacker.clone(),
            target: scenario.target.clone(),
            weapon: SimWeapon {
                damage: damage.clone(),
                thrown: scenario.attack.thrown,
            },
            kind: scenario.attack.kind,
            crit_chance: scenario.attack.crit_chance,
            damage,
            resistances: scenario.attack.resistances,
            families,
            weakpoints,
        })
    }

    fn attack<'a>(&'a self, attacker: &'a SimAttacker, is_crit: bool) -> WeakpointAttack<'a> {
        match self.kind {
            AttackKind::Melee => WeakpointAttack::melee(
                attacker,
                &self.target,
                Some(&self.weapon),
                &self.damage,
                is_crit,
            ),
            AttackKind::Projectile => WeakpointAttack::projectile(
                attacker,
                &self.target,
                Some(&self.weapon),
                self.weapon.thrown,
                is_crit,
            ),
            AttackKind::Environmental => WeakpointAttack {
                is_crit,
                ..WeakpointAttack::environmental(&self.target)
            },
        }
    }

    /// Resolve every trial with a seeded RNG
    ///
    /// Each run starts from the scenario's attacker. Hits on a listed weak
    /// point count as practice, so proficiencies can be learned mid-run.
    pub fn run(&self) -> SimReport {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut sink = CountingSink::default();
        let mut attacker = self.attacker.clone();
        let mut report = SimReport {
            trials: self.trials,
            ..Default::default()
        };

        for trial in 1..=self.trials {
            let is_crit = self.crit_chance > 0.0 && rng.gen::<f64>() < self.crit_chance;
            let attack = self.attack(&attacker, is_crit);
            let result = resolve_weakpoint_hit_with_rng(
                &self.weakpoints,
                &self.families,
                &attack,
                &self.damage,
                &self.resistances,
                &mut sink,
                &mut rng,
            );

            if result.hit_weakpoint() && self.families.practice_hit(&mut attacker) {
                for family in &self.families.families {
                    if attacker.has_proficiency(&family.proficiency) {
                        report
                            .learned
                            .entry(family.proficiency.clone())
                            .or_insert(trial);
                    }
                }
            }

            *report.selections.entry(result.weakpoint_id).or_default() += 1;
            if result.is_crit {
                report.crit_count += 1;
            }
            report.total_damage += result.total_damage;
            for effect in result.effects_applied {
                *report.effects.entry(effect.effect).or_default() += 1;
            }
        }

        report.messages = sink.messages;
        tracing::info!(trials = self.trials, "simulation complete");
        report
    }
}

impl SimReport {
    /// Share of trials that struck `id`
    pub fn frequency(&self, id: &str) -> f64 {
        if self.trials > 0 {
            self.selections.get(id).copied().unwrap_or(0) as f64 / self.trials as f64
        } else {
            0.0
        }
    }

    /// Calculate average damage per hit
    pub fn avg_damage(&self) -> f64 {
        if self.trials > 0 {
            self.total_damage / self.trials as f64
        } else {
            0.0
        }
    }

    /// Plain-text report, one line per weak point and effect
    pub fn render(&self) -> String {
        let mut lines = vec![format!("{} trials", self.trials)];

        lines.push("Weak points:".to_string());
        for (id, count) in &self.selections {
            let label = if id.is_empty() { "(default)" } else { id.as_str() };
            lines.push(format!(
                "  {:<16} {:>7} {:>6.2}%",
                label,
                count,
                self.frequency(id) * 100.0
            ));
        }

        lines.push(format!("Crits: {}", self.crit_count));
        lines.push(format!("Mean damage: {:.2}", self.avg_damage()));

        if !self.effects.is_empty() {
            lines.push("Effects:".to_string());
            for (effect, count) in &self.effects {
                lines.push(format!("  {:<16} {:>7}", effect, count));
            }
        }
        if self.messages > 0 {
            lines.push(format!("Messages: {}", self.messages));
        }
        if !self.learned.is_empty() {
            lines.push("Proficiencies learned:".to_string());
            for (proficiency, trial) in &self.learned {
                lines.push(format!("  {:<16} trial {}", proficiency, trial));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use weakpoint_core::config::parse_toml;

    const SCENARIO: &str = r#"
seed = 7
trials = 2000

[catalog]
effects = ["stunned"]

[attacker]
melee = 5.0

[target]
max_health = 100.0

[attack]
damage = [{ type = "stab", amount = 20.0 }]
resistances = { all = 5.0 }

[[weakpoints]]
id = "eye"
coverage = 10.0
difficulty = { stab = 3.0 }
damage_mult = { all = 2.0 }

[[weakpoints.effects]]
effect = "stunned"
"#;

    fn simulation() -> Simulation {
        let scenario: Scenario = parse_toml(SCENARIO).unwrap();
        Simulation::new(&scenario).unwrap()
    }

    #[test]
    fn test_run_frequencies() {
        let report = simulation().run();

        assert_eq!(report.trials, 2000);
        assert_eq!(report.selections.values().sum::<u32>(), 2000);
        assert!((report.frequency("eye") - 0.10).abs() < 0.03);
        assert_eq!(report.effects.get("stunned"), report.selections.get("eye"));
        assert_eq!(report.crit_count, 0);

        // 15 on the default, 30 on the eye
        let eye = report.frequency("eye");
        let expected = 15.0 * (1.0 - eye) + 30.0 * eye;
        assert!((report.avg_damage() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_same_seed_same_report() {
        let simulation = simulation();
        assert_eq!(simulation.run(), simulation.run());
    }

    #[test]
    fn test_render_lists_default_and_effects() {
        let rendered = simulation().run().render();
        assert!(rendered.starts_with("2000 trials"));
        assert!(rendered.contains("(default)"));
        assert!(rendered.contains("stunned"));
    }

    #[test]
    fn test_practice_learns_mid_run() {
        let toml = r#"
seed = 3
trials = 10

[catalog]
proficiencies = ["prof_wp_zombie"]

[attacker]
melee = 1.0
learn_seconds = 120

[target]
max_health = 100.0

[attack]
damage = [{ type = "cut", amount = 10.0 }]

[[families]]
proficiency = "prof_wp_zombie"
bonus = 2.0
penalty = 2.0

[practice]
hit_seconds = 60

[[weakpoints]]
id = "neck"
coverage = 100.0
difficulty = { all = 0.0 }
"#;
        let scenario: Scenario = parse_toml(toml).unwrap();
        let simulation = Simulation::new(&scenario).unwrap();

        // Skill 1 with the 2 point penalty never reaches the neck, so
        // there are no hits to practice on
        let report = simulation.run();
        assert!(report.learned.is_empty());
        assert_eq!(report.frequency(""), 1.0);

        let mut scenario = scenario;
        scenario.families[0].penalty = None;
        let report = Simulation::new(&scenario).unwrap().run();

        // Every trial hits the neck; two minutes of practice is two hits
        assert_eq!(report.frequency("neck"), 1.0);
        assert_eq!(report.learned.get("prof_wp_zombie"), Some(&2));
        assert!(report.render().contains("Proficiencies learned:"));
    }

    #[test]
    fn test_bundled_scenario_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/zombie.toml");
        let scenario = Scenario::load(&path).unwrap();
        let report = Simulation::new(&scenario).unwrap().run();
        assert_eq!(report.selections.values().sum::<u32>(), report.trials);
        assert!(report.learned.contains_key("prof_wp_zombie"));
        assert!(report.frequency("rotten_gut") > 0.0);
    }
}
