//! Hit resolution - Apply a weak point to one incoming hit

use super::result::WeakpointHitResult;
use crate::attack::{StatusEffectSink, WeakpointAttack};
use crate::damage::{DamageInstance, Resistances};
use crate::weakpoint::{WeakpointFamilies, Weakpoints};
use rand::Rng;

/// Resolve a hit against a target's weak points
///
/// The order is fixed:
/// 1. Select the weak point struck
/// 2. Rescale a copy of the target's resistances by its armor modifiers
/// 3. Mitigate the damage with the rescaled resistances
/// 4. Apply its damage multipliers (crit multipliers on a crit)
/// 5. Roll its effects against the final total
pub fn resolve_weakpoint_hit(
    weakpoints: &Weakpoints,
    families: &WeakpointFamilies,
    attack: &WeakpointAttack<'_>,
    damage: &DamageInstance,
    resistances: &Resistances,
    sink: &mut dyn StatusEffectSink,
) -> WeakpointHitResult {
    let mut rng = rand::thread_rng();
    resolve_weakpoint_hit_with_rng(
        weakpoints,
        families,
        attack,
        damage,
        resistances,
        sink,
        &mut rng,
    )
}

/// Resolve a hit with a provided RNG (for deterministic testing)
pub fn resolve_weakpoint_hit_with_rng(
    weakpoints: &Weakpoints,
    families: &WeakpointFamilies,
    attack: &WeakpointAttack<'_>,
    damage: &DamageInstance,
    resistances: &Resistances,
    sink: &mut dyn StatusEffectSink,
    rng: &mut impl Rng,
) -> WeakpointHitResult {
    let weakpoint = weakpoints.select_weakpoint(attack, families, rng);

    let mut armor = *resistances;
    weakpoint.apply_to_resistances(&mut armor);

    let mut final_damage = damage.clone();
    let mitigated = armor.mitigate(&mut final_damage);

    weakpoint.apply_to_damage(&mut final_damage, attack.is_crit);
    let total_damage = final_damage.total();

    let effects_applied = weakpoint.apply_effects(sink, total_damage, attack, rng);

    tracing::debug!(
        weakpoint = %weakpoint.id,
        total_damage,
        mitigated,
        is_crit = attack.is_crit,
        effects = effects_applied.len(),
        "weakpoint hit resolved"
    );

    WeakpointHitResult {
        weakpoint_id: weakpoint.id.clone(),
        weakpoint_name: weakpoint.name.clone(),
        damage: final_damage,
        total_damage,
        mitigated,
        is_crit: attack.is_crit,
        effects_applied,
    }
}
