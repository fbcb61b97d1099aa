//! Damage Resolver — converts a weapon/damage-region overlap plus impact
//! speed into a health deduction, with guard absorption, per-category
//! cooldown, and damage-potential escalation.

use brawl_core::constants::*;
use brawl_core::enums::BodyRegion;
use brawl_core::regions;

use crate::fighter::Fighter;

/// What the resolver did with a contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DamageOutcome {
    /// Fully absorbed by an interposed guard; no state changed.
    Absorbed,
    /// Within the per-category cooldown; ignored entirely.
    OnCooldown,
    /// Health deducted by this amount.
    Applied(f32),
}

/// Resolve damage on `victim` for a strike to `region` at `impact_speed`,
/// crediting `attacker`'s telemetry on success.
pub fn inflict_damage(
    victim: &mut Fighter,
    attacker: &mut Fighter,
    region: BodyRegion,
    impact_speed: f32,
    now: f64,
) -> DamageOutcome {
    let category = regions::damage_category(region);
    let key = category.damage_key();

    // A block only absorbs head/torso hits while the guarding arms are
    // actually interposed.
    if victim.is_blocking && category.guardable() && victim.guard_recent(now) {
        return DamageOutcome::Absorbed;
    }

    // Per-category cooldown stops one sustained overlap from counting
    // every tick.
    if now - victim.last_damage_taken[key.index()] < DAMAGE_COOLDOWN_SECS {
        return DamageOutcome::OnCooldown;
    }

    let damage = regions::base_damage(key) * victim.potential[key.index()] * impact_speed
        / DAMAGE_REFERENCE_SPEED;

    victim.health = (victim.health - damage).max(0.0);
    if victim.health <= 0.0 && !victim.defeated {
        victim.defeat();
    }

    let increment =
        POTENTIAL_INCREMENT.max(POTENTIAL_INCREMENT * impact_speed / POTENTIAL_REFERENCE_SPEED);
    victim.potential[key.index()] = (victim.potential[key.index()] + increment).min(POTENTIAL_CAP);

    victim.last_damage_taken[key.index()] = now;
    mark_hit_flag(victim, key);

    attacker.last_attack_points += (damage * 1000.0).round() as i32;
    if impact_speed > attacker.last_attack_impact_speed {
        attacker.last_attack_impact_speed = impact_speed;
    }

    DamageOutcome::Applied(damage)
}

/// Set the HUD flash flag for the damage key of the struck category.
fn mark_hit_flag(victim: &mut Fighter, key: brawl_core::enums::DamageCategory) {
    use brawl_core::enums::DamageCategory::*;
    match key {
        Head => victim.hit_flags.head = true,
        Chest | Torso => victim.hit_flags.torso = true,
        LeftArm => victim.hit_flags.left_arm = true,
        RightArm => victim.hit_flags.right_arm = true,
        LeftLeg => victim.hit_flags.left_leg = true,
        RightLeg => victim.hit_flags.right_leg = true,
    }
}
