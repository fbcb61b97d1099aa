//! Reaction Selector — picks the victim's reaction animation token and
//! locks out the victim's other actions.
//!
//! Selection keys purely off the attacking move's identity plus the
//! behind check; the impact force and point are accepted from the adapter
//! but deliberately unused by this generation of the logic.

use glam::Vec3;

use brawl_core::constants::BEHIND_COSINE_THRESHOLD;
use brawl_core::enums::{AttackMove, BodyRegion, Reaction};
use brawl_core::regions;

use crate::fighter::Fighter;

/// Start a reaction on `victim` for a strike to `region`.
///
/// Returns the reaction chosen, or `None` when the hit was suppressed by
/// an unbroken guard or lost the same-tick tie-break. Even a `NoReact`
/// selection locks the victim's gates until `reaction_end`.
pub fn reaction_start(
    victim: &mut Fighter,
    attacker_position: Vec3,
    attack: Option<AttackMove>,
    region: BodyRegion,
    _impact_speed: f32,
    _impact_point: Vec3,
    now: f64,
) -> Option<Reaction> {
    let category = regions::damage_category(region);

    // Mirror of the damage-absorption rule: a held guard stays visually
    // unbroken for head/torso hits.
    if victim.is_blocking && category.guardable() && victim.guard_recent(now) {
        return None;
    }

    // Two overlaps landing the same tick: first event wins.
    if victim.reaction_begun_at == Some(now) {
        return None;
    }

    // Taking the hit force-exits an ineffective block.
    if victim.is_blocking {
        victim.is_blocking = false;
    }

    let reaction = if is_behind(victim, attacker_position) {
        Reaction::Back
    } else {
        attack
            .and_then(|m| regions::reaction_for(category, m))
            .unwrap_or(Reaction::NoReact)
    };

    victim.reaction = reaction;
    victim.reaction_begun_at = Some(now);

    // Uninterruptible reaction window, even when no flinch plays.
    victim.gates.can_move = false;
    victim.gates.can_attack = false;
    victim.gates.can_block = false;
    victim.gates.can_jump = false;
    victim.gates.can_duck = false;

    Some(reaction)
}

/// Classify the attacker as behind the victim from the cosine between the
/// victim's forward vector and the victim-to-attacker direction.
fn is_behind(victim: &Fighter, attacker_position: Vec3) -> bool {
    let mut to_attacker = attacker_position - victim.position;
    to_attacker.z = 0.0;
    let Some(dir) = to_attacker.try_normalize() else {
        return false;
    };
    victim.forward.dot(dir) < BEHIND_COSINE_THRESHOLD
}
