//! Contact resolution — drains the queued weapon/damage-region overlaps
//! and applies damage and reactions on the struck fighter.
//!
//! Runs at a fixed point in the tick, after velocity sampling, so every
//! contact reads the freshest impact speed. All cross-fighter mutation in
//! the engine happens here, single-threaded.

use glam::Vec3;

use brawl_core::enums::{BodyRegion, Reaction, WeaponRegion};
use brawl_core::events::FeedbackEvent;
use brawl_core::regions;
use brawl_core::types::FighterId;

use crate::fighter::Fighter;
use crate::systems::damage::{self, DamageOutcome};
use crate::systems::{pair_mut, reaction};

/// One queued weapon-region/damage-region overlap.
#[derive(Debug, Clone, Copy)]
pub struct PendingContact {
    pub attacker: FighterId,
    pub weapon: WeaponRegion,
    pub victim: FighterId,
    pub region: BodyRegion,
    pub impact_point: Vec3,
}

/// Drain the contact queue, resolving damage then reaction per contact.
pub fn run(
    fighters: &mut [Fighter; 2],
    queue: &mut Vec<PendingContact>,
    now: f64,
    events: &mut Vec<FeedbackEvent>,
) {
    for contact in queue.drain(..) {
        // The adapter filters self-overlaps; treat any that slip through
        // as a policy no-op.
        if contact.attacker == contact.victim {
            continue;
        }
        let (attacker, victim) = pair_mut(
            fighters,
            contact.attacker.index(),
            contact.victim.index(),
        );

        // Stale event from a window that already closed.
        if !attacker.weapon_live(contact.weapon) {
            continue;
        }

        let impact_speed = attacker.weapon_speed(contact.weapon);
        let attack = attacker.current_move;
        let attacker_position = attacker.position;
        let category = regions::damage_category(contact.region);
        let was_defeated = victim.defeated;

        let outcome = damage::inflict_damage(victim, attacker, contact.region, impact_speed, now);

        match outcome {
            DamageOutcome::Absorbed => {
                events.push(FeedbackEvent::HitBlocked {
                    attacker: contact.attacker,
                    victim: contact.victim,
                    category,
                });
                // The guard also suppresses the reaction; nothing more to do.
                continue;
            }
            DamageOutcome::OnCooldown => {
                events.push(FeedbackEvent::HitIgnoredCooldown {
                    victim: contact.victim,
                    category,
                });
            }
            DamageOutcome::Applied(_) => {}
        }

        // Reactions are not deduplicated by the damage cooldown; a
        // cooldown-suppressed hit still staggers.
        let chosen = reaction::reaction_start(
            victim,
            attacker_position,
            attack,
            contact.region,
            impact_speed,
            contact.impact_point,
            now,
        );

        if let DamageOutcome::Applied(amount) = outcome {
            events.push(FeedbackEvent::HitLanded {
                attacker: contact.attacker,
                victim: contact.victim,
                category,
                damage: amount,
                impact_speed,
                reaction: chosen.unwrap_or(Reaction::NoReact),
            });
            if victim.defeated && !was_defeated {
                events.push(FeedbackEvent::FighterDefeated {
                    fighter: contact.victim,
                });
            }
        }
    }
}
