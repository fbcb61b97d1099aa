//! Watchdog system — fallback timeouts for animation-end notifications
//! that never arrive.
//!
//! A reaction or attack window whose end notification is lost would leave
//! the fighter permanently locked; these timers compare stored timestamps
//! against the simulation clock and force the recovery path.

use brawl_core::constants::{ATTACK_LOCK_TIMEOUT_SECS, REACTION_TIMEOUT_SECS};
use brawl_core::enums::Reaction;
use brawl_core::events::FeedbackEvent;

use crate::fighter::Fighter;

/// Force-end stale reactions and attack locks.
pub fn run(fighters: &mut [Fighter; 2], now: f64, events: &mut Vec<FeedbackEvent>) {
    for fighter in fighters.iter_mut() {
        if fighter.reaction != Reaction::NoReact {
            if let Some(begun) = fighter.reaction_begun_at {
                if now - begun > REACTION_TIMEOUT_SECS {
                    fighter.reaction_end();
                    events.push(FeedbackEvent::ReactionTimedOut {
                        fighter: fighter.id,
                    });
                }
            }
        }

        // Keyed off the lock timestamp alone: an opened combo window does
        // not unlock movement, so a lost ComboClear must still time out.
        if let Some(locked) = fighter.attack_locked_since {
            if now - locked > ATTACK_LOCK_TIMEOUT_SECS {
                fighter.clear_combo();
                events.push(FeedbackEvent::AttackLockTimedOut {
                    fighter: fighter.id,
                });
            }
        }
    }
}
