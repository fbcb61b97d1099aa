//! Events emitted by the simulation for UI, audio, and diagnostics.
//!
//! The engine has no logger; anything worth surfacing is an event carried
//! in the next snapshot.

use serde::{Deserialize, Serialize};

use crate::enums::{ComboToken, DamageCategory, Reaction};
use crate::types::FighterId;

/// Feedback events for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeedbackEvent {
    /// A strike connected and deducted health.
    HitLanded {
        attacker: FighterId,
        victim: FighterId,
        category: DamageCategory,
        damage: f32,
        impact_speed: f32,
        reaction: Reaction,
    },
    /// A head/torso strike was fully absorbed by an interposed guard.
    HitBlocked {
        attacker: FighterId,
        victim: FighterId,
        category: DamageCategory,
    },
    /// A strike was ignored by the per-category damage cooldown.
    HitIgnoredCooldown {
        victim: FighterId,
        category: DamageCategory,
    },
    /// A combo input was captured and a token appended.
    ComboExtended {
        fighter: FighterId,
        token: ComboToken,
    },
    /// A fighter's health reached zero.
    FighterDefeated { fighter: FighterId },
    /// A reaction never received its end notification and was force-ended.
    ReactionTimedOut { fighter: FighterId },
    /// An attack lock never received its combo-clear and was force-cleared.
    AttackLockTimedOut { fighter: FighterId },
}
