//! Commands sent into the match engine by its three collaborators:
//! the input adapter, the animation player, and the physics/collision
//! adapter.
//!
//! Commands are queued and processed at the next tick boundary. Contact
//! commands are deferred further, to a fixed point in the tick after
//! weapon velocities have been sampled.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::FighterId;

/// Everything the outside world can tell the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchCommand {
    // --- Match control ---
    /// Start (or restart) the match: spawn both fighters with default
    /// stats and mutual targets.
    StartMatch,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,

    // --- Input adapter ---
    /// A discrete button was pressed.
    Press { fighter: FighterId, key: ActionKey },
    /// A discrete button was released.
    Release { fighter: FighterId, key: ActionKey },
    /// Held movement axes, camera-relative. Values in [-1, 1].
    SetMoveAxis {
        fighter: FighterId,
        forward: f32,
        right: f32,
    },

    // --- Animation player notifications ---
    /// The current attack clip is near its end; the next combo input may
    /// be captured without unlocking movement.
    ComboWindowOpen { fighter: FighterId },
    /// The combo chain timed out with no further input.
    ComboClear { fighter: FighterId },
    /// A punch strike window opened: fists become collidable and their
    /// velocities are tracked.
    PunchWindowBegin {
        fighter: FighterId,
        attack: AttackMove,
    },
    /// The punch strike window closed.
    PunchWindowEnd { fighter: FighterId },
    /// A kick strike window opened: feet become collidable and their
    /// velocities are tracked.
    KickWindowBegin {
        fighter: FighterId,
        attack: AttackMove,
    },
    /// The kick strike window closed.
    KickWindowEnd { fighter: FighterId },
    /// The reaction animation finished playing.
    ReactionEnd { fighter: FighterId },

    // --- Physics/collision adapter ---
    /// Per-tick world positions of the four weapon regions, read off the
    /// posed skeleton.
    LimbSample {
        fighter: FighterId,
        left_fist: Vec3,
        right_fist: Vec3,
        left_foot: Vec3,
        right_foot: Vec3,
    },
    /// A weapon region of `attacker` began overlapping a damage region of
    /// `victim`. The adapter filters out non-fighter and self overlaps.
    WeaponContact {
        attacker: FighterId,
        weapon: WeaponRegion,
        victim: FighterId,
        region: BodyRegion,
        impact_point: Vec3,
    },
    /// The overlap above ended.
    WeaponContactEnd {
        attacker: FighterId,
        weapon: WeaponRegion,
        victim: FighterId,
        region: BodyRegion,
    },
    /// Something began overlapping one of `fighter`'s damage regions
    /// (used for guard detection on the arm regions).
    GuardOverlapBegin {
        fighter: FighterId,
        region: BodyRegion,
    },
    /// The damage-region overlap ended.
    GuardOverlapEnd {
        fighter: FighterId,
        region: BodyRegion,
    },

    // --- UI ---
    /// The HUD consumed the body-part hit flashes; reset the flags.
    ClearHitFlags { fighter: FighterId },
}
