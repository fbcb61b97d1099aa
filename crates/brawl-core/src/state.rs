//! Match state snapshot — the complete visible state produced each tick.
//!
//! The animation player, HUD, and orchestrator all read from this; nothing
//! outside the engine mutates fighter state directly.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::FeedbackEvent;
use crate::types::{FighterId, SimTime};

/// Complete match state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub phase: MatchPhase,
    pub fighters: Vec<FighterView>,
    /// Set once the opposing fighter is defeated; never reverts in a match.
    pub winner: Option<FighterId>,
    pub events: Vec<FeedbackEvent>,
}

/// Action-legality gates. All true at spawn and after a combo clears or a
/// reaction ends; all false while an attack or reaction is in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ActionGates {
    pub can_move: bool,
    pub can_attack: bool,
    pub can_block: bool,
    pub can_jump: bool,
    pub can_duck: bool,
    pub can_add_next_combo_attack: bool,
}

impl Default for ActionGates {
    fn default() -> Self {
        Self {
            can_move: true,
            can_attack: true,
            can_block: true,
            can_jump: true,
            can_duck: true,
            can_add_next_combo_attack: true,
        }
    }
}

impl ActionGates {
    /// True when every gate (bar the combo window) is open.
    pub fn all_open(&self) -> bool {
        self.can_move && self.can_attack && self.can_block && self.can_jump && self.can_duck
    }
}

/// Body-part "just hit" flashes consumed by the health-bar HUD.
/// Set by the damage resolver, cleared only by `ClearHitFlags`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HitFlags {
    pub head: bool,
    pub torso: bool,
    pub left_arm: bool,
    pub right_arm: bool,
    pub left_leg: bool,
    pub right_leg: bool,
}

/// Per-category damage-potential multipliers (chest shares the torso slot).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PotentialView {
    pub head: f32,
    pub torso: f32,
    pub left_arm: f32,
    pub right_arm: f32,
    pub left_leg: f32,
    pub right_leg: f32,
}

impl Default for PotentialView {
    fn default() -> Self {
        Self {
            head: crate::constants::POTENTIAL_START,
            torso: crate::constants::POTENTIAL_START,
            left_arm: crate::constants::POTENTIAL_START,
            right_arm: crate::constants::POTENTIAL_START,
            left_leg: crate::constants::POTENTIAL_START,
            right_leg: crate::constants::POTENTIAL_START,
        }
    }
}

/// One fighter's visible state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FighterView {
    pub id: FighterId,

    // --- Vitals ---
    pub health: f32,
    pub defeated: bool,
    pub potential: PotentialView,
    pub hit_flags: HitFlags,

    // --- Posture & input flags (read by the animation player) ---
    pub is_attacking: bool,
    pub is_blocking: bool,
    pub is_ducking: bool,
    pub is_running: bool,
    pub airborne: bool,
    pub gates: ActionGates,

    // --- Combo & reaction ---
    /// Concatenated token codes, e.g. "212" (montage selection key).
    pub combo_sequence: String,
    pub reaction: Reaction,
    /// Move identifier of the strike window currently or last open.
    pub current_move: Option<AttackMove>,

    // --- Strike state ---
    /// Fist regions are collidable (punch window open).
    pub fists_live: bool,
    /// Foot regions are collidable (kick window open).
    pub feet_live: bool,
    /// Impact speed of the last connecting strike this fighter landed.
    pub last_attack_impact_speed: f32,
    /// Points this fighter scored with its last combo of strikes.
    pub last_attack_points: i32,

    // --- Transform & animation ---
    pub position: Vec3,
    pub forward: Vec3,
    /// Smoothed speed for the idle/walk blend space, signed by direction.
    pub animation_speed: f32,
    /// Foot world positions snapshotted at the last combo commit (IK).
    pub foot_left: Vec3,
    pub foot_right: Vec3,
    /// Which camera the renderer should use for this fighter.
    pub use_follow_camera: bool,
}
