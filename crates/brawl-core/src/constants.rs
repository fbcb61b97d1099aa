//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Near-zero delta-time guard; velocity and smoothing updates are skipped
/// below this to avoid blowing up on timing anomalies.
pub const MIN_DT: f64 = 1e-6;

// --- Health & damage ---

/// Starting health (fraction of max).
pub const MAX_HEALTH: f32 = 1.0;

/// Base damage for a head hit at the reference impact speed.
pub const BASE_DAMAGE_HEAD: f32 = 0.02;

/// Base damage for a torso (or chest) hit at the reference impact speed.
pub const BASE_DAMAGE_TORSO: f32 = 0.01;

/// Base damage for a limb hit at the reference impact speed.
pub const BASE_DAMAGE_LIMB: f32 = 0.005;

/// Impact speed (units/s) at which base damage applies unscaled.
pub const DAMAGE_REFERENCE_SPEED: f32 = 800.0;

/// Minimum gap between two damaging hits to the same category (seconds).
/// Prevents one sustained overlap from counting every tick.
pub const DAMAGE_COOLDOWN_SECS: f64 = 0.5;

// --- Damage potential escalation ---

/// Starting damage potential per category.
pub const POTENTIAL_START: f32 = 1.0;

/// Base increment applied to a category's potential every time it is hit.
pub const POTENTIAL_INCREMENT: f32 = 0.05;

/// Impact speed (units/s) at which the increment applies unscaled; faster
/// hits escalate faster.
pub const POTENTIAL_REFERENCE_SPEED: f32 = 600.0;

/// Damage potential cap.
pub const POTENTIAL_CAP: f32 = 3.0;

// --- Blocking ---

/// A block absorbs head/torso hits only if an arm region registered an
/// overlap within this window (seconds) — the guard must actually be
/// interposed.
pub const GUARD_GRACE_SECS: f64 = 1.0;

// --- Reaction selection ---

/// The attacker counts as behind the victim when the cosine between the
/// victim's forward vector and the victim-to-attacker vector is below this.
pub const BEHIND_COSINE_THRESHOLD: f32 = -0.35;

// --- Taunt variants ---

/// Probability that taunt + primary attack picks the base variant ("5").
pub const TAUNT_PRIMARY_BASE_CHANCE: f64 = 0.5;

/// Probability that taunt + secondary attack picks the base variant ("6").
pub const TAUNT_SECONDARY_BASE_CHANCE: f64 = 0.8;

// --- Locomotion ---

/// Maximum walking speed (units/s).
pub const MAX_WALK_SPEED: f32 = 40.0;

/// Maximum running speed (units/s).
pub const MAX_RUN_SPEED: f32 = 320.0;

/// Vertical launch speed of a jump (units/s).
pub const JUMP_SPEED: f32 = 600.0;

/// Gravitational acceleration (units/s²).
pub const GRAVITY: f32 = 980.0;

/// Interpolation speed for gradual rotation toward the target enemy.
pub const ROTATE_TO_TARGET_SPEED: f32 = 2.0;

// --- Animation speed smoothing ---

/// Acceleration magnitude above which the animation-facing speed is eased
/// instead of snapped (units/s²).
pub const ANIM_ACCEL_LIMIT: f32 = 120.0;

/// Easing rate used when the acceleration limit is exceeded (units/s²).
pub const ANIM_ACCEL_STEP: f32 = 100.0;

// --- Attack IK ---

/// Maximum distance at which an attack IK-targets the enemy (units).
pub const IK_MAX_RANGE: f32 = 200.0;

/// Minimum facing cosine for IK targeting; the fighter must be roughly
/// squared up to the enemy.
pub const IK_FACING_COSINE: f32 = 0.75;

// --- Watchdogs ---

/// A reaction whose end notification never arrives is force-ended after
/// this long (seconds).
pub const REACTION_TIMEOUT_SECS: f64 = 2.0;

/// An attack lock whose combo-clear notification never arrives is
/// force-cleared after this long (seconds).
pub const ATTACK_LOCK_TIMEOUT_SECS: f64 = 3.0;

// --- Match setup ---

/// Distance between the two fighters at spawn (units).
pub const SPAWN_SEPARATION: f32 = 200.0;
