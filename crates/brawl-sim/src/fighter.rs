//! The Fighter aggregate — per-fighter state and the input-driven
//! action state machine.
//!
//! A Fighter is plain data plus the press/release/notification transitions
//! that gate which actions are legal. Cross-fighter resolution (damage,
//! reactions) lives in the systems, not here.

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use brawl_core::constants::*;
use brawl_core::enums::*;
use brawl_core::state::{ActionGates, HitFlags};
use brawl_core::types::FighterId;

/// Kinematic tracking state for one weapon region.
///
/// `sample` is the latest adapter-fed world position; `last` is the
/// previous tick's position, used as the finite-difference baseline while
/// the region's strike window is open.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeaponTrack {
    pub sample: Option<Vec3>,
    pub last: Option<Vec3>,
    /// Instantaneous speed (units/s), updated while the window is open.
    pub speed: f32,
    /// Peak speed during the current strike window; readable until the
    /// next window arms.
    pub peak: f32,
}

/// One fighter's complete simulation state.
#[derive(Debug, Clone)]
pub struct Fighter {
    pub id: FighterId,
    /// The opposing fighter; set once at match start.
    pub target_enemy: Option<FighterId>,

    // --- Vitals ---
    /// Health as a fraction of max, floored at 0.
    pub health: f32,
    /// Latches true when health reaches 0; never reverts within a match.
    pub defeated: bool,
    /// Per damage-key escalation multipliers (chest shares the torso slot).
    pub potential: [f32; DamageCategory::ALL.len()],
    /// Sim-clock timestamp of the last damaging hit per damage key.
    pub last_damage_taken: [f64; DamageCategory::ALL.len()],
    pub hit_flags: HitFlags,

    // --- Action legality ---
    pub gates: ActionGates,

    // --- Transient input flags ---
    pub is_attacking: bool,
    pub is_blocking: bool,
    pub is_ducking: bool,
    pub is_running: bool,
    pub move_mod_held: bool,
    pub taunt_held: bool,
    attack_primary_held: bool,
    attack_secondary_held: bool,

    // --- Combo ---
    pub combo: Vec<ComboToken>,
    /// When the current attack lock began (watchdog fallback).
    pub attack_locked_since: Option<f64>,

    // --- Reaction ---
    pub reaction: Reaction,
    /// When the current reaction began; doubles as the same-tick
    /// tie-break (first contact wins) and the watchdog baseline.
    pub reaction_begun_at: Option<f64>,

    // --- Guard / overlap bookkeeping ---
    pub damage_box_overlapping: [bool; BodyRegion::ALL.len()],
    /// Sim-clock timestamp an arm region was last overlapped.
    pub last_arms_overlap: f64,

    // --- Strike state ---
    /// Move identifier of the strike window currently or last open.
    pub current_move: Option<AttackMove>,
    pub fists_live: bool,
    pub feet_live: bool,
    pub weapons: [WeaponTrack; WeaponRegion::ALL.len()],
    pub last_attack_impact_speed: f32,
    pub last_attack_points: i32,

    // --- Transform & locomotion ---
    pub position: Vec3,
    /// Horizontal facing direction, unit length.
    pub forward: Vec3,
    pub horizontal_velocity: Vec3,
    pub vertical_speed: f32,
    pub airborne: bool,
    pub move_axis_forward: f32,
    pub move_axis_right: f32,
    /// Smoothed speed magnitude for the idle/walk blend space.
    pub speed_for_animation: f32,
    /// Signed blend-space speed (negative when moving backwards).
    pub animation_speed: f32,
    /// Foot world positions snapshotted at the last combo commit (IK).
    pub foot_left: Vec3,
    pub foot_right: Vec3,
    pub use_follow_camera: bool,
}

impl Fighter {
    /// Create a fighter at a spawn transform with default stats.
    pub fn new(id: FighterId, position: Vec3, forward: Vec3) -> Self {
        Self {
            id,
            target_enemy: None,
            health: MAX_HEALTH,
            defeated: false,
            potential: [POTENTIAL_START; DamageCategory::ALL.len()],
            last_damage_taken: [f64::NEG_INFINITY; DamageCategory::ALL.len()],
            hit_flags: HitFlags::default(),
            gates: ActionGates::default(),
            is_attacking: false,
            is_blocking: false,
            is_ducking: false,
            is_running: false,
            move_mod_held: false,
            taunt_held: false,
            attack_primary_held: false,
            attack_secondary_held: false,
            combo: Vec::new(),
            attack_locked_since: None,
            reaction: Reaction::NoReact,
            reaction_begun_at: None,
            damage_box_overlapping: [false; BodyRegion::ALL.len()],
            last_arms_overlap: f64::NEG_INFINITY,
            current_move: None,
            fists_live: false,
            feet_live: false,
            weapons: [WeaponTrack::default(); WeaponRegion::ALL.len()],
            last_attack_impact_speed: 0.0,
            last_attack_points: 0,
            position,
            forward: forward.normalize_or_zero(),
            horizontal_velocity: Vec3::ZERO,
            vertical_speed: 0.0,
            airborne: false,
            move_axis_forward: 0.0,
            move_axis_right: 0.0,
            speed_for_animation: 0.0,
            animation_speed: 0.0,
            foot_left: position,
            foot_right: position,
            use_follow_camera: true,
        }
    }

    // --- Input state machine ---

    /// Handle a button press. Returns the combo token appended, if any.
    pub fn press(&mut self, key: ActionKey, now: f64, rng: &mut ChaCha8Rng) -> Option<ComboToken> {
        match key {
            ActionKey::AttackPrimary => return self.attack_pressed(true, now, rng),
            ActionKey::AttackSecondary => return self.attack_pressed(false, now, rng),
            ActionKey::Block => {
                if !self.defeated && self.gates.can_block && !self.airborne {
                    self.is_blocking = true;
                    self.gates.can_move = false;
                    self.gates.can_attack = false;
                    self.gates.can_jump = false;
                    self.gates.can_duck = false;
                }
            }
            ActionKey::Duck => {
                if !self.defeated && self.gates.can_duck && !self.airborne {
                    self.is_ducking = true;
                    self.gates.can_move = false;
                    self.gates.can_jump = false;
                    self.gates.can_block = false;
                }
            }
            ActionKey::Jump => {
                if !self.defeated && self.gates.can_jump && !self.airborne {
                    self.vertical_speed = JUMP_SPEED;
                    self.airborne = true;
                }
            }
            ActionKey::Run => self.is_running = true,
            ActionKey::MoveModifier => self.move_mod_held = true,
            ActionKey::Taunt => self.taunt_held = true,
            ActionKey::ChangeCamera => self.use_follow_camera = !self.use_follow_camera,
        }
        None
    }

    /// Handle a button release.
    pub fn release(&mut self, key: ActionKey) {
        match key {
            ActionKey::AttackPrimary => {
                self.attack_primary_held = false;
                self.is_attacking = false;
            }
            ActionKey::AttackSecondary => {
                self.attack_secondary_held = false;
                self.is_attacking = false;
            }
            ActionKey::Block => {
                if self.is_blocking {
                    self.is_blocking = false;
                    self.gates.can_move = true;
                    self.gates.can_attack = true;
                    self.gates.can_jump = true;
                    self.gates.can_duck = true;
                }
            }
            ActionKey::Duck => {
                if self.is_ducking {
                    self.is_ducking = false;
                    self.gates.can_move = true;
                    self.gates.can_jump = true;
                    self.gates.can_block = true;
                }
            }
            ActionKey::Run => self.is_running = false,
            ActionKey::MoveModifier => self.move_mod_held = false,
            ActionKey::Taunt => self.taunt_held = false,
            ActionKey::Jump | ActionKey::ChangeCamera => {}
        }
    }

    /// Shared attack-press path for the primary/secondary buttons.
    ///
    /// Committing a sub-move locks movement, block, jump, and duck until
    /// the combo clears; `can_attack` stays open so the next combo input
    /// can be captured once the animation player reopens the window.
    fn attack_pressed(
        &mut self,
        primary: bool,
        now: f64,
        rng: &mut ChaCha8Rng,
    ) -> Option<ComboToken> {
        if self.defeated || !self.gates.can_attack || self.airborne {
            return None;
        }
        let held = if primary {
            &mut self.attack_primary_held
        } else {
            &mut self.attack_secondary_held
        };
        let mut appended = None;
        if !*held {
            if self.gates.can_add_next_combo_attack {
                let token = self.select_token(primary, rng);
                self.combo.push(token);
                self.gates.can_add_next_combo_attack = false;
                self.gates.can_move = false;
                self.gates.can_block = false;
                self.gates.can_jump = false;
                self.gates.can_duck = false;
                self.attack_locked_since = Some(now);
                self.snapshot_feet();
                appended = Some(token);
            }
            if primary {
                self.attack_primary_held = true;
            } else {
                self.attack_secondary_held = true;
            }
        }
        self.is_attacking = true;
        appended
    }

    /// Pick the combo token for an attack press.
    ///
    /// Priority: ducking, then taunt, then move-modifier, then plain
    /// continuation. Taunt and modifier only open a fresh combo; held
    /// mid-combo they have no effect on subsequent tokens.
    fn select_token(&self, primary: bool, rng: &mut ChaCha8Rng) -> ComboToken {
        if self.is_ducking {
            return if primary {
                ComboToken::DuckPrimary
            } else {
                ComboToken::DuckSecondary
            };
        }
        if self.combo.is_empty() {
            if self.taunt_held {
                return if primary {
                    if rng.gen_bool(TAUNT_PRIMARY_BASE_CHANCE) {
                        ComboToken::TauntPrimary
                    } else {
                        ComboToken::TauntPrimaryAlt
                    }
                } else if rng.gen_bool(TAUNT_SECONDARY_BASE_CHANCE) {
                    ComboToken::TauntSecondary
                } else {
                    ComboToken::TauntSecondaryAlt
                };
            }
            if self.move_mod_held {
                return if primary {
                    ComboToken::ModPrimary
                } else {
                    ComboToken::ModSecondary
                };
            }
        }
        if primary {
            ComboToken::StrikePrimary
        } else {
            ComboToken::StrikeSecondary
        }
    }

    // --- Animation player notifications ---

    /// The combo chain timed out: empty the accumulator and reopen every
    /// gate.
    pub fn clear_combo(&mut self) {
        self.combo.clear();
        self.attack_locked_since = None;
        if self.defeated {
            return;
        }
        self.gates = ActionGates::default();
    }

    /// The reaction animation finished: clear the token and reopen the
    /// gates. A blocking posture that survived the hit is exited here.
    pub fn reaction_end(&mut self) {
        self.reaction = Reaction::NoReact;
        self.reaction_begun_at = None;
        if self.is_blocking {
            self.is_blocking = false;
        }
        if self.defeated {
            return;
        }
        self.gates.can_move = true;
        self.gates.can_attack = true;
        self.gates.can_block = true;
        self.gates.can_jump = true;
        self.gates.can_duck = true;
    }

    // --- Strike windows ---

    /// Open a strike window: the matching weapon regions become collidable
    /// and their velocity tracking arms with the current positions as
    /// baseline. Resets strike telemetry.
    pub fn strike_window_begin(&mut self, kind: WeaponKind, attack: AttackMove) {
        self.current_move = Some(attack);
        self.last_attack_impact_speed = 0.0;
        self.last_attack_points = 0;
        match kind {
            WeaponKind::Punch => self.fists_live = true,
            WeaponKind::Kick => self.feet_live = true,
        }
        for region in WeaponRegion::ALL {
            if brawl_core::regions::weapon_kind(region) == kind {
                let track = &mut self.weapons[region.index()];
                track.peak = 0.0;
                track.speed = 0.0;
                track.last = track.sample;
            }
        }
    }

    /// Close a strike window. Speeds and peak stay readable until the next
    /// window arms, since the opposing fighter resolves damage from them.
    pub fn strike_window_end(&mut self, kind: WeaponKind) {
        match kind {
            WeaponKind::Punch => self.fists_live = false,
            WeaponKind::Kick => self.feet_live = false,
        }
    }

    /// Whether the given weapon region is currently collidable.
    pub fn weapon_live(&self, weapon: WeaponRegion) -> bool {
        match brawl_core::regions::weapon_kind(weapon) {
            WeaponKind::Punch => self.fists_live,
            WeaponKind::Kick => self.feet_live,
        }
    }

    /// Instantaneous tracked speed of a weapon region.
    pub fn weapon_speed(&self, weapon: WeaponRegion) -> f32 {
        self.weapons[weapon.index()].speed
    }

    /// Peak speed of a weapon region during its last strike window.
    pub fn weapon_peak_speed(&self, weapon: WeaponRegion) -> f32 {
        self.weapons[weapon.index()].peak
    }

    /// Store the adapter-fed limb positions for this tick.
    pub fn set_limb_samples(
        &mut self,
        left_fist: Vec3,
        right_fist: Vec3,
        left_foot: Vec3,
        right_foot: Vec3,
    ) {
        self.weapons[WeaponRegion::LeftFist.index()].sample = Some(left_fist);
        self.weapons[WeaponRegion::RightFist.index()].sample = Some(right_fist);
        self.weapons[WeaponRegion::LeftFoot.index()].sample = Some(left_foot);
        self.weapons[WeaponRegion::RightFoot.index()].sample = Some(right_foot);
    }

    // --- Guard bookkeeping ---

    /// A damage region began overlapping something; arm regions refresh
    /// the guard grace window.
    pub fn guard_overlap_begin(&mut self, region: BodyRegion, now: f64) {
        self.damage_box_overlapping[region.index()] = true;
        if brawl_core::regions::is_guard_region(region) {
            self.last_arms_overlap = now;
        }
    }

    /// The damage-region overlap ended.
    pub fn guard_overlap_end(&mut self, region: BodyRegion) {
        self.damage_box_overlapping[region.index()] = false;
    }

    /// Whether an arm overlap was registered within the guard grace
    /// window — i.e. the guard is actually interposed.
    pub fn guard_recent(&self, now: f64) -> bool {
        now - self.last_arms_overlap <= GUARD_GRACE_SECS
    }

    // --- Defeat ---

    /// Latch defeat: every action is permanently disabled for the rest of
    /// the match; the fighter persists for animation/physics purposes.
    pub fn defeat(&mut self) {
        self.defeated = true;
        self.gates.can_move = false;
        self.gates.can_attack = false;
        self.gates.can_block = false;
        self.gates.can_jump = false;
        self.gates.can_duck = false;
        self.is_attacking = false;
        self.is_blocking = false;
        self.is_ducking = false;
        self.is_running = false;
    }

    // --- Helpers ---

    /// Concatenated montage-selection codes of the current combo.
    pub fn combo_sequence(&self) -> String {
        self.combo.iter().map(|t| t.code()).collect()
    }

    fn snapshot_feet(&mut self) {
        if let Some(p) = self.weapons[WeaponRegion::LeftFoot.index()].sample {
            self.foot_left = p;
        }
        if let Some(p) = self.weapons[WeaponRegion::RightFoot.index()].sample {
            self.foot_right = p;
        }
    }
}
