//! Locomotion system: held-axis walking/running, jump arc, gradual
//! rotation toward the target enemy, and the animation-speed smoothing
//! consumed by the idle/walk blend space.

use glam::Vec3;

use brawl_core::constants::*;

use crate::fighter::Fighter;

/// Advance locomotion for both fighters by one tick.
pub fn run(fighters: &mut [Fighter; 2], dt: f32) {
    if (dt as f64) < MIN_DT {
        return;
    }
    let positions = [fighters[0].position, fighters[1].position];

    for fighter in fighters.iter_mut() {
        integrate_walk(fighter, dt);
        integrate_jump(fighter, dt);
        rotate_to_target(fighter, &positions, dt);
        smooth_animation_speed(fighter, dt);
    }
}

/// Apply the held movement axes relative to the fighter's facing.
fn integrate_walk(fighter: &mut Fighter, dt: f32) {
    if fighter.defeated || !fighter.gates.can_move {
        fighter.horizontal_velocity = Vec3::ZERO;
        return;
    }
    let right = Vec3::Z.cross(fighter.forward);
    let mut dir = fighter.forward * fighter.move_axis_forward + right * fighter.move_axis_right;
    if dir.length_squared() > 1.0 {
        dir = dir.normalize();
    }
    let max_speed = if fighter.is_running {
        MAX_RUN_SPEED
    } else {
        MAX_WALK_SPEED
    };
    fighter.horizontal_velocity = dir * max_speed;
    fighter.position += fighter.horizontal_velocity * dt;
}

/// Gravity integration and landing.
fn integrate_jump(fighter: &mut Fighter, dt: f32) {
    if !fighter.airborne {
        return;
    }
    fighter.vertical_speed -= GRAVITY * dt;
    fighter.position.z += fighter.vertical_speed * dt;
    if fighter.position.z <= 0.0 {
        fighter.position.z = 0.0;
        fighter.vertical_speed = 0.0;
        fighter.airborne = false;
    }
}

/// Gradually turn the fighter toward its target enemy. Skipped when no
/// target is set.
fn rotate_to_target(fighter: &mut Fighter, positions: &[Vec3; 2], dt: f32) {
    let Some(target) = fighter.target_enemy else {
        return;
    };
    if fighter.defeated {
        return;
    }
    let mut to_target = positions[target.index()] - fighter.position;
    to_target.z = 0.0;
    let Some(desired) = to_target.try_normalize() else {
        return;
    };
    let alpha = (dt * ROTATE_TO_TARGET_SPEED).min(1.0);
    let blended = fighter.forward.lerp(desired, alpha);
    if let Some(next) = blended.try_normalize() {
        fighter.forward = next;
    }
}

/// Ease the blend-space speed through abrupt velocity changes, and sign
/// it by the facing/velocity cosine so backpedaling plays in reverse.
fn smooth_animation_speed(fighter: &mut Fighter, dt: f32) {
    let actual = fighter.horizontal_velocity.length();
    let accel = (actual - fighter.speed_for_animation) / dt;
    if accel.abs() > ANIM_ACCEL_LIMIT {
        let step = if accel < 0.0 {
            -ANIM_ACCEL_STEP
        } else {
            ANIM_ACCEL_STEP
        };
        fighter.speed_for_animation += step * dt;
    } else {
        fighter.speed_for_animation = actual;
    }

    let cos = fighter
        .forward
        .dot(fighter.horizontal_velocity.normalize_or_zero());
    fighter.animation_speed = if cos < 0.0 {
        -fighter.speed_for_animation
    } else {
        fighter.speed_for_animation
    };
}
