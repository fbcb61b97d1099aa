//! Snapshot builder — projects the fighter pair into the `MatchSnapshot`
//! consumed by the animation player, HUD, and orchestrator.

use brawl_core::enums::{DamageCategory, MatchPhase};
use brawl_core::events::FeedbackEvent;
use brawl_core::state::{FighterView, MatchSnapshot, PotentialView};
use brawl_core::types::{FighterId, SimTime};

use crate::fighter::Fighter;

/// Build the complete match snapshot for this tick.
pub fn build_snapshot(
    fighters: &[Fighter; 2],
    time: &SimTime,
    phase: MatchPhase,
    events: Vec<FeedbackEvent>,
) -> MatchSnapshot {
    let winner = if fighters[0].defeated {
        Some(FighterId::Blue)
    } else if fighters[1].defeated {
        Some(FighterId::Red)
    } else {
        None
    };

    MatchSnapshot {
        time: *time,
        phase,
        fighters: fighters.iter().map(build_fighter_view).collect(),
        winner,
        events,
    }
}

fn build_fighter_view(fighter: &Fighter) -> FighterView {
    FighterView {
        id: fighter.id,
        health: fighter.health,
        defeated: fighter.defeated,
        potential: build_potential_view(fighter),
        hit_flags: fighter.hit_flags,
        is_attacking: fighter.is_attacking,
        is_blocking: fighter.is_blocking,
        is_ducking: fighter.is_ducking,
        is_running: fighter.is_running,
        airborne: fighter.airborne,
        gates: fighter.gates,
        combo_sequence: fighter.combo_sequence(),
        reaction: fighter.reaction,
        current_move: fighter.current_move,
        fists_live: fighter.fists_live,
        feet_live: fighter.feet_live,
        last_attack_impact_speed: fighter.last_attack_impact_speed,
        last_attack_points: fighter.last_attack_points,
        position: fighter.position,
        forward: fighter.forward,
        animation_speed: fighter.animation_speed,
        foot_left: fighter.foot_left,
        foot_right: fighter.foot_right,
        use_follow_camera: fighter.use_follow_camera,
    }
}

fn build_potential_view(fighter: &Fighter) -> PotentialView {
    PotentialView {
        head: fighter.potential[DamageCategory::Head.index()],
        torso: fighter.potential[DamageCategory::Torso.index()],
        left_arm: fighter.potential[DamageCategory::LeftArm.index()],
        right_arm: fighter.potential[DamageCategory::RightArm.index()],
        left_leg: fighter.potential[DamageCategory::LeftLeg.index()],
        right_leg: fighter.potential[DamageCategory::RightLeg.index()],
    }
}
