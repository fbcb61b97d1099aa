//! Match setup — spawns the two fighters facing each other and wires the
//! mutual target relationship.

use glam::Vec3;

use brawl_core::constants::SPAWN_SEPARATION;
use brawl_core::types::FighterId;

use crate::fighter::Fighter;

/// Spawn the fighter pair with default stats at opposite ends of the
/// spawn line, each targeting the other.
pub fn spawn_pair() -> [Fighter; 2] {
    let half = SPAWN_SEPARATION / 2.0;

    let mut red = Fighter::new(FighterId::Red, Vec3::new(-half, 0.0, 0.0), Vec3::X);
    let mut blue = Fighter::new(FighterId::Blue, Vec3::new(half, 0.0, 0.0), -Vec3::X);

    red.target_enemy = Some(FighterId::Blue);
    blue.target_enemy = Some(FighterId::Red);

    [red, blue]
}
