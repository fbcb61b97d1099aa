//! Systems that advance the match world each tick.
//!
//! Systems are free functions over the fighter pair. Ordering matters:
//! weapon-velocity sampling must run before contact resolution, since
//! damage reads the freshest impact speed.

pub mod contact;
pub mod damage;
pub mod locomotion;
pub mod reaction;
pub mod snapshot;
pub mod strikes;
pub mod watchdog;

use crate::fighter::Fighter;

/// Split-borrow two distinct fighters out of the pair.
pub(crate) fn pair_mut(fighters: &mut [Fighter; 2], a: usize, b: usize) -> (&mut Fighter, &mut Fighter) {
    debug_assert!(a != b && a < 2 && b < 2);
    let (left, right) = fighters.split_at_mut(1);
    if a == 0 {
        (&mut left[0], &mut right[0])
    } else {
        (&mut right[0], &mut left[0])
    }
}
