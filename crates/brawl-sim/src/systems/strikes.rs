//! Velocity Tracker system.
//!
//! Differentiates the adapter-fed limb positions while a strike window is
//! open: `v = |p - p_prev| / dt`, peak via max. Fists and feet track
//! independently since punch and kick windows never overlap; the computed
//! speeds outlive the window for the opposing fighter's damage resolution.

use brawl_core::constants::MIN_DT;
use brawl_core::enums::WeaponRegion;

use crate::fighter::Fighter;

/// Sample weapon velocities for both fighters.
/// Must run before contact resolution within the same tick.
pub fn run(fighters: &mut [Fighter; 2], dt: f64) {
    // Timing anomaly: skip the update rather than divide.
    if dt < MIN_DT {
        return;
    }
    for fighter in fighters.iter_mut() {
        for region in WeaponRegion::ALL {
            let live = fighter.weapon_live(region);
            let track = &mut fighter.weapons[region.index()];
            let Some(sample) = track.sample else {
                continue;
            };
            if live {
                if let Some(last) = track.last {
                    track.speed = sample.distance(last) / dt as f32;
                    track.peak = track.peak.max(track.speed);
                }
            }
            track.last = Some(sample);
        }
    }
}
