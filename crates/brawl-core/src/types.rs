//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

/// Identifies one of the two fighters in a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FighterId {
    /// Red corner (spawned first).
    #[default]
    Red,
    /// Blue corner.
    Blue,
}

impl FighterId {
    /// The opposing fighter.
    pub fn opponent(self) -> FighterId {
        match self {
            FighterId::Red => FighterId::Blue,
            FighterId::Blue => FighterId::Red,
        }
    }

    /// Index into the engine's fighter pair.
    pub fn index(self) -> usize {
        match self {
            FighterId::Red => 0,
            FighterId::Blue => 1,
        }
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
