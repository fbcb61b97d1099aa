//! Match engine — the core of the game.
//!
//! `MatchEngine` owns the two fighters, processes collaborator commands,
//! runs all systems, and produces `MatchSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use brawl_core::commands::MatchCommand;
use brawl_core::constants::{DT, IK_FACING_COSINE, IK_MAX_RANGE};
use brawl_core::enums::{MatchPhase, WeaponKind};
use brawl_core::events::FeedbackEvent;
use brawl_core::state::MatchSnapshot;
use brawl_core::types::{FighterId, SimTime};

use crate::fighter::Fighter;
use crate::match_setup;
use crate::systems;
use crate::systems::contact::PendingContact;

/// Configuration for starting a new match.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same match.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The match engine. Owns the fighter pair and all sim state.
pub struct MatchEngine {
    fighters: [Fighter; 2],
    time: SimTime,
    phase: MatchPhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<MatchCommand>,
    /// Overlaps deferred to a fixed point in the tick, after velocity
    /// sampling.
    contact_queue: Vec<PendingContact>,
    events: Vec<FeedbackEvent>,
}

impl MatchEngine {
    /// Create a new match engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            fighters: match_setup::spawn_pair(),
            time: SimTime::default(),
            phase: MatchPhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            contact_queue: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: MatchCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = MatchCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot.
    pub fn tick(&mut self) -> MatchSnapshot {
        self.process_commands();

        if self.phase == MatchPhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.fighters, &self.time, self.phase, events)
    }

    /// Get the current match phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Read-only access to a fighter.
    pub fn fighter(&self, id: FighterId) -> &Fighter {
        &self.fighters[id.index()]
    }

    /// Mutable fighter access for test setup.
    #[cfg(test)]
    pub fn fighter_mut(&mut self, id: FighterId) -> &mut Fighter {
        &mut self.fighters[id.index()]
    }

    /// IK target for an attack: the enemy's root position, but only when
    /// the enemy is within reach and the fighter is roughly facing them.
    pub fn attack_ik_target(&self, id: FighterId) -> Option<Vec3> {
        let fighter = self.fighter(id);
        let enemy = self.fighter(fighter.target_enemy?);
        let to_enemy = enemy.position - fighter.position;
        if to_enemy.length() >= IK_MAX_RANGE {
            return None;
        }
        let dir = to_enemy.try_normalize()?;
        if fighter.forward.dot(dir) <= IK_FACING_COSINE {
            return None;
        }
        Some(enemy.position)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: MatchCommand) {
        let now = self.time.elapsed_secs;
        match command {
            // --- Match control ---
            MatchCommand::StartMatch => {
                self.fighters = match_setup::spawn_pair();
                self.contact_queue.clear();
                self.events.clear();
                self.time = SimTime::default();
                self.phase = MatchPhase::Active;
            }
            MatchCommand::Pause => {
                if self.phase == MatchPhase::Active {
                    self.phase = MatchPhase::Paused;
                }
            }
            MatchCommand::Resume => {
                if self.phase == MatchPhase::Paused {
                    self.phase = MatchPhase::Active;
                }
            }

            // --- Input adapter ---
            MatchCommand::Press { fighter, key } => {
                let appended =
                    self.fighters[fighter.index()].press(key, now, &mut self.rng);
                if let Some(token) = appended {
                    self.events
                        .push(FeedbackEvent::ComboExtended { fighter, token });
                }
            }
            MatchCommand::Release { fighter, key } => {
                self.fighters[fighter.index()].release(key);
            }
            MatchCommand::SetMoveAxis {
                fighter,
                forward,
                right,
            } => {
                let f = &mut self.fighters[fighter.index()];
                f.move_axis_forward = forward.clamp(-1.0, 1.0);
                f.move_axis_right = right.clamp(-1.0, 1.0);
            }

            // --- Animation player notifications ---
            MatchCommand::ComboWindowOpen { fighter } => {
                let f = &mut self.fighters[fighter.index()];
                if !f.defeated {
                    f.gates.can_add_next_combo_attack = true;
                }
            }
            MatchCommand::ComboClear { fighter } => {
                self.fighters[fighter.index()].clear_combo();
            }
            MatchCommand::PunchWindowBegin { fighter, attack } => {
                self.fighters[fighter.index()].strike_window_begin(WeaponKind::Punch, attack);
            }
            MatchCommand::PunchWindowEnd { fighter } => {
                self.fighters[fighter.index()].strike_window_end(WeaponKind::Punch);
            }
            MatchCommand::KickWindowBegin { fighter, attack } => {
                self.fighters[fighter.index()].strike_window_begin(WeaponKind::Kick, attack);
            }
            MatchCommand::KickWindowEnd { fighter } => {
                self.fighters[fighter.index()].strike_window_end(WeaponKind::Kick);
            }
            MatchCommand::ReactionEnd { fighter } => {
                self.fighters[fighter.index()].reaction_end();
            }

            // --- Physics/collision adapter ---
            MatchCommand::LimbSample {
                fighter,
                left_fist,
                right_fist,
                left_foot,
                right_foot,
            } => {
                self.fighters[fighter.index()]
                    .set_limb_samples(left_fist, right_fist, left_foot, right_foot);
            }
            MatchCommand::WeaponContact {
                attacker,
                weapon,
                victim,
                region,
                impact_point,
            } => {
                self.contact_queue.push(PendingContact {
                    attacker,
                    weapon,
                    victim,
                    region,
                    impact_point,
                });
            }
            // Nothing to do when a weapon overlap ends; damage and
            // reaction both trigger on begin.
            MatchCommand::WeaponContactEnd { .. } => {}
            MatchCommand::GuardOverlapBegin { fighter, region } => {
                self.fighters[fighter.index()].guard_overlap_begin(region, now);
            }
            MatchCommand::GuardOverlapEnd { fighter, region } => {
                self.fighters[fighter.index()].guard_overlap_end(region);
            }

            // --- UI ---
            MatchCommand::ClearHitFlags { fighter } => {
                self.fighters[fighter.index()].hit_flags = Default::default();
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now = self.time.elapsed_secs;
        // 1. Locomotion (axis movement, jump arc, rotate-to-target)
        systems::locomotion::run(&mut self.fighters, DT as f32);
        // 2. Weapon velocity sampling — must precede contact resolution
        systems::strikes::run(&mut self.fighters, DT);
        // 3. Contact resolution (damage + reaction on the struck fighter)
        systems::contact::run(&mut self.fighters, &mut self.contact_queue, now, &mut self.events);
        // 4. Watchdogs for lost animation-end notifications
        systems::watchdog::run(&mut self.fighters, now, &mut self.events);
    }
}
