//! Match engine for BRAWL.
//!
//! Owns the two fighters, runs systems at a fixed tick rate,
//! and produces MatchSnapshots for the frontend collaborators.

pub mod engine;
pub mod fighter;
pub mod match_setup;
pub mod systems;

pub use brawl_core as core;
pub use engine::MatchEngine;

#[cfg(test)]
mod tests;
