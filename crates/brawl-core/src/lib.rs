//! Core types and definitions for the BRAWL combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! region maps, commands, state snapshots, events, and constants.
//! It has no dependency on any engine or runtime framework.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod regions;
pub mod state;
pub mod types;
