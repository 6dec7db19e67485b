//! Core types and definitions for the SKIRMISH combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entity data, commands, state snapshots, events, rosters and constants.
//! It carries no simulation logic and no dependency on a runtime.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod roster;
pub mod state;
pub mod types;
