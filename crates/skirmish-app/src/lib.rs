//! SKIRMISH headless runner.
//!
//! Wires the simulation crates into a game loop thread driven over a
//! command channel, plus the built-in demo rosters used when no battle
//! file is given.

pub mod demo;
pub mod game_loop;
pub mod state;

pub use skirmish_core as core;
