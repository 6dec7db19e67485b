//! Combat simulation engine for SKIRMISH.
//!
//! `World` owns the unit and projectile collections and runs the per-tick
//! update order. `BattleEngine` wraps it with commands, phases and
//! snapshots. Completely headless, so every rule is testable directly.

pub mod engine;
pub mod respawn;
pub mod steering;
pub mod systems;
pub mod targeting;
pub mod world;
pub mod world_setup;

pub use engine::{BattleEngine, SimConfig};
pub use respawn::RespawnBattle;
pub use world::World;
