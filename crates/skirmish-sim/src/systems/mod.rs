//! Per-tick systems that operate on the world's collections.
//!
//! Systems are free functions over slices of units and projectiles.
//! They do not own state; everything lives in the entity data.

pub mod behavior;
pub mod cleanup;
pub mod collision;
pub mod defensive;
pub mod homing;
pub mod movement;
pub mod projectile;
pub mod snapshot;
