//! Snapshot system: builds a complete BattleSnapshot from the world.
//!
//! This system is read-only; it never modifies the world.

use skirmish_core::components::{Projectile, Unit};
use skirmish_core::enums::{BattleOutcome, BattlePhase};
use skirmish_core::events::CombatEvent;
use skirmish_core::state::*;
use skirmish_core::types::SimTime;

use super::movement::corners;
use crate::world::World;

/// Build a complete BattleSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: BattlePhase,
    outcome: Option<BattleOutcome>,
    events: Vec<CombatEvent>,
) -> BattleSnapshot {
    BattleSnapshot {
        time: *time,
        phase,
        outcome,
        units: world.units.iter().map(unit_view).collect(),
        projectiles: world.projectiles.iter().map(projectile_view).collect(),
        events,
    }
}

fn unit_view(unit: &Unit) -> UnitView {
    UnitView {
        id: unit.id,
        team: unit.team,
        shape: unit.shape,
        sides: unit.sides(),
        position: unit.position,
        rotation: unit.rotation,
        hp: unit.hp,
        max_hp: unit.max_hp,
        alive: unit.alive,
        corners: corners(unit),
    }
}

fn projectile_view(projectile: &Projectile) -> ProjectileView {
    ProjectileView {
        id: projectile.id,
        team: projectile.team,
        kind: projectile.kind,
        mode: projectile.mode,
        position: projectile.position,
        velocity: projectile.velocity,
        facing_deg: projectile.facing_deg,
        alive: projectile.alive,
    }
}
