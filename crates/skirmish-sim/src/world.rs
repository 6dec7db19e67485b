//! The battle world: sole owner of every unit and projectile.

use tracing::trace;

use skirmish_core::components::{Projectile, Unit};
use skirmish_core::enums::Team;
use skirmish_core::events::CombatEvent;
use skirmish_core::types::{Arena, ProjectileId, UnitId};

use crate::systems::{cleanup, movement, projectile};

/// Units and projectiles in one arena, plus the events raised by the
/// most recent update.
///
/// Projectiles refer to their targets by id only. Ids are never reused
/// within one world, so a stale id simply fails to resolve.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub units: Vec<Unit>,
    pub projectiles: Vec<Projectile>,
    arena: Arena,
    next_unit_id: u32,
    next_projectile_id: u64,
    events: Vec<CombatEvent>,
}

impl World {
    pub fn new(arena: Arena) -> Self {
        Self {
            arena,
            ..Default::default()
        }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Append a unit, assigning it a fresh id.
    pub fn add_unit(&mut self, mut unit: Unit) -> UnitId {
        let id = UnitId(self.next_unit_id);
        self.next_unit_id += 1;
        unit.id = id;
        self.units.push(unit);
        id
    }

    /// Append a projectile, assigning it a fresh id.
    pub fn add_projectile(&mut self, mut projectile: Projectile) -> ProjectileId {
        let id = ProjectileId(self.next_projectile_id);
        self.next_projectile_id += 1;
        projectile.id = id;
        self.projectiles.push(projectile);
        id
    }

    /// Remove a unit and return it. Later units shift down one slot.
    pub fn remove_unit(&mut self, id: UnitId) -> Option<Unit> {
        let index = self.units.iter().position(|u| u.id == id)?;
        Some(self.units.remove(index))
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn projectile(&self, id: ProjectileId) -> Option<&Projectile> {
        self.projectiles.iter().find(|p| p.id == id)
    }

    /// Whether any unit of `team` is still alive.
    pub fn team_alive(&self, team: Team) -> bool {
        self.units.iter().any(|u| u.alive && u.team == team)
    }

    /// Take the events raised by the most recent update.
    ///
    /// Each update starts from an empty buffer, so events not drained
    /// before the next update are dropped.
    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance the whole world by `dt`: units, then projectiles, then
    /// removal of dead projectiles.
    pub fn update(&mut self, dt: f64) {
        self.events.clear();
        self.step_units(dt);
        projectile::run(
            &mut self.units,
            &mut self.projectiles,
            &self.arena,
            dt,
            &mut self.events,
        );
        cleanup::run(&mut self.projectiles);
    }

    /// Advance units only. Projectiles their behaviors fire are added to
    /// the world but not moved until the next full `update`.
    pub fn update_units(&mut self, dt: f64) {
        self.events.clear();
        self.step_units(dt);
    }

    fn step_units(&mut self, dt: f64) {
        for i in 0..self.units.len() {
            let Some(fired) = movement::update(&mut self.units[i], dt, &self.arena) else {
                continue;
            };
            let unit = &self.units[i];
            let (unit_id, team, kind) = (unit.id, unit.team, fired.kind);
            let projectile = self.add_projectile(fired);
            trace!(unit = unit_id.0, projectile = projectile.0, ?kind, "projectile fired");
            self.events.push(CombatEvent::ProjectileFired {
                projectile,
                unit: unit_id,
                team,
                kind,
            });
        }
    }
}
