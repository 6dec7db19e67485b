//! Projectile update pass: one dispatch per projectile on its fixed mode.
//!
//! Each projectile is updated from a working copy while the live slices
//! stay readable, then written back. Nothing is removed here; the cleanup
//! system compacts the collection once the pass is over.

use tracing::trace;

use skirmish_core::components::{Projectile, Unit};
use skirmish_core::enums::{DestroyCause, ProjectileMode};
use skirmish_core::events::CombatEvent;
use skirmish_core::types::Arena;

use super::{defensive, homing};

/// Everything a projectile may read or touch while it updates.
///
/// `projectiles[index]` holds the stale pre-update copy of the projectile
/// being updated and must be skipped by every scan.
pub struct TickContext<'a> {
    pub units: &'a mut [Unit],
    pub projectiles: &'a mut [Projectile],
    pub index: usize,
    pub arena: &'a Arena,
    pub dt: f64,
    pub events: &'a mut Vec<CombatEvent>,
}

impl TickContext<'_> {
    /// Indices of other alive projectiles, in collection order.
    pub fn others(&self) -> impl Iterator<Item = usize> + '_ {
        let skip = self.index;
        self.projectiles
            .iter()
            .enumerate()
            .filter(move |&(i, p)| i != skip && p.alive)
            .map(|(i, _)| i)
    }
}

/// Update every alive projectile in collection order.
pub fn run(
    units: &mut [Unit],
    projectiles: &mut [Projectile],
    arena: &Arena,
    dt: f64,
    events: &mut Vec<CombatEvent>,
) {
    for index in 0..projectiles.len() {
        // May have been destroyed by an earlier projectile this tick.
        if !projectiles[index].alive {
            continue;
        }

        let mut projectile = projectiles[index].clone();
        if projectile.iframes >= 0.0 {
            projectile.iframes -= dt;
        }

        let mut ctx = TickContext {
            units: &mut *units,
            projectiles: &mut *projectiles,
            index,
            arena,
            dt,
            events: &mut *events,
        };
        match projectile.mode {
            ProjectileMode::DefensiveDeflecting => defensive::update(&mut projectile, &mut ctx),
            ProjectileMode::OffensiveHoming | ProjectileMode::HealingHoming => {
                homing::update(&mut projectile, &mut ctx)
            }
        }

        if !projectile.alive {
            trace!(id = projectile.id.0, mode = ?projectile.mode, "projectile retired");
        }
        projectiles[index] = projectile;
    }
}

/// Mark a projectile dead and record why.
pub fn retire(projectile: &mut Projectile, cause: DestroyCause, events: &mut Vec<CombatEvent>) {
    projectile.alive = false;
    events.push(CombatEvent::ProjectileDestroyed {
        projectile: projectile.id,
        cause,
    });
}
