//! Continuous-respawn battle: dead units are replaced instead of ending
//! the fight.
//!
//! Respawning is a policy layered on top of `World`; the world itself
//! never resurrects or removes a unit.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use skirmish_core::components::{Behavior, HealerBehavior, ShooterBehavior, Unit};
use skirmish_core::constants::{DEFAULT_UNIT_HP, UNIT_ROTATION_SPEED};
use skirmish_core::enums::{BattlePhase, ShapeKind, Team};
use skirmish_core::state::BattleSnapshot;
use skirmish_core::types::{Arena, SimTime, UnitId, Vec2};

use crate::engine::SimConfig;
use crate::systems;
use crate::world::World;
use crate::world_setup::{place, uniform_sampler, SpawnRegion};

/// Squad fielded by each side.
const SQUAD: [ShapeKind; 4] = [
    ShapeKind::Triangle,
    ShapeKind::Triangle,
    ShapeKind::Square,
    ShapeKind::Pentagon,
];

/// A fresh copy of `unit`: same team, shape, behavior configuration,
/// rotation speed and max hp, at full health, placed clear of `existing`.
///
/// The behavior comes back re-armed, so the replacement fires on its
/// first update.
pub fn respawn(
    unit: &Unit,
    existing: &[Unit],
    arena: &Arena,
    sampler: &mut impl FnMut(&SpawnRegion) -> Vec2,
) -> Unit {
    let taken: Vec<Vec2> = existing.iter().map(|u| u.position).collect();
    let position = place(unit.team, arena, &taken, sampler);
    Unit::new(
        unit.team,
        position,
        unit.shape,
        unit.behavior.as_ref().map(Behavior::rearmed),
        unit.max_hp,
        unit.rotation_speed,
    )
}

/// Preset behavior for one squad slot. Team 0 triangles fire slower
/// than team 1's.
fn squad_behavior(team: Team, shape: ShapeKind) -> Behavior {
    match shape {
        ShapeKind::Triangle => Behavior::Shooter(ShooterBehavior {
            rate: if team == Team::Red { 5.0 } else { 3.0 },
            ..Default::default()
        }),
        ShapeKind::Square => Behavior::Shooter(ShooterBehavior {
            defensive: true,
            lifetime: 5.0,
            projectile_speed: 150.0,
            acceleration: 350.0,
            ..Default::default()
        }),
        ShapeKind::Pentagon => Behavior::Healer(HealerBehavior {
            rate: 7.0,
            acceleration: 100.0,
            ..Default::default()
        }),
    }
}

/// A battle that never ends: both preset squads fight and every fallen
/// unit is replaced on the tick it dies.
pub struct RespawnBattle {
    world: World,
    rng: ChaCha8Rng,
    time: SimTime,
    respawns: u64,
}

impl RespawnBattle {
    /// Spawn four units per side at seeded random positions.
    pub fn new(config: &SimConfig) -> Self {
        let mut world = World::new(config.arena);
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let arena = config.arena;
        {
            let mut sampler = uniform_sampler(&mut rng);
            for team in [Team::Red, Team::Blue] {
                let mut taken = Vec::with_capacity(SQUAD.len());
                for shape in SQUAD {
                    let position = place(team, &arena, &taken, &mut sampler);
                    taken.push(position);
                    world.add_unit(Unit::new(
                        team,
                        position,
                        shape,
                        Some(squad_behavior(team, shape)),
                        DEFAULT_UNIT_HP,
                        UNIT_ROTATION_SPEED,
                    ));
                }
            }
        }
        info!(seed = config.seed, units = world.units.len(), "respawn battle started");

        Self {
            world,
            rng,
            time: SimTime::default(),
            respawns: 0,
        }
    }

    /// Run one world update, then replace every dead unit. Replacements
    /// are appended to the end of the unit list.
    pub fn update(&mut self, dt: f64) {
        self.world.update(dt);
        self.time.advance(dt);

        let dead: Vec<UnitId> = self
            .world
            .units
            .iter()
            .filter(|u| !u.alive)
            .map(|u| u.id)
            .collect();
        if dead.is_empty() {
            return;
        }

        let mut sampler = uniform_sampler(&mut self.rng);
        for id in dead {
            let Some(fallen) = self.world.remove_unit(id) else {
                continue;
            };
            let teammates: Vec<Unit> = self
                .world
                .units
                .iter()
                .filter(|u| u.team == fallen.team)
                .cloned()
                .collect();
            let fresh = respawn(&fallen, &teammates, self.world.arena(), &mut sampler);
            let new_id = self.world.add_unit(fresh);
            self.respawns += 1;
            info!(
                old = id.0,
                new = new_id.0,
                team = ?fallen.team,
                shape = ?fallen.shape,
                "unit respawned"
            );
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Units replaced so far.
    pub fn respawns(&self) -> u64 {
        self.respawns
    }

    /// Snapshot of the current state, carrying the events raised by the
    /// latest update.
    pub fn snapshot(&mut self) -> BattleSnapshot {
        let events = self.world.drain_events();
        systems::snapshot::build_snapshot(&self.world, &self.time, BattlePhase::Active, None, events)
    }
}
