//! Team instantiation and spawn placement.
//!
//! Turns validated rosters into units and chooses non-overlapping spawn
//! points. Placement takes its randomness from an injected sampler so the
//! policy can be driven by a seeded RNG or by a fixed script in tests.

use rand::Rng;
use tracing::debug;

use skirmish_core::components::{Behavior, HealerBehavior, ShooterBehavior, Unit};
use skirmish_core::constants::*;
use skirmish_core::enums::Team;
use skirmish_core::error::RosterError;
use skirmish_core::roster::{RosterEntry, UnitLoadout};
use skirmish_core::types::{Arena, UnitId, Vec2};

use crate::world::World;

/// Axis-aligned box a team's spawn points are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRegion {
    pub min: Vec2,
    pub max: Vec2,
}

impl SpawnRegion {
    /// The team's half of the arena, inset by `SPAWN_EDGE_PADDING`.
    /// Team 0 gets the left half, team 1 the right.
    pub fn for_team(team: Team, arena: &Arena) -> Self {
        let half = arena.width / 2.0;
        let (x_min, x_max) = match team {
            Team::Red => (SPAWN_EDGE_PADDING, half - SPAWN_EDGE_PADDING),
            Team::Blue => (half + SPAWN_EDGE_PADDING, arena.width - SPAWN_EDGE_PADDING),
        };
        Self {
            min: Vec2::new(x_min, SPAWN_EDGE_PADDING),
            max: Vec2::new(x_max, arena.height - SPAWN_EDGE_PADDING),
        }
    }
}

/// Uniform sampler over a region. An arena too small for the padding
/// collapses the affected axis to the region's midpoint.
pub fn uniform_sampler<R: Rng>(rng: &mut R) -> impl FnMut(&SpawnRegion) -> Vec2 + '_ {
    move |region| {
        let mut axis = |lo: f64, hi: f64| {
            if lo < hi {
                rng.gen_range(lo..=hi)
            } else {
                (lo + hi) / 2.0
            }
        };
        let x = axis(region.min.x, region.max.x);
        let y = axis(region.min.y, region.max.y);
        Vec2::new(x, y)
    }
}

/// Choose a spawn point for `team` at least `MIN_UNIT_SEPARATION` away from
/// every position in `existing`.
///
/// Gives up after `PLACEMENT_MAX_ATTEMPTS` samples and returns the last
/// one, accepting the overlap.
pub fn place(
    team: Team,
    arena: &Arena,
    existing: &[Vec2],
    sampler: &mut impl FnMut(&SpawnRegion) -> Vec2,
) -> Vec2 {
    let region = SpawnRegion::for_team(team, arena);
    let mut candidate = sampler(&region);
    for _ in 1..PLACEMENT_MAX_ATTEMPTS {
        if is_clear(candidate, existing) {
            return candidate;
        }
        candidate = sampler(&region);
    }
    if !is_clear(candidate, existing) {
        debug!(?team, x = candidate.x, y = candidate.y, "placement fell back to overlapping spot");
    }
    candidate
}

fn is_clear(candidate: Vec2, existing: &[Vec2]) -> bool {
    existing
        .iter()
        .all(|p| p.distance(candidate) > MIN_UNIT_SEPARATION)
}

/// Build the unit a loadout describes, with its matching behavior.
pub fn unit_from_loadout(team: Team, loadout: &UnitLoadout, position: Vec2) -> Unit {
    let behavior = match loadout {
        UnitLoadout::Triangle(s) => Behavior::Shooter(ShooterBehavior {
            damage: s.damage,
            rate: s.rate,
            defensive: false,
            projectile_speed: s.speed,
            acceleration: s.acceleration,
            ..Default::default()
        }),
        UnitLoadout::Square(s) => Behavior::Shooter(ShooterBehavior {
            damage: 0.0,
            rate: s.rate,
            defensive: true,
            lifetime: s.lifetime,
            projectile_speed: s.speed,
            acceleration: s.acceleration,
            cooldown: 0.0,
        }),
        UnitLoadout::Pentagon(s) => Behavior::Healer(HealerBehavior {
            heal: s.heal,
            rate: s.rate,
            projectile_speed: s.speed,
            acceleration: s.acceleration,
            cooldown: 0.0,
        }),
    };
    Unit::new(
        team,
        position,
        loadout.shape(),
        Some(behavior),
        loadout.hp(),
        UNIT_ROTATION_SPEED,
    )
}

/// Validate a roster and append its units to the world.
///
/// Nothing is added unless every entry is valid. Returns the new ids in
/// roster order.
pub fn instantiate(
    world: &mut World,
    team: Team,
    roster: &[RosterEntry],
) -> Result<Vec<UnitId>, RosterError> {
    add_roster(world, team, roster, true)
}

/// Like [`instantiate`], but the units carry no behavior and never fire.
pub fn instantiate_dummy(
    world: &mut World,
    team: Team,
    roster: &[RosterEntry],
) -> Result<Vec<UnitId>, RosterError> {
    add_roster(world, team, roster, false)
}

fn add_roster(
    world: &mut World,
    team: Team,
    roster: &[RosterEntry],
    armed: bool,
) -> Result<Vec<UnitId>, RosterError> {
    for (slot, entry) in roster.iter().enumerate() {
        entry.validate(slot, world.arena())?;
    }
    let ids = roster
        .iter()
        .map(|entry| {
            let mut unit = unit_from_loadout(team, &entry.loadout, entry.position);
            if !armed {
                unit.behavior = None;
            }
            world.add_unit(unit)
        })
        .collect();
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use skirmish_core::roster::{PentagonStats, SquareStats, TriangleStats};

    #[test]
    fn test_regions_split_the_arena() {
        let arena = Arena::default();
        let red = SpawnRegion::for_team(Team::Red, &arena);
        let blue = SpawnRegion::for_team(Team::Blue, &arena);
        assert_eq!(red.min, Vec2::new(50.0, 50.0));
        assert_eq!(red.max, Vec2::new(350.0, 550.0));
        assert_eq!(blue.min, Vec2::new(450.0, 50.0));
        assert_eq!(blue.max, Vec2::new(750.0, 550.0));
    }

    #[test]
    fn test_uniform_sampler_stays_in_region() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut sample = uniform_sampler(&mut rng);
        let region = SpawnRegion::for_team(Team::Blue, &Arena::default());
        for _ in 0..200 {
            let p = sample(&region);
            assert!(p.x >= region.min.x && p.x <= region.max.x);
            assert!(p.y >= region.min.y && p.y <= region.max.y);
        }
    }

    #[test]
    fn test_uniform_sampler_survives_tiny_arena() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut sample = uniform_sampler(&mut rng);
        let region = SpawnRegion::for_team(Team::Red, &Arena::new(100.0, 80.0));
        let p = sample(&region);
        assert!(p.is_finite());
    }

    #[test]
    fn test_place_skips_crowded_samples() {
        let existing = [Vec2::new(100.0, 100.0)];
        let mut script = [Vec2::new(110.0, 100.0), Vec2::new(300.0, 300.0)].into_iter();
        let mut sampler = |_: &SpawnRegion| script.next().unwrap_or(Vec2::ZERO);
        let spot = place(Team::Red, &Arena::default(), &existing, &mut sampler);
        assert_eq!(spot, Vec2::new(300.0, 300.0));
    }

    #[test]
    fn test_place_falls_back_to_last_sample() {
        let existing = [Vec2::new(100.0, 100.0)];
        let mut calls = 0;
        let mut sampler = |_: &SpawnRegion| {
            calls += 1;
            Vec2::new(100.0, 100.0 + calls as f64 / 1000.0)
        };
        let spot = place(Team::Red, &Arena::default(), &existing, &mut sampler);
        assert_eq!(calls, PLACEMENT_MAX_ATTEMPTS);
        assert!((spot - Vec2::new(100.0, 100.1)).length() < 1e-9);
    }

    #[test]
    fn test_loadouts_map_to_behaviors() {
        let tri = unit_from_loadout(
            Team::Red,
            &UnitLoadout::Triangle(TriangleStats::default()),
            Vec2::ZERO,
        );
        assert!(matches!(
            tri.behavior,
            Some(Behavior::Shooter(ShooterBehavior { defensive: false, .. }))
        ));
        assert_eq!(tri.rotation_speed, UNIT_ROTATION_SPEED);

        let sq = unit_from_loadout(
            Team::Red,
            &UnitLoadout::Square(SquareStats::default()),
            Vec2::ZERO,
        );
        match sq.behavior {
            Some(Behavior::Shooter(s)) => {
                assert!(s.defensive);
                assert_eq!(s.lifetime, SQUARE_LIFETIME);
                assert_eq!(s.projectile_speed, SQUARE_SPEED);
            }
            other => panic!("expected defensive shooter, got {other:?}"),
        }

        let pent = unit_from_loadout(
            Team::Blue,
            &UnitLoadout::Pentagon(PentagonStats::default()),
            Vec2::ZERO,
        );
        assert!(matches!(pent.behavior, Some(Behavior::Healer(ref h)) if h.heal == PENTAGON_HEAL));
    }

    #[test]
    fn test_instantiate_is_all_or_nothing() {
        let mut world = World::new(Arena::default());
        let roster = vec![
            RosterEntry::new(UnitLoadout::Triangle(TriangleStats::default()), Vec2::new(100.0, 100.0)),
            RosterEntry::new(UnitLoadout::Square(SquareStats::default()), Vec2::new(-5.0, 100.0)),
        ];
        let err = instantiate(&mut world, Team::Red, &roster).unwrap_err();
        assert!(matches!(err, RosterError::OutOfArena { slot: 1, .. }));
        assert!(world.units.is_empty());

        let ids = instantiate(&mut world, Team::Red, &roster[..1]).unwrap();
        assert_eq!(ids, vec![UnitId(0)]);
        assert_eq!(world.units[0].team, Team::Red);
    }

    #[test]
    fn test_dummies_have_no_behavior() {
        let mut world = World::new(Arena::default());
        let roster = vec![RosterEntry::new(
            UnitLoadout::Pentagon(PentagonStats::default()),
            Vec2::new(600.0, 300.0),
        )];
        instantiate_dummy(&mut world, Team::Blue, &roster).unwrap();
        assert!(world.units[0].behavior.is_none());
        assert_eq!(world.units[0].shape, skirmish_core::enums::ShapeKind::Pentagon);
    }
}
