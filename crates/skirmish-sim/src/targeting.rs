//! Target selection for the three projectile modes.
//!
//! All selectors are read-only scans over the world's collections. Ties
//! are broken by collection order (first candidate wins), which keeps
//! selection deterministic.

use skirmish_core::components::{Projectile, Unit};
use skirmish_core::enums::{ShapeKind, Team};
use skirmish_core::types::Vec2;

/// Source-kind order a defensive projectile hunts in: offensive shots
/// first, then enemy deflectors, then heals.
pub const DEFENSIVE_PRIORITY: [ShapeKind; 3] =
    [ShapeKind::Triangle, ShapeKind::Square, ShapeKind::Pentagon];

/// Index of the nearest alive unit not on `team`.
pub fn nearest_enemy_unit(units: &[Unit], team: Team, from: Vec2) -> Option<usize> {
    units
        .iter()
        .enumerate()
        .filter(|(_, u)| u.alive && u.team != team)
        .min_by(|(_, a), (_, b)| {
            a.position
                .distance_squared(from)
                .total_cmp(&b.position.distance_squared(from))
        })
        .map(|(i, _)| i)
}

/// Index of the alive, injured unit on `team` with the lowest hp fraction.
pub fn most_injured_ally(units: &[Unit], team: Team) -> Option<usize> {
    units
        .iter()
        .enumerate()
        .filter(|(_, u)| u.alive && u.team == team && u.is_injured())
        .min_by(|(_, a), (_, b)| a.hp_fraction().total_cmp(&b.hp_fraction()))
        .map(|(i, _)| i)
}

/// Index of the enemy projectile a defensive projectile on `team` should chase.
///
/// Walks `DEFENSIVE_PRIORITY` and returns the nearest alive enemy of the
/// first kind that has any candidate. `skip` excludes the caller's own slot.
pub fn defensive_target(
    projectiles: &[Projectile],
    skip: usize,
    team: Team,
    from: Vec2,
) -> Option<usize> {
    DEFENSIVE_PRIORITY.iter().find_map(|&kind| {
        projectiles
            .iter()
            .enumerate()
            .filter(|&(i, p)| i != skip && p.alive && p.team != team && p.kind == kind)
            .min_by(|(_, a), (_, b)| {
                a.position
                    .distance_squared(from)
                    .total_cmp(&b.position.distance_squared(from))
            })
            .map(|(i, _)| i)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(team: Team, x: f64, hp: f64) -> Unit {
        Unit::new(team, Vec2::new(x, 100.0), ShapeKind::Triangle, None, hp, 0.0)
    }

    #[test]
    fn test_nearest_enemy_skips_dead_and_friendly() {
        let mut units = vec![
            unit(Team::Red, 10.0, 100.0),
            unit(Team::Blue, 20.0, 100.0),
            unit(Team::Blue, 50.0, 100.0),
        ];
        units[1].alive = false;
        assert_eq!(nearest_enemy_unit(&units, Team::Red, Vec2::new(0.0, 100.0)), Some(2));
        assert_eq!(nearest_enemy_unit(&units, Team::Blue, Vec2::ZERO), Some(0));
    }

    #[test]
    fn test_most_injured_ally_ignores_full_health() {
        let units = vec![
            unit(Team::Red, 0.0, 100.0),
            unit(Team::Red, 0.0, 70.0),
            unit(Team::Red, 0.0, 40.0),
            unit(Team::Blue, 0.0, 10.0),
        ];
        assert_eq!(most_injured_ally(&units, Team::Red), Some(2));
        assert_eq!(most_injured_ally(&units[..1], Team::Red), None);
    }

    #[test]
    fn test_defensive_priority_beats_distance() {
        let near_heal = Projectile::healing(Team::Blue, Vec2::new(1.0, 0.0), 5.0, 100.0, 100.0);
        let far_shot = Projectile::offensive(Team::Blue, Vec2::new(300.0, 0.0), 5.0, 100.0, 100.0);
        let own = Projectile::defensive(Team::Red, Vec2::ZERO, 3.0, 100.0, 100.0);
        let projectiles = vec![own, near_heal, far_shot];
        assert_eq!(defensive_target(&projectiles, 0, Team::Red, Vec2::ZERO), Some(2));
    }

    #[test]
    fn test_defensive_target_none_without_enemies() {
        let own = Projectile::defensive(Team::Red, Vec2::ZERO, 3.0, 100.0, 100.0);
        let friend = Projectile::offensive(Team::Red, Vec2::new(5.0, 0.0), 5.0, 100.0, 100.0);
        assert_eq!(defensive_target(&[own, friend], 0, Team::Red, Vec2::ZERO), None);
    }
}
