//! Unit update system: rotation, firing, kinematic integration, walls.

use std::f64::consts::TAU;

use skirmish_core::components::{Projectile, Unit};
use skirmish_core::constants::UNIT_RADIUS;
use skirmish_core::types::{Arena, Vec2};

use super::behavior;
use super::collision::bounce_off_walls;

/// Advance one unit by `dt`. Dead units are left untouched.
///
/// Returns the projectile its behavior fired this tick, already placed on
/// the unit's next polygon corner.
pub fn update(unit: &mut Unit, dt: f64, arena: &Arena) -> Option<Projectile> {
    if !unit.alive {
        return None;
    }

    unit.rotation = (unit.rotation + unit.rotation_speed * dt).rem_euclid(360.0);

    let team = unit.team;
    let mut fired = unit
        .behavior
        .as_mut()
        .and_then(|b| behavior::tick(b, team, dt));
    if let Some(projectile) = fired.as_mut() {
        projectile.position = next_corner(unit);
    }

    unit.position += unit.velocity * dt;
    bounce_off_walls(&mut unit.position, &mut unit.velocity, arena);

    fired
}

/// Polygon vertices of a unit in arena space at its current rotation.
pub fn corners(unit: &Unit) -> Vec<Vec2> {
    let sides = unit.sides() as usize;
    (0..sides).map(|i| corner(unit, i)).collect()
}

/// Position of the vertex under the unit's corner cursor, then advance the
/// cursor so successive shots leave from successive vertices.
pub fn next_corner(unit: &mut Unit) -> Vec2 {
    let sides = unit.sides() as usize;
    let index = unit.next_corner % sides;
    unit.next_corner = (index + 1) % sides;
    corner(unit, index)
}

fn corner(unit: &Unit, index: usize) -> Vec2 {
    let angle = TAU * index as f64 / unit.sides() as f64 + unit.rotation.to_radians();
    unit.position + Vec2::from_angle(angle) * UNIT_RADIUS
}
