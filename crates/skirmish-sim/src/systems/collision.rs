//! Contact response shared by all moving entities.

use skirmish_core::types::{Arena, Vec2};

use crate::steering::reflect;

/// Clamp a position into the arena, negating the velocity component of
/// every wall it crossed. Calling it again on the result changes nothing.
pub fn bounce_off_walls(position: &mut Vec2, velocity: &mut Vec2, arena: &Arena) {
    if position.x < 0.0 {
        position.x = 0.0;
        velocity.x = -velocity.x;
    } else if position.x > arena.width {
        position.x = arena.width;
        velocity.x = -velocity.x;
    }
    if position.y < 0.0 {
        position.y = 0.0;
        velocity.y = -velocity.y;
    } else if position.y > arena.height {
        position.y = arena.height;
        velocity.y = -velocity.y;
    }
}

/// Deflect off a circular obstacle if within `radius` of its center.
///
/// Reflects the velocity about the outward normal and pushes the position
/// out to exactly `radius`. Returns whether a contact happened. An exact
/// overlap has no normal and is left alone.
pub fn deflect_off(position: &mut Vec2, velocity: &mut Vec2, obstacle: Vec2, radius: f64) -> bool {
    let offset = *position - obstacle;
    if offset.length() >= radius {
        return false;
    }
    let Some(normal) = offset.try_normalize() else {
        return false;
    };
    *velocity = reflect(*velocity, normal);
    *position = obstacle + normal * radius;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_bounce_clamps_and_reflects() {
        let arena = Arena::new(100.0, 50.0);
        let mut pos = Vec2::new(-3.0, 60.0);
        let mut vel = Vec2::new(-10.0, 5.0);
        bounce_off_walls(&mut pos, &mut vel, &arena);
        assert_eq!(pos, Vec2::new(0.0, 50.0));
        assert_eq!(vel, Vec2::new(10.0, -5.0));

        // Sitting on the boundary is already inside.
        bounce_off_walls(&mut pos, &mut vel, &arena);
        assert_eq!(pos, Vec2::new(0.0, 50.0));
        assert_eq!(vel, Vec2::new(10.0, -5.0));
    }

    #[test]
    fn test_deflect_pushes_to_contact_radius() {
        let mut pos = Vec2::new(10.0, 0.0);
        let mut vel = Vec2::new(-5.0, 1.0);
        assert!(deflect_off(&mut pos, &mut vel, Vec2::ZERO, 20.0));
        assert!((pos - Vec2::new(20.0, 0.0)).length() < 1e-9);
        assert!((vel - Vec2::new(5.0, 1.0)).length() < 1e-9);
    }

    #[test]
    fn test_deflect_ignores_distant_and_coincident() {
        let mut pos = Vec2::new(30.0, 0.0);
        let mut vel = Vec2::X;
        assert!(!deflect_off(&mut pos, &mut vel, Vec2::ZERO, 20.0));

        let mut pos = Vec2::ZERO;
        assert!(!deflect_off(&mut pos, &mut vel, Vec2::ZERO, 20.0));
        assert_eq!(pos, Vec2::ZERO);
    }
}
