//! Steering and geometry helpers for homing and deflecting projectiles.
//!
//! Turn-rate-limited heading updates, lead prediction against a moving
//! target, friendly avoidance and velocity reflection. Every helper
//! tolerates zero-length vectors instead of producing NaN.

use skirmish_core::constants::*;
use skirmish_core::types::Vec2;

/// Reflect a velocity about a unit-length surface normal.
pub fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Signed angle in radians that rotates unit vector `from` onto unit vector `to`.
///
/// The dot product is clamped to [-1, 1] before `acos`, so rounding
/// overshoot on nearly parallel vectors never leaves its domain.
pub fn signed_angle(from: Vec2, to: Vec2) -> f64 {
    let angle = from.dot(to).clamp(-1.0, 1.0).acos();
    if from.perp_dot(to) < 0.0 {
        -angle
    } else {
        angle
    }
}

/// Largest heading change (radians) a homing projectile may make in `dt` seconds.
pub fn max_turn(dt: f64) -> f64 {
    MAX_TURN_RATE_DEG.to_radians() * dt
}

/// Rotate the current heading toward `desired` by at most `max_turn` radians.
///
/// Returns a unit heading. A near-stationary velocity has no meaningful
/// heading, so the desired direction is taken as-is.
pub fn turn_limited_heading(velocity: Vec2, desired: Vec2, max_turn: f64) -> Vec2 {
    let speed = velocity.length();
    if speed <= MIN_STEERING_SPEED {
        return desired;
    }
    let current = velocity / speed;
    let angle = signed_angle(current, desired).clamp(-max_turn, max_turn);
    Vec2::from_angle(angle).rotate(current)
}

/// Where a target will be once a projectile flying at `max_speed` covers
/// the straight-line distance to it. No lookahead when `max_speed` is 0.
pub fn predict_position(own_pos: Vec2, target_pos: Vec2, target_vel: Vec2, max_speed: f64) -> Vec2 {
    let prediction_time = if max_speed > 0.0 {
        own_pos.distance(target_pos) / max_speed
    } else {
        0.0
    };
    target_pos + target_vel * prediction_time
}

/// Relax a velocity toward the heading of the predicted intercept point.
///
/// Blends by `DEFENSIVE_STEER_BLEND * dt` per call instead of snapping.
/// Leaves the velocity untouched when the intercept point coincides with
/// the projectile.
pub fn blend_toward_intercept(
    own_pos: Vec2,
    velocity: Vec2,
    target_pos: Vec2,
    target_vel: Vec2,
    max_speed: f64,
    dt: f64,
) -> Vec2 {
    let predicted = predict_position(own_pos, target_pos, target_vel, max_speed);
    match (predicted - own_pos).try_normalize() {
        Some(direction) => velocity.lerp(direction * max_speed, DEFENSIVE_STEER_BLEND * dt),
        None => velocity,
    }
}

/// Push-away vector from every friendly position within `radius`.
///
/// Each friend contributes a unit vector scaled by `(radius - dist) / radius`,
/// so the closest friends push hardest. Coincident positions are skipped.
pub fn avoidance(own_pos: Vec2, friends: impl IntoIterator<Item = Vec2>, radius: f64) -> Vec2 {
    friends
        .into_iter()
        .filter_map(|friend| {
            let offset = own_pos - friend;
            let dist = offset.length();
            if dist >= radius {
                return None;
            }
            offset
                .try_normalize()
                .map(|away| away * (radius - dist) / radius)
        })
        .sum()
}

/// Rendering angle for a heading in degrees, 0 = pointing up the screen.
pub fn facing_degrees(heading: Vec2) -> f64 {
    heading.y.atan2(heading.x).to_degrees() + 90.0
}
