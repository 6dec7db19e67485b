//! Defensive-deflecting mode (square-sourced projectiles).
//!
//! A deflector lives for a fixed lifetime, chases enemy projectiles by
//! priority, annihilates whatever enemy shot it touches, and bounces off
//! units instead of hitting them.

use tracing::debug;

use skirmish_core::components::Projectile;
use skirmish_core::constants::{DEFENSIVE_CONTACT_RADIUS, UNIT_CONTACT_RADIUS};
use skirmish_core::enums::DestroyCause;
use skirmish_core::types::{TargetRef, Vec2};

use super::collision::{bounce_off_walls, deflect_off};
use super::projectile::{retire, TickContext};
use crate::steering::blend_toward_intercept;
use crate::targeting::defensive_target;

/// Advance a defensive projectile by one tick.
///
/// Order: lifetime, retarget, launch or steer, clamp, move, annihilate,
/// unit deflection, walls. Walls go last so the projectile always ends the
/// tick inside the arena.
pub fn update(p: &mut Projectile, ctx: &mut TickContext) {
    p.lifetime -= ctx.dt;
    if p.lifetime <= 0.0 {
        retire(p, DestroyCause::Expired, ctx.events);
        return;
    }

    let target = defensive_target(ctx.projectiles, ctx.index, p.team, p.position);
    p.target = target.map(|i| TargetRef::Projectile(ctx.projectiles[i].id));

    if !p.initialized {
        p.velocity = Vec2::NEG_Y * p.max_speed;
        p.initialized = true;
    }
    if let Some(i) = target {
        let t = &ctx.projectiles[i];
        p.velocity = blend_toward_intercept(
            p.position,
            p.velocity,
            t.position,
            t.velocity,
            p.max_speed,
            ctx.dt,
        );
    }
    p.velocity = p.velocity.clamp_length_max(p.max_speed);
    p.position += p.velocity * ctx.dt;

    if annihilate(p, ctx) {
        return;
    }

    for unit in ctx.units.iter().filter(|u| u.alive) {
        deflect_off(
            &mut p.position,
            &mut p.velocity,
            unit.position,
            UNIT_CONTACT_RADIUS,
        );
    }
    bounce_off_walls(&mut p.position, &mut p.velocity, ctx.arena);
}

/// Destroy every enemy projectile in contact range. Returns true when the
/// deflector itself was lost to an enemy deflector.
fn annihilate(p: &mut Projectile, ctx: &mut TickContext) -> bool {
    let others: Vec<usize> = ctx.others().collect();
    for j in others {
        let other = &mut ctx.projectiles[j];
        if other.team == p.team || p.position.distance(other.position) >= DEFENSIVE_CONTACT_RADIUS
        {
            continue;
        }

        if other.is_defensive() {
            debug!(a = p.id.0, b = other.id.0, "deflectors destroyed each other");
            retire(other, DestroyCause::MutualDestruction, ctx.events);
            retire(p, DestroyCause::MutualDestruction, ctx.events);
            return true;
        }

        debug!(deflector = p.id.0, victim = other.id.0, kind = ?other.kind, "projectile intercepted");
        retire(other, DestroyCause::Intercepted, ctx.events);
    }
    false
}
