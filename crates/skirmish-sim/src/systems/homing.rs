//! Offensive-homing and healing-homing modes.
//!
//! Both modes re-pick their target every tick, steer under a turn-rate
//! limit and share the same wall and projectile contact rules. They differ
//! in which units they chase and what a unit contact does.
//!
//! Contacts with units are resolved before the move, contacts with other
//! projectiles after it. A projectile that dies on a unit contact never
//! reaches the projectile pass, so no contact is applied twice in a tick.

use tracing::debug;

use skirmish_core::components::{Projectile, Unit};
use skirmish_core::constants::*;
use skirmish_core::enums::{DestroyCause, ProjectileMode};
use skirmish_core::events::CombatEvent;
use skirmish_core::types::{TargetRef, Vec2};

use super::collision::{bounce_off_walls, deflect_off};
use super::projectile::{retire, TickContext};
use crate::steering::{avoidance, facing_degrees, max_turn, reflect, turn_limited_heading};
use crate::targeting::{most_injured_ally, nearest_enemy_unit};

/// What touching a unit does to a homing projectile.
enum Contact {
    Damage,
    Heal,
    Deflect,
}

/// Advance a homing projectile by one tick.
pub fn update(p: &mut Projectile, ctx: &mut TickContext) {
    let target = match p.mode {
        ProjectileMode::HealingHoming => most_injured_ally(ctx.units, p.team),
        _ => nearest_enemy_unit(ctx.units, p.team, p.position),
    };
    let Some(target) = target else {
        p.target = None;
        retire(p, DestroyCause::NoTarget, ctx.events);
        return;
    };
    p.target = Some(TargetRef::Unit(ctx.units[target].id));

    if resolve_unit_contacts(p, target, ctx) {
        return;
    }

    let to_target = (ctx.units[target].position - p.position).normalize_or_zero();
    let push = if p.mode == ProjectileMode::OffensiveHoming {
        let friends = ctx
            .units
            .iter()
            .filter(|u| u.alive && u.team == p.team)
            .map(|u| u.position);
        avoidance(p.position, friends, FRIENDLY_AVOIDANCE_RADIUS)
    } else {
        Vec2::ZERO
    };
    let desired = (to_target + push)
        .try_normalize()
        .or_else(|| p.velocity.try_normalize())
        .unwrap_or(Vec2::NEG_Y);

    if !p.initialized {
        p.velocity = desired * p.max_speed;
        p.initialized = true;
    }

    let heading = turn_limited_heading(p.velocity, desired, max_turn(ctx.dt));
    p.velocity = (p.velocity + heading * p.acceleration * ctx.dt).clamp_length_max(p.max_speed);
    p.position += p.velocity * ctx.dt;
    p.facing_deg = facing_degrees(heading);

    if resolve_projectile_contacts(p, ctx) {
        return;
    }
    bounce_off_walls(&mut p.position, &mut p.velocity, ctx.arena);
}

fn contact_kind(p: &Projectile, unit: &Unit, is_target: bool) -> Contact {
    match p.mode {
        ProjectileMode::HealingHoming if is_target && unit.team == p.team && p.iframes <= 0.0 => {
            Contact::Heal
        }
        ProjectileMode::OffensiveHoming if unit.team != p.team => Contact::Damage,
        _ => Contact::Deflect,
    }
}

/// Damage, heal or bounce off every alive unit in contact range, in
/// collection order. Returns true once the projectile has been spent.
fn resolve_unit_contacts(p: &mut Projectile, target: usize, ctx: &mut TickContext) -> bool {
    for (i, unit) in ctx.units.iter_mut().enumerate() {
        if !unit.alive || p.position.distance(unit.position) >= UNIT_CONTACT_RADIUS {
            continue;
        }
        match contact_kind(p, unit, i == target) {
            Contact::Damage => {
                apply_damage(unit, p, ctx.events);
                retire(p, DestroyCause::Hit, ctx.events);
                return true;
            }
            Contact::Heal => {
                apply_heal(unit, p, ctx.events);
                retire(p, DestroyCause::Healed, ctx.events);
                return true;
            }
            Contact::Deflect => {
                deflect_off(
                    &mut p.position,
                    &mut p.velocity,
                    unit.position,
                    UNIT_CONTACT_RADIUS,
                );
            }
        }
    }
    false
}

fn apply_damage(unit: &mut Unit, p: &Projectile, events: &mut Vec<CombatEvent>) {
    unit.hp -= p.damage;
    events.push(CombatEvent::UnitHit {
        unit: unit.id,
        projectile: p.id,
        damage: p.damage,
        hp: unit.hp,
    });
    if unit.hp <= 0.0 {
        unit.alive = false;
        debug!(unit = unit.id.0, team = ?unit.team, hp = unit.hp, "unit destroyed");
        events.push(CombatEvent::UnitKilled {
            unit: unit.id,
            team: unit.team,
        });
    }
}

fn apply_heal(unit: &mut Unit, p: &Projectile, events: &mut Vec<CombatEvent>) {
    let before = unit.hp;
    unit.hp = (unit.hp + p.damage).min(unit.max_hp);
    debug!(unit = unit.id.0, from = before, to = unit.hp, "unit healed");
    events.push(CombatEvent::UnitHealed {
        unit: unit.id,
        projectile: p.id,
        amount: unit.hp - before,
        hp: unit.hp,
    });
}

/// Bounce off other projectiles in contact range, pushing both apart by
/// half the overlap. An enemy deflector destroys this projectile instead.
fn resolve_projectile_contacts(p: &mut Projectile, ctx: &mut TickContext) -> bool {
    let others: Vec<usize> = ctx.others().collect();
    for j in others {
        let other = &mut ctx.projectiles[j];
        let offset = p.position - other.position;
        let dist = offset.length();
        if dist >= PROJECTILE_CONTACT_RADIUS {
            continue;
        }

        if other.is_defensive() && other.team != p.team {
            debug!(victim = p.id.0, deflector = other.id.0, "projectile intercepted");
            retire(p, DestroyCause::Intercepted, ctx.events);
            return true;
        }

        let Some(normal) = offset.try_normalize() else {
            continue;
        };
        p.velocity = reflect(p.velocity, normal);
        other.velocity = reflect(other.velocity, -normal);
        let half_overlap = (PROJECTILE_CONTACT_RADIUS - dist) / 2.0;
        p.position += normal * half_overlap;
        other.position -= normal * half_overlap;
        bounce_off_walls(&mut other.position, &mut other.velocity, ctx.arena);
    }
    false
}
