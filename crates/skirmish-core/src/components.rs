//! Entity data for units, projectiles and their behaviors.
//!
//! These are plain data structs. Per-tick logic lives in the simulation
//! crate's systems, not here.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{ProjectileMode, ShapeKind, Team};
use crate::types::{ProjectileId, TargetRef, UnitId, Vec2};

/// A polygon-shaped combatant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    /// Assigned by the world when the unit is added.
    pub id: UnitId,
    pub team: Team,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Current rotation in degrees, kept in [0, 360).
    pub rotation: f64,
    /// Degrees per second.
    pub rotation_speed: f64,
    pub shape: ShapeKind,
    /// Unclamped below zero: a killing blow may leave hp negative.
    pub hp: f64,
    /// Fixed at creation.
    pub max_hp: f64,
    /// Flips to false once, when hp first reaches zero or below.
    pub alive: bool,
    /// Vertex cursor for spreading projectile spawn points around the polygon.
    pub next_corner: usize,
    pub behavior: Option<Behavior>,
}

impl Unit {
    /// Build a unit. `max_hp` is `hp`, floored at `MIN_MAX_HP`, so a unit
    /// created with less than that starts injured.
    pub fn new(
        team: Team,
        position: Vec2,
        shape: ShapeKind,
        behavior: Option<Behavior>,
        hp: f64,
        rotation_speed: f64,
    ) -> Self {
        Self {
            id: UnitId::default(),
            team,
            position,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            rotation_speed,
            shape,
            hp,
            max_hp: hp.max(MIN_MAX_HP),
            alive: true,
            next_corner: 0,
            behavior,
        }
    }

    pub fn sides(&self) -> u8 {
        self.shape.sides()
    }

    /// Remaining health as a fraction of max hp.
    pub fn hp_fraction(&self) -> f64 {
        self.hp / self.max_hp
    }

    pub fn is_injured(&self) -> bool {
        self.hp < self.max_hp
    }
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Assigned by the world when the projectile is added.
    pub id: ProjectileId,
    pub team: Team,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Damage dealt on hit, or hp restored when healing.
    pub damage: f64,
    pub max_speed: f64,
    pub acceleration: f64,
    /// Remaining seconds; only counts down in defensive mode.
    pub lifetime: f64,
    pub kind: ShapeKind,
    pub mode: ProjectileMode,
    pub alive: bool,
    /// False until the first update assigns the launch velocity.
    pub initialized: bool,
    /// Remaining spawn invulnerability (seconds).
    pub iframes: f64,
    /// Heading for rendering, degrees, 0 = pointing up.
    pub facing_deg: f64,
    /// Last resolved target. Re-resolved every tick.
    pub target: Option<TargetRef>,
}

impl Projectile {
    fn base(team: Team, position: Vec2, kind: ShapeKind, mode: ProjectileMode) -> Self {
        Self {
            id: ProjectileId::default(),
            team,
            position,
            velocity: Vec2::ZERO,
            damage: 0.0,
            max_speed: 0.0,
            acceleration: 0.0,
            lifetime: 0.0,
            kind,
            mode,
            alive: true,
            initialized: false,
            iframes: PROJECTILE_IFRAMES,
            facing_deg: 0.0,
            target: None,
        }
    }

    /// Triangle-sourced homing projectile that damages enemy units.
    pub fn offensive(team: Team, position: Vec2, damage: f64, speed: f64, acceleration: f64) -> Self {
        Self {
            damage,
            max_speed: speed,
            acceleration,
            ..Self::base(team, position, ShapeKind::Triangle, ProjectileMode::OffensiveHoming)
        }
    }

    /// Square-sourced deflector that hunts enemy projectiles for `lifetime` seconds.
    pub fn defensive(team: Team, position: Vec2, lifetime: f64, speed: f64, acceleration: f64) -> Self {
        Self {
            lifetime,
            max_speed: speed,
            acceleration,
            ..Self::base(
                team,
                position,
                ShapeKind::Square,
                ProjectileMode::DefensiveDeflecting,
            )
        }
    }

    /// Pentagon-sourced homing projectile that heals teammates.
    pub fn healing(team: Team, position: Vec2, heal: f64, speed: f64, acceleration: f64) -> Self {
        Self {
            damage: heal,
            max_speed: speed,
            acceleration,
            ..Self::base(team, position, ShapeKind::Pentagon, ProjectileMode::HealingHoming)
        }
    }

    pub fn is_defensive(&self) -> bool {
        self.mode == ProjectileMode::DefensiveDeflecting
    }

    pub fn is_healing(&self) -> bool {
        self.mode == ProjectileMode::HealingHoming
    }
}

/// Firing strategy attached to a unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Behavior {
    Shooter(ShooterBehavior),
    Healer(HealerBehavior),
}

impl Behavior {
    /// Seconds until the next shot.
    pub fn cooldown(&self) -> f64 {
        match self {
            Behavior::Shooter(s) => s.cooldown,
            Behavior::Healer(h) => h.cooldown,
        }
    }

    /// Same configuration with the cooldown cleared, ready to fire at once.
    pub fn rearmed(&self) -> Self {
        let mut fresh = self.clone();
        match &mut fresh {
            Behavior::Shooter(s) => s.cooldown = 0.0,
            Behavior::Healer(h) => h.cooldown = 0.0,
        }
        fresh
    }
}

/// Fires offensive or defensive projectiles on a fixed period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShooterBehavior {
    pub damage: f64,
    /// Seconds between shots.
    pub rate: f64,
    /// Fire square-type deflectors instead of triangle-type homing shots.
    pub defensive: bool,
    /// Lifetime given to defensive projectiles.
    pub lifetime: f64,
    pub projectile_speed: f64,
    pub acceleration: f64,
    pub cooldown: f64,
}

impl Default for ShooterBehavior {
    fn default() -> Self {
        Self {
            damage: SHOOTER_DEFAULT_DAMAGE,
            rate: SHOOTER_DEFAULT_RATE,
            defensive: false,
            lifetime: SHOOTER_DEFAULT_LIFETIME,
            projectile_speed: SHOOTER_DEFAULT_SPEED,
            acceleration: SHOOTER_DEFAULT_ACCELERATION,
            cooldown: 0.0,
        }
    }
}

/// Fires healing projectiles on a fixed period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealerBehavior {
    pub heal: f64,
    /// Seconds between shots.
    pub rate: f64,
    pub projectile_speed: f64,
    pub acceleration: f64,
    pub cooldown: f64,
}

impl Default for HealerBehavior {
    fn default() -> Self {
        Self {
            heal: HEALER_DEFAULT_HEAL,
            rate: HEALER_DEFAULT_RATE,
            projectile_speed: HEALER_DEFAULT_SPEED,
            acceleration: HEALER_DEFAULT_ACCELERATION,
            cooldown: 0.0,
        }
    }
}
