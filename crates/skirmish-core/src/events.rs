//! Events emitted by the simulation for logging and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{ProjectileId, UnitId};

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// A behavior spawned a projectile.
    ProjectileFired {
        projectile: ProjectileId,
        unit: UnitId,
        team: Team,
        kind: ShapeKind,
    },
    /// An offensive projectile struck an enemy unit.
    UnitHit {
        unit: UnitId,
        projectile: ProjectileId,
        damage: f64,
        hp: f64,
    },
    /// A unit's hp reached zero or below.
    UnitKilled { unit: UnitId, team: Team },
    /// A healing projectile restored hp.
    UnitHealed {
        unit: UnitId,
        projectile: ProjectileId,
        amount: f64,
        hp: f64,
    },
    /// A projectile stopped being alive.
    ProjectileDestroyed {
        projectile: ProjectileId,
        cause: DestroyCause,
    },
}
