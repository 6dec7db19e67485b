//! Battle state snapshot: the read-only view handed to renderers and controllers.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::CombatEvent;
use crate::types::{ProjectileId, SimTime, UnitId, Vec2};

/// Complete visible battle state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub time: SimTime,
    pub phase: BattlePhase,
    pub outcome: Option<BattleOutcome>,
    pub units: Vec<UnitView>,
    pub projectiles: Vec<ProjectileView>,
    /// Events raised since the previous snapshot.
    pub events: Vec<CombatEvent>,
}

/// A unit as seen by a renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub id: UnitId,
    pub team: Team,
    pub shape: ShapeKind,
    pub sides: u8,
    pub position: Vec2,
    /// Degrees.
    pub rotation: f64,
    pub hp: f64,
    pub max_hp: f64,
    pub alive: bool,
    /// Polygon vertices in arena space.
    pub corners: Vec<Vec2>,
}

/// A projectile as seen by a renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: ProjectileId,
    pub team: Team,
    pub kind: ShapeKind,
    pub mode: ProjectileMode,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Degrees, 0 = pointing up.
    pub facing_deg: f64,
    pub alive: bool,
}

impl BattleSnapshot {
    /// Number of living units on a team.
    pub fn alive_count(&self, team: Team) -> usize {
        self.units
            .iter()
            .filter(|u| u.alive && u.team == team)
            .count()
    }
}
