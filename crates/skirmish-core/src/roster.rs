//! Team rosters supplied by the outside loadout/formation layer.
//!
//! A roster is an ordered list of (loadout, spawn position) entries. The
//! stat bundles here are the base-level values of each unit class; any
//! leveling happens before the roster reaches the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::ShapeKind;
use crate::error::RosterError;
use crate::types::{Arena, Vec2};

/// One unit slot in a team roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub loadout: UnitLoadout,
    pub position: Vec2,
}

impl RosterEntry {
    pub fn new(loadout: UnitLoadout, position: Vec2) -> Self {
        Self { loadout, position }
    }

    /// Check stats and position. `slot` is only used to label the error.
    pub fn validate(&self, slot: usize, arena: &Arena) -> Result<(), RosterError> {
        if !(self.position.is_finite() && arena.contains(self.position)) {
            return Err(RosterError::OutOfArena {
                slot,
                x: self.position.x,
                y: self.position.y,
            });
        }
        self.loadout.validate(slot)
    }
}

/// Unit class together with its stat bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum UnitLoadout {
    Triangle(TriangleStats),
    Square(SquareStats),
    Pentagon(PentagonStats),
}

impl UnitLoadout {
    pub fn shape(&self) -> ShapeKind {
        match self {
            UnitLoadout::Triangle(_) => ShapeKind::Triangle,
            UnitLoadout::Square(_) => ShapeKind::Square,
            UnitLoadout::Pentagon(_) => ShapeKind::Pentagon,
        }
    }

    pub fn hp(&self) -> f64 {
        match self {
            UnitLoadout::Triangle(s) => s.hp,
            UnitLoadout::Square(s) => s.hp,
            UnitLoadout::Pentagon(s) => s.hp,
        }
    }

    fn validate(&self, slot: usize) -> Result<(), RosterError> {
        let shape = self.shape();
        let check = |field: &'static str, value: f64, positive: bool| {
            let ok = value.is_finite() && if positive { value > 0.0 } else { value >= 0.0 };
            if ok {
                Ok(())
            } else {
                Err(RosterError::InvalidStat {
                    slot,
                    shape,
                    field,
                    value,
                })
            }
        };

        match self {
            UnitLoadout::Triangle(s) => {
                check("hp", s.hp, true)?;
                check("damage", s.damage, false)?;
                check("speed", s.speed, false)?;
                check("acceleration", s.acceleration, false)?;
                check("rate", s.rate, true)
            }
            UnitLoadout::Square(s) => {
                check("hp", s.hp, true)?;
                check("speed", s.speed, false)?;
                check("acceleration", s.acceleration, false)?;
                check("rate", s.rate, true)?;
                check("lifetime", s.lifetime, true)
            }
            UnitLoadout::Pentagon(s) => {
                check("hp", s.hp, true)?;
                check("heal", s.heal, false)?;
                check("speed", s.speed, false)?;
                check("acceleration", s.acceleration, false)?;
                check("rate", s.rate, true)
            }
        }
    }
}

/// Offensive shooter stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriangleStats {
    pub hp: f64,
    pub damage: f64,
    pub speed: f64,
    pub acceleration: f64,
    /// Seconds between shots.
    pub rate: f64,
}

impl Default for TriangleStats {
    fn default() -> Self {
        Self {
            hp: DEFAULT_UNIT_HP,
            damage: TRIANGLE_DAMAGE,
            speed: TRIANGLE_SPEED,
            acceleration: TRIANGLE_ACCELERATION,
            rate: TRIANGLE_RATE,
        }
    }
}

/// Defensive shooter stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquareStats {
    pub hp: f64,
    pub speed: f64,
    pub acceleration: f64,
    /// Seconds between shots.
    pub rate: f64,
    /// Seconds each deflector stays alive.
    pub lifetime: f64,
}

impl Default for SquareStats {
    fn default() -> Self {
        Self {
            hp: DEFAULT_UNIT_HP,
            speed: SQUARE_SPEED,
            acceleration: SQUARE_ACCELERATION,
            rate: SQUARE_RATE,
            lifetime: SQUARE_LIFETIME,
        }
    }
}

/// Healer stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PentagonStats {
    pub hp: f64,
    pub heal: f64,
    pub speed: f64,
    pub acceleration: f64,
    /// Seconds between shots.
    pub rate: f64,
}

impl Default for PentagonStats {
    fn default() -> Self {
        Self {
            hp: DEFAULT_UNIT_HP,
            heal: PENTAGON_HEAL,
            speed: PENTAGON_SPEED,
            acceleration: PENTAGON_ACCELERATION,
            rate: PENTAGON_RATE,
        }
    }
}
