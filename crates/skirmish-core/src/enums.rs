//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// One of the two sides in a battle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Team 0: the player side, spawned on the left half.
    #[default]
    Red,
    /// Team 1: the enemy side, spawned on the right half.
    Blue,
}

impl Team {
    /// Numeric team id (0 or 1).
    pub fn index(self) -> u8 {
        match self {
            Team::Red => 0,
            Team::Blue => 1,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Team::Red),
            1 => Some(Team::Blue),
            _ => None,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }
}

/// Polygon class of a unit, reused as the source-kind tag of its projectiles.
///
/// On a projectile the tag decides targeting priority and contact rules,
/// independent of which unit actually fired it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Triangle,
    Square,
    Pentagon,
}

impl ShapeKind {
    /// Polygon side count.
    pub fn sides(self) -> u8 {
        match self {
            ShapeKind::Triangle => 3,
            ShapeKind::Square => 4,
            ShapeKind::Pentagon => 5,
        }
    }

    pub fn from_sides(sides: u8) -> Option<Self> {
        match sides {
            3 => Some(ShapeKind::Triangle),
            4 => Some(ShapeKind::Square),
            5 => Some(ShapeKind::Pentagon),
            _ => None,
        }
    }
}

/// Per-tick update mode of a projectile. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileMode {
    /// Chases the nearest enemy unit and damages it on contact.
    OffensiveHoming,
    /// Chases the most injured teammate and heals it on contact.
    HealingHoming,
    /// Intercepts and destroys enemy projectiles until its lifetime ends.
    DefensiveDeflecting,
}

/// Battle controller phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePhase {
    /// Rosters not loaded yet.
    #[default]
    Setup,
    Active,
    Paused,
    /// One or both teams eliminated; the world no longer updates.
    Finished,
}

/// Result of a finished battle from the player's (team 0) point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    Win,
    Lose,
    Tie,
}

impl BattleOutcome {
    /// Decide the outcome from the two team-alive flags, if the battle is over.
    pub fn from_alive(player_alive: bool, enemy_alive: bool) -> Option<Self> {
        match (player_alive, enemy_alive) {
            (false, false) => Some(BattleOutcome::Tie),
            (true, false) => Some(BattleOutcome::Win),
            (false, true) => Some(BattleOutcome::Lose),
            (true, true) => None,
        }
    }
}

/// Why a projectile stopped being alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DestroyCause {
    /// Dealt its damage to an enemy unit.
    Hit,
    /// Delivered its heal.
    Healed,
    /// Destroyed by an enemy defensive projectile.
    Intercepted,
    /// Two defensive projectiles destroyed each other.
    MutualDestruction,
    /// Defensive lifetime ran out.
    Expired,
    /// No valid target existed this tick.
    NoTarget,
}
