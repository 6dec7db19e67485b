//! Battle configuration file (TOML).
//!
//! ```toml
//! seed = 7
//! time_limit_secs = 90.0
//!
//! [arena]
//! width = 800.0
//! height = 600.0
//!
//! [[player]]
//! position = [150.0, 300.0]
//! loadout = { shape = "triangle", damage = 6.0 }
//!
//! [[enemy]]
//! position = [650.0, 300.0]
//! loadout = { shape = "pentagon" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TIME_LIMIT_SECS;
use crate::error::ConfigError;
use crate::roster::RosterEntry;
use crate::types::Arena;

/// Everything needed to set up and run one battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// RNG seed; `None` lets the runner choose.
    pub seed: Option<u64>,
    pub time_scale: f64,
    pub time_limit_secs: f64,
    pub arena: Arena,
    /// Team 0 roster.
    pub player: Vec<RosterEntry>,
    /// Team 1 roster.
    pub enemy: Vec<RosterEntry>,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            seed: None,
            time_scale: 1.0,
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            arena: Arena::default(),
            player: Vec::new(),
            enemy: Vec::new(),
        }
    }
}

impl BattleConfig {
    /// Parse and validate a TOML battle description.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: BattleConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML battle file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check the arena and both rosters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Arena { width, height } = self.arena;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidArena { width, height });
        }
        for (side, roster) in [("player", &self.player), ("enemy", &self.enemy)] {
            for (slot, entry) in roster.iter().enumerate() {
                entry
                    .validate(slot, &self.arena)
                    .map_err(|source| ConfigError::Roster { side, source })?;
            }
        }
        Ok(())
    }
}
