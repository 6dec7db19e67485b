//! Error types for roster validation and battle configuration loading.
//!
//! The per-tick simulation never fails; these errors only arise at the
//! boundary where outside data is turned into units.

use thiserror::Error;

use crate::enums::ShapeKind;

/// A roster entry that cannot be turned into a unit.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    /// A stat is NaN, infinite, or outside its allowed range.
    #[error("slot {slot}: {shape:?} has invalid {field} ({value})")]
    InvalidStat {
        slot: usize,
        shape: ShapeKind,
        field: &'static str,
        value: f64,
    },

    /// The spawn position lies outside the arena.
    #[error("slot {slot}: position ({x}, {y}) is outside the arena")]
    OutOfArena { slot: usize, x: f64, y: f64 },
}

/// Failure to load a battle configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read battle config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse battle config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid arena size {width}x{height}")]
    InvalidArena { width: f64, height: f64 },

    /// A bad entry in the `player` or `enemy` roster.
    #[error("{side} roster: {source}")]
    Roster {
        side: &'static str,
        #[source]
        source: RosterError,
    },
}
