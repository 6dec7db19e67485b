//! State shared between the runner's main thread and the game loop thread.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use skirmish_core::commands::BattleCommand;
use skirmish_core::enums::BattleOutcome;
use skirmish_core::roster::RosterEntry;
use skirmish_core::state::BattleSnapshot;

/// Commands sent from the main thread to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A controller command to forward to the battle engine.
    Battle(BattleCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// What the game loop runs.
#[derive(Debug, Clone)]
pub enum Scenario {
    /// A single battle between two rosters, ending when a side falls.
    Battle {
        player: Vec<RosterEntry>,
        enemy: Vec<RosterEntry>,
    },
    /// The preset squads, respawning forever; only the time limit ends it.
    Respawn,
}

/// Latest snapshot, written by the game loop after every tick.
///
/// `None` until the first tick has run.
pub type SharedSnapshot = Arc<Mutex<Option<BattleSnapshot>>>;

pub fn shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}

/// Why the game loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StopReason {
    /// One or both teams were eliminated.
    Decided,
    /// The simulated time limit ran out first.
    TimeLimit,
    /// A Shutdown command arrived or the command channel closed.
    Shutdown,
}

/// Summary handed back when the game loop thread exits.
#[derive(Debug, Clone, Serialize)]
pub struct LoopReport {
    pub stop: StopReason,
    pub outcome: Option<BattleOutcome>,
    pub ticks: u64,
    pub elapsed_secs: f64,
    /// Units replaced; always 0 outside the respawn scenario.
    pub respawns: u64,
    pub final_snapshot: BattleSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_snapshot_starts_empty() {
        let shared = shared_snapshot();
        assert!(shared.lock().unwrap().is_none());
    }

    #[test]
    fn test_stop_reason_serializes_as_name() {
        let json = serde_json::to_string(&StopReason::TimeLimit).unwrap();
        assert_eq!(json, "\"TimeLimit\"");
    }
}
