//! Game loop thread: runs a battle session at 60Hz and publishes snapshots.
//!
//! The session is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel. Snapshots are stored in shared state
//! for polling, and a `LoopReport` is returned through the join handle.

use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use skirmish_core::commands::BattleCommand;
use skirmish_core::constants::{DT, MAX_TIME_SCALE, TICK_RATE};
use skirmish_core::enums::{BattleOutcome, BattlePhase};
use skirmish_core::error::RosterError;
use skirmish_core::state::BattleSnapshot;
use skirmish_sim::{BattleEngine, RespawnBattle, SimConfig};

use crate::state::{GameLoopCommand, LoopReport, Scenario, SharedSnapshot, StopReason};

/// Nominal duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Slack for the time limit; summed `DT`s drift below whole seconds.
const TIME_EPSILON: f64 = 1e-9;

/// How the game loop runs and when it stops.
#[derive(Debug, Clone, Copy)]
pub struct LoopSettings {
    pub sim: SimConfig,
    /// Simulated seconds after which an undecided battle is stopped.
    pub time_limit_secs: f64,
    /// Pace ticks to the wall clock instead of running flat out.
    pub realtime: bool,
}

/// A running battle of either kind, behind one tick interface.
enum Session {
    Battle(BattleEngine),
    Respawn {
        battle: RespawnBattle,
        paused: bool,
        time_scale: f64,
    },
}

impl Session {
    fn start(settings: &LoopSettings, scenario: Scenario) -> Result<Self, RosterError> {
        match scenario {
            Scenario::Battle { player, enemy } => {
                let mut engine = BattleEngine::new(settings.sim);
                engine.load_rosters(&player, &enemy)?;
                Ok(Session::Battle(engine))
            }
            Scenario::Respawn => Ok(Session::Respawn {
                battle: RespawnBattle::new(&settings.sim),
                paused: false,
                time_scale: settings.sim.time_scale,
            }),
        }
    }

    fn command(&mut self, command: BattleCommand) {
        match self {
            Session::Battle(engine) => engine.queue_command(command),
            Session::Respawn {
                paused, time_scale, ..
            } => match command {
                BattleCommand::Pause => *paused = true,
                BattleCommand::Resume => *paused = false,
                BattleCommand::SetTimeScale { scale } => {
                    if scale.is_finite() {
                        *time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
                    }
                }
            },
        }
    }

    fn tick(&mut self) -> BattleSnapshot {
        match self {
            Session::Battle(engine) => engine.tick(),
            Session::Respawn {
                battle,
                paused,
                time_scale,
            } => {
                if !*paused {
                    battle.update(DT * *time_scale);
                }
                let mut snapshot = battle.snapshot();
                if *paused {
                    snapshot.phase = BattlePhase::Paused;
                }
                snapshot
            }
        }
    }

    fn time_scale(&self) -> f64 {
        match self {
            Session::Battle(engine) => engine.time_scale(),
            Session::Respawn { time_scale, .. } => *time_scale,
        }
    }

    fn outcome(&self) -> Option<BattleOutcome> {
        match self {
            Session::Battle(engine) => engine.outcome(),
            Session::Respawn { .. } => None,
        }
    }

    fn respawns(&self) -> u64 {
        match self {
            Session::Battle(_) => 0,
            Session::Respawn { battle, .. } => battle.respawns(),
        }
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle yielding the final report, or
/// the roster error that kept the battle from starting.
pub fn spawn_game_loop(
    settings: LoopSettings,
    scenario: Scenario,
    latest_snapshot: SharedSnapshot,
) -> io::Result<(
    mpsc::Sender<GameLoopCommand>,
    JoinHandle<Result<LoopReport, RosterError>>,
)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("skirmish-game-loop".into())
        .spawn(move || {
            let session = Session::start(&settings, scenario)?;
            Ok(run_game_loop(session, &settings, cmd_rx, &latest_snapshot))
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until the battle is decided, the time limit passes,
/// or a Shutdown command / channel disconnect arrives.
fn run_game_loop(
    mut session: Session,
    settings: &LoopSettings,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
) -> LoopReport {
    info!(
        seed = settings.sim.seed,
        limit = settings.time_limit_secs,
        realtime = settings.realtime,
        "game loop started"
    );
    let mut next_tick_time = Instant::now();
    let mut last = BattleSnapshot::default();

    let stop = 'run: loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Battle(cmd)) => session.command(cmd),
                Ok(GameLoopCommand::Shutdown) => break 'run StopReason::Shutdown,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break 'run StopReason::Shutdown,
            }
        }

        // 2. Advance one tick (the session handles pause semantics)
        last = session.tick();

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(last.clone());
        }

        // 4. Stop once decided or out of time
        if last.phase == BattlePhase::Finished {
            break StopReason::Decided;
        }
        if last.time.elapsed_secs + TIME_EPSILON >= settings.time_limit_secs {
            break StopReason::TimeLimit;
        }

        if !settings.realtime {
            continue;
        }

        // 5. Sleep until next tick, adjusting for time_scale
        let time_scale = session.time_scale();
        let effective_tick_duration = if time_scale > 0.001 {
            TICK_DURATION.div_f64(time_scale)
        } else {
            TICK_DURATION
        };

        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind, reset instead of catching up
            next_tick_time = now;
        }
    };

    debug!(?stop, tick = last.time.tick, "game loop stopped");
    LoopReport {
        stop,
        outcome: session.outcome(),
        ticks: last.time.tick,
        elapsed_secs: last.time.elapsed_secs,
        respawns: session.respawns(),
        final_snapshot: last,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;
    use crate::state::shared_snapshot;

    fn settings(time_limit_secs: f64, realtime: bool) -> LoopSettings {
        LoopSettings {
            sim: SimConfig::default(),
            time_limit_secs,
            realtime,
        }
    }

    fn demo_battle() -> Scenario {
        let config = demo::demo_config();
        Scenario::Battle {
            player: config.player,
            enemy: config.enemy,
        }
    }

    #[test]
    fn test_configured_time_scale_applies_from_first_tick() {
        let mut fast = settings(1.0, false);
        fast.sim.time_scale = 2.0;
        let (_tx, handle) = spawn_game_loop(fast, Scenario::Respawn, shared_snapshot()).unwrap();
        let report = handle.join().unwrap().unwrap();

        assert_eq!(report.stop, StopReason::TimeLimit);
        assert_eq!(report.ticks, 30);
        assert!((report.elapsed_secs - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_set_time_scale_command_speeds_up_loop() {
        let (tx, handle) =
            spawn_game_loop(settings(0.5, true), Scenario::Respawn, shared_snapshot()).unwrap();
        tx.send(GameLoopCommand::Battle(BattleCommand::SetTimeScale {
            scale: MAX_TIME_SCALE,
        }))
        .unwrap();
        let report = handle.join().unwrap().unwrap();

        // 30 ticks at 1x; at 4x the half second takes about 8.
        assert_eq!(report.stop, StopReason::TimeLimit);
        assert!(report.ticks < 30, "ran {} ticks", report.ticks);
        assert!(report.elapsed_secs + TIME_EPSILON >= 0.5);
    }

    #[test]
    fn test_headless_loop_stops_at_time_limit() {
        let latest = shared_snapshot();
        let (tx, handle) =
            spawn_game_loop(settings(1.0, false), Scenario::Respawn, latest.clone()).unwrap();
        let report = handle.join().unwrap().unwrap();
        drop(tx);

        assert_eq!(report.stop, StopReason::TimeLimit);
        assert!((report.elapsed_secs - 1.0).abs() < 1e-6);
        assert_eq!(report.ticks, 60);
        assert_eq!(report.outcome, None);

        let stored = latest.lock().unwrap();
        assert_eq!(stored.as_ref().map(|s| s.time.tick), Some(60));
    }

    #[test]
    fn test_shutdown_stops_realtime_loop() {
        let (tx, handle) =
            spawn_game_loop(settings(3600.0, true), demo_battle(), shared_snapshot()).unwrap();
        std::thread::sleep(Duration::from_millis(50));
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let report = handle.join().unwrap().unwrap();
        assert_eq!(report.stop, StopReason::Shutdown);
        assert!(report.elapsed_secs < 3600.0);
    }

    #[test]
    fn test_bad_roster_is_reported_through_handle() {
        let scenario = Scenario::Battle {
            player: Vec::new(),
            enemy: vec![skirmish_core::roster::RosterEntry::new(
                skirmish_core::roster::UnitLoadout::Triangle(Default::default()),
                skirmish_core::types::Vec2::new(-10.0, 0.0),
            )],
        };
        let (_tx, handle) = spawn_game_loop(settings(1.0, false), scenario, shared_snapshot()).unwrap();
        let err = handle.join().unwrap().unwrap_err();
        assert!(matches!(err, RosterError::OutOfArena { slot: 0, .. }));
    }

    #[test]
    fn test_respawn_session_pause_resume() {
        let mut session = Session::start(&settings(10.0, false), Scenario::Respawn).unwrap();
        session.tick();

        session.command(BattleCommand::Pause);
        let snap = session.tick();
        assert_eq!(snap.phase, BattlePhase::Paused);
        let paused_tick = snap.time.tick;
        assert_eq!(session.tick().time.tick, paused_tick);

        session.command(BattleCommand::Resume);
        let snap = session.tick();
        assert_eq!(snap.phase, BattlePhase::Active);
        assert!(snap.time.tick > paused_tick);

        session.command(BattleCommand::SetTimeScale { scale: 9.0 });
        assert_eq!(session.time_scale(), MAX_TIME_SCALE);
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
