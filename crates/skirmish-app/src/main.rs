//! Headless battle runner.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use skirmish_app::demo;
use skirmish_app::game_loop::{spawn_game_loop, LoopSettings};
use skirmish_app::state::{shared_snapshot, Scenario};
use skirmish_core::config::BattleConfig;
use skirmish_core::enums::Team;
use skirmish_sim::SimConfig;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How often the main thread reports progress while the loop runs.
const PROGRESS_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Parser)]
#[command(name = "skirmish", about = "Run a 2D shape battle headlessly", version)]
struct Args {
    /// Battle file (TOML). Runs the built-in demo when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Placement seed; overrides the battle file.
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated seconds before an undecided battle is stopped.
    #[arg(long)]
    max_secs: Option<f64>,

    /// Pace ticks to the wall clock at 60Hz.
    #[arg(long)]
    realtime: bool,

    /// Run the endless respawning squads instead of a single battle.
    #[arg(long)]
    respawn: bool,

    /// Print the final report as JSON on stdout.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => BattleConfig::load(path)
            .with_context(|| format!("loading battle file {}", path.display()))?,
        None => demo::demo_config(),
    };

    let time_limit_secs = args.max_secs.unwrap_or(config.time_limit_secs);
    ensure!(
        time_limit_secs.is_finite() && time_limit_secs > 0.0,
        "time limit must be a positive number of seconds, got {time_limit_secs}"
    );
    ensure!(
        config.time_scale.is_finite() && config.time_scale > 0.0,
        "time scale must be positive, got {}",
        config.time_scale
    );

    let sim = SimConfig {
        seed: args.seed.or(config.seed).unwrap_or(SimConfig::default().seed),
        time_scale: config.time_scale,
        arena: config.arena,
    };
    let settings = LoopSettings {
        sim,
        time_limit_secs,
        realtime: args.realtime,
    };
    let scenario = if args.respawn {
        Scenario::Respawn
    } else {
        Scenario::Battle {
            player: config.player,
            enemy: config.enemy,
        }
    };

    let latest = shared_snapshot();
    // The loop stops once every sender is gone, so keep this one until join.
    let (cmd_tx, handle) = spawn_game_loop(settings, scenario, latest.clone())
        .context("spawning game loop thread")?;
    let mut last_report = Instant::now();
    while !handle.is_finished() {
        std::thread::sleep(POLL_INTERVAL);
        if last_report.elapsed() < PROGRESS_INTERVAL {
            continue;
        }
        last_report = Instant::now();
        let progress = latest.lock().ok().and_then(|snapshot| {
            snapshot.as_ref().map(|s| {
                (
                    s.time.elapsed_secs,
                    s.alive_count(Team::Red),
                    s.alive_count(Team::Blue),
                )
            })
        });
        if let Some((secs, red, blue)) = progress {
            info!(secs, red, blue, "battle progress");
        }
    }

    let report = handle
        .join()
        .map_err(|_| anyhow::anyhow!("game loop thread panicked"))??;
    drop(cmd_tx);

    info!(
        stop = ?report.stop,
        outcome = ?report.outcome,
        ticks = report.ticks,
        secs = report.elapsed_secs,
        respawns = report.respawns,
        "battle over"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
