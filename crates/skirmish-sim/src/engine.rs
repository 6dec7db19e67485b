//! Battle engine: drives a `World` from roster load to outcome.
//!
//! `BattleEngine` owns the world, processes controller commands at tick
//! boundaries, polls both teams after every update and produces
//! `BattleSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use tracing::info;

use skirmish_core::commands::BattleCommand;
use skirmish_core::constants::{DT, MAX_TIME_SCALE};
use skirmish_core::enums::{BattleOutcome, BattlePhase, Team};
use skirmish_core::error::RosterError;
use skirmish_core::roster::RosterEntry;
use skirmish_core::state::BattleSnapshot;
use skirmish_core::types::{Arena, SimTime, UnitId};

use crate::systems;
use crate::world::World;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for placement. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    pub arena: Arena,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            arena: Arena::default(),
        }
    }
}

/// The battle controller. Owns the world and all battle state.
pub struct BattleEngine {
    world: World,
    time: SimTime,
    phase: BattlePhase,
    outcome: Option<BattleOutcome>,
    time_scale: f64,
    /// Units only, no projectile pass and no outcome polling.
    preview: bool,
    command_queue: VecDeque<BattleCommand>,
}

impl BattleEngine {
    /// Create an engine with an empty world in the Setup phase.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(config.arena),
            time: SimTime::default(),
            phase: BattlePhase::default(),
            outcome: None,
            time_scale: config.time_scale.clamp(0.0, MAX_TIME_SCALE),
            preview: false,
            command_queue: VecDeque::new(),
        }
    }

    /// Replace the world with the player (team 0) and enemy (team 1)
    /// rosters and start the battle.
    ///
    /// On error the previous world and phase are kept.
    pub fn load_rosters(
        &mut self,
        player: &[RosterEntry],
        enemy: &[RosterEntry],
    ) -> Result<(), RosterError> {
        self.load(player, enemy, world_setup::instantiate)?;
        self.preview = false;
        info!(
            player = player.len(),
            enemy = enemy.len(),
            "battle started"
        );
        Ok(())
    }

    /// Like [`load_rosters`](Self::load_rosters), but with unarmed dummies
    /// that only rotate. The battle never finishes.
    pub fn load_preview(
        &mut self,
        player: &[RosterEntry],
        enemy: &[RosterEntry],
    ) -> Result<(), RosterError> {
        self.load(player, enemy, world_setup::instantiate_dummy)?;
        self.preview = true;
        info!(units = self.world.units.len(), "preview started");
        Ok(())
    }

    fn load(
        &mut self,
        player: &[RosterEntry],
        enemy: &[RosterEntry],
        spawn: fn(&mut World, Team, &[RosterEntry]) -> Result<Vec<UnitId>, RosterError>,
    ) -> Result<(), RosterError> {
        // Built aside so a bad enemy roster leaves the current world intact.
        let mut world = World::new(*self.world.arena());
        spawn(&mut world, Team::Red, player)?;
        spawn(&mut world, Team::Blue, enemy)?;
        self.world = world;
        self.time = SimTime::default();
        self.outcome = None;
        self.phase = BattlePhase::Active;
        Ok(())
    }

    /// Queue a controller command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: BattleCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = BattleCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the battle by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> BattleSnapshot {
        self.process_commands();

        if self.phase == BattlePhase::Active {
            let dt = DT * self.time_scale;
            if self.preview {
                self.world.update_units(dt);
            } else {
                self.world.update(dt);
            }
            self.time.advance(dt);
            if !self.preview {
                self.check_outcome();
            }
        }

        let events = self.world.drain_events();
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, self.outcome, events)
    }

    /// Get the current battle phase.
    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Result of the battle once it has finished.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access for scenario setup in tests.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single controller command.
    fn handle_command(&mut self, command: BattleCommand) {
        match command {
            BattleCommand::Pause => {
                if self.phase == BattlePhase::Active {
                    self.phase = BattlePhase::Paused;
                }
            }
            BattleCommand::Resume => {
                if self.phase == BattlePhase::Paused {
                    self.phase = BattlePhase::Active;
                }
            }
            BattleCommand::SetTimeScale { scale } => {
                // NaN fails every comparison and would survive clamp.
                if scale.is_finite() {
                    self.time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
                }
            }
        }
    }

    /// Finish the battle once either team has no living unit.
    fn check_outcome(&mut self) {
        let player_alive = self.world.team_alive(Team::Red);
        let enemy_alive = self.world.team_alive(Team::Blue);
        if let Some(outcome) = BattleOutcome::from_alive(player_alive, enemy_alive) {
            self.outcome = Some(outcome);
            self.phase = BattlePhase::Finished;
            info!(
                ?outcome,
                tick = self.time.tick,
                secs = self.time.elapsed_secs,
                "battle finished"
            );
        }
    }
}
