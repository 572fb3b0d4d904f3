//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.
//!
//! Two clocks drive a frame. Real time (clamped to `MAX_FRAME_DT`) runs the
//! inter-wave countdown, the life-lost pause and the music schedule.
//! Simulated time is real time times the speed multiplier, and is zero while
//! paused or recovering from a lost life.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use defender_core::commands::PlayerCommand;
use defender_core::constants::*;
use defender_core::enums::{AbilityKind, GamePhase, TurretClass, WaveCategory};
use defender_core::events::AudioEvent;
use defender_core::state::GameStateSnapshot;
use defender_core::types::SimTime;
use defender_profile::ProfileRecord;

use crate::music::MusicSchedule;
use crate::run::RunState;
use crate::systems::{self, TickContext};
use crate::turret::Turret;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub starting_lives: u32,
    pub starting_money: u32,
    /// Requested class. Falls back to Standard if not unlocked.
    pub turret_class: TurretClass,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_lives: STARTING_LIVES,
            starting_money: STARTING_MONEY,
            turret_class: TurretClass::Standard,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    speed_index: usize,
    rng: ChaCha8Rng,
    config: SimConfig,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    audio_events: Vec<AudioEvent>,
    turret: Turret,
    run: RunState,
    profile: ProfileRecord,
    music: MusicSchedule,
}

impl SimulationEngine {
    /// Create a new engine for `profile`, loaded by the caller.
    pub fn new(config: SimConfig, profile: ProfileRecord) -> Self {
        let class = unlocked_class(&profile, config.turret_class);
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            speed_index: 0,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            turret: Turret::new(class),
            run: RunState::new(config.starting_money, config.starting_lives),
            profile,
            music: MusicSchedule::default(),
            config,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance by one nominal frame.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.advance(FRAME_DT)
    }

    /// Advance by `real_dt` wall-clock seconds and return the resulting snapshot.
    pub fn advance(&mut self, real_dt: f64) -> GameStateSnapshot {
        let real_dt = if real_dt.is_finite() {
            real_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };

        self.process_commands();

        let mut sim_dt = 0.0;
        if self.phase != GamePhase::GameOver {
            self.music
                .tick(real_dt, self.profile.music_enabled, &mut self.audio_events);

            if self.run.life_lost_pause > 0.0 {
                self.run.life_lost_pause = (self.run.life_lost_pause - real_dt).max(0.0);
            }
            if self.run.waves.tick_countdown(real_dt) {
                self.start_next_wave();
            }

            if self.phase == GamePhase::Active && self.run.life_lost_pause <= 0.0 {
                sim_dt = real_dt * self.speed_multiplier();
            }
            if sim_dt > 0.0 {
                self.run_systems(sim_dt);
            }
            if self.run.game_over {
                self.enter_game_over();
            }
        }
        self.time.advance(sim_dt, real_dt);

        let mut audio_events = std::mem::take(&mut self.audio_events);
        if !self.profile.sfx_enabled {
            audio_events.retain(|e| !e.is_sfx());
        }
        systems::snapshot::build_snapshot(
            &self.world,
            &systems::snapshot::SnapshotInput {
                time: self.time,
                phase: self.phase,
                speed_multiplier: self.speed_multiplier(),
                turret: &self.turret,
                run: &self.run,
                profile: &self.profile,
            },
            audio_events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn speed_multiplier(&self) -> f64 {
        SPEED_STEPS[self.speed_index % SPEED_STEPS.len()]
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn turret(&self) -> &Turret {
        &self.turret
    }

    pub fn run_state(&self) -> &RunState {
        &self.run
    }

    pub fn profile(&self) -> &ProfileRecord {
        &self.profile
    }

    /// Profile to persist, if anything worth saving changed since the last call.
    pub fn take_save_request(&mut self) -> Option<ProfileRecord> {
        if self.run.save_requested {
            self.run.save_requested = false;
            Some(self.profile.clone())
        } else {
            None
        }
    }

    /// Spawn a full-grown enemy outside any wave schedule (for testing).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        kind: defender_core::enums::EnemyKind,
        position: defender_core::types::Position,
    ) -> Entity {
        let wave = self.run.waves.current_wave.max(1);
        let mut enemy = defender_enemy::fsm::spawn_enemy(
            kind,
            &crate::world_setup::baseline_for_wave(wave),
        );
        enemy.spawn_scale = 1.0;
        self.run.waves.record_children(1);
        self.world.spawn((enemy, position))
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    #[cfg(test)]
    pub fn turret_mut(&mut self) -> &mut Turret {
        &mut self.turret
    }

    #[cfg(test)]
    pub fn profile_mut(&mut self) -> &mut ProfileRecord {
        &mut self.profile
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Invalid commands change nothing.
    fn handle_command(&mut self, command: PlayerCommand) {
        let game_over = self.phase == GamePhase::GameOver;

        match command {
            PlayerCommand::StartWave => {
                if !game_over && self.run.waves.can_start_wave() {
                    self.audio_events.push(AudioEvent::Click);
                    self.start_next_wave();
                } else {
                    debug!("start wave rejected: field not clear");
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::TogglePause => match self.phase {
                GamePhase::Active => self.phase = GamePhase::Paused,
                GamePhase::Paused => self.phase = GamePhase::Active,
                GamePhase::GameOver => {}
            },
            PlayerCommand::CycleSpeed => {
                if !game_over {
                    self.speed_index = (self.speed_index + 1) % SPEED_STEPS.len();
                    self.audio_events.push(AudioEvent::Click);
                }
            }
            PlayerCommand::ActivateAbility { ability } => {
                if self.phase == GamePhase::Active {
                    self.activate_ability(ability);
                } else {
                    debug!(?ability, phase = ?self.phase, "activation rejected");
                }
            }
            PlayerCommand::PurchaseUpgrade { upgrade } => {
                if game_over {
                    return;
                }
                match self.run.ledger.purchase_upgrade(upgrade) {
                    Ok(increment) => {
                        self.turret.apply_upgrade(upgrade, increment);
                        self.audio_events.push(AudioEvent::UpgradePurchase {
                            upgrade: Some(upgrade),
                        });
                        debug!(?upgrade, money = self.run.ledger.money(), "upgrade bought");
                    }
                    Err(e) => debug!(error = %e, ?upgrade, "upgrade rejected"),
                }
            }
            PlayerCommand::PurchaseAbility { ability } => {
                if game_over {
                    return;
                }
                let held = self.turret.charges(ability);
                let unlocked = self.profile.ability_unlocked(ability);
                match self.run.ledger.purchase_ability(ability, held, unlocked) {
                    Ok(cost) => {
                        self.turret.add_charge(ability);
                        self.audio_events
                            .push(AudioEvent::UpgradePurchase { upgrade: None });
                        debug!(?ability, cost, "charge bought");
                    }
                    Err(e) => debug!(error = %e, ?ability, "charge rejected"),
                }
            }
            PlayerCommand::CloseUpgradePanel => {
                self.run.waves.upgrade_panel_open = false;
            }
            PlayerCommand::RestartRun { class } => self.restart(class),
            PlayerCommand::ToggleMusic => {
                self.profile.music_enabled = !self.profile.music_enabled;
                self.run.save_requested = true;
            }
            PlayerCommand::ToggleSfx => {
                self.profile.sfx_enabled = !self.profile.sfx_enabled;
                self.run.save_requested = true;
            }
        }
    }

    fn activate_ability(&mut self, ability: AbilityKind) {
        if !self.profile.ability_unlocked(ability) || !self.turret.activate(ability) {
            debug!(?ability, "activation rejected");
            return;
        }
        self.audio_events
            .push(AudioEvent::AbilityActivate { ability });

        if ability == AbilityKind::Nuke {
            let mut ctx = TickContext {
                run: &mut self.run,
                profile: &mut self.profile,
                rng: &mut self.rng,
                audio: &mut self.audio_events,
            };
            systems::abilities::nuke(&mut self.world, &mut ctx);
        }
    }

    fn start_next_wave(&mut self) {
        let plan = self.run.waves.begin_next();
        let (wave, category, count) = (plan.wave, plan.category, plan.enemy_count);

        self.audio_events.push(match category {
            WaveCategory::Boss | WaveCategory::MegaBoss => {
                AudioEvent::BossWarning { wave, category }
            }
            _ => AudioEvent::WaveStart { wave },
        });
        info!(wave, ?category, enemies = count, "wave started");
    }

    fn enter_game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.speed_index = 0;

        let wave = self.run.waves.current_wave;
        let new_best = self.profile.record_game_over(wave);
        self.run.note_unlocks(&mut self.profile);
        self.run.save_requested = true;

        self.audio_events.push(AudioEvent::GameOver { wave });
        info!(wave, new_best, "game over");
    }

    /// Throw away the run and start fresh. An abandoned live run still
    /// counts as a finished game.
    fn restart(&mut self, class: TurretClass) {
        if self.phase != GamePhase::GameOver && self.run.waves.current_wave > 0 {
            self.profile.record_game_over(self.run.waves.current_wave);
            self.run.note_unlocks(&mut self.profile);
            self.run.save_requested = true;
        }

        let class = unlocked_class(&self.profile, class);
        let save_requested = self.run.save_requested;

        self.world.clear();
        self.turret = Turret::new(class);
        self.run = RunState::new(self.config.starting_money, self.config.starting_lives);
        self.run.save_requested = save_requested;
        self.phase = GamePhase::Active;
        self.speed_index = 0;
        self.time = SimTime::default();
        info!(?class, "run restarted");
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        let mut ctx = TickContext {
            run: &mut self.run,
            profile: &mut self.profile,
            rng: &mut self.rng,
            audio: &mut self.audio_events,
        };

        // 1. Wave spawning
        systems::wave_spawner::run(&mut self.world, &self.turret, &mut ctx, dt);
        // 2. Completion check
        ctx.run.check_wave_completion(ctx.profile);
        // 3. Turret: ability timers, pulse, targeting, firing
        systems::turret::run(&mut self.world, &mut self.turret, &mut ctx, dt);
        // 4. Enemy movement and core contact
        systems::enemy::run(&mut self.world, &mut ctx, dt);
        if ctx.run.game_over {
            return;
        }
        // 5. Projectiles
        systems::projectile::run(&mut self.world, &mut ctx, dt, &mut self.despawn_buffer);
        // 6. Effects
        systems::effects::run(&mut self.world, dt, &mut self.despawn_buffer);
    }
}

fn unlocked_class(profile: &ProfileRecord, requested: TurretClass) -> TurretClass {
    if profile.class_unlocked(requested) {
        requested
    } else {
        debug!(?requested, "class locked, using standard");
        TurretClass::Standard
    }
}
