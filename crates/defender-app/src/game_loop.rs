//! Game loop thread: runs the simulation engine at 60Hz on the real clock.
//!
//! The engine is created inside this thread and owns the loaded profile.
//! Commands arrive via an `mpsc` channel. Snapshots go to the `Frontend`,
//! and profile saves requested by the engine go to the `ProfileStore`.

use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use defender_core::commands::PlayerCommand;
use defender_core::constants::FRAME_RATE;
use defender_profile::ProfileStore;
use defender_sim::{SimConfig, SimulationEngine};

use crate::frontend::Frontend;

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Save the profile and stop the loop.
    Shutdown,
}

/// Spawns the game loop in a new thread.
///
/// The thread hands the frontend and store back when it stops.
pub fn spawn_game_loop<F, S>(
    frontend: F,
    store: S,
    config: SimConfig,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<(F, S)>)>
where
    F: Frontend + Send + 'static,
    S: ProfileStore + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("core-defender-game-loop".into())
        .spawn(move || run_game_loop(frontend, store, config, cmd_rx))?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop<F: Frontend, S: ProfileStore>(
    mut frontend: F,
    mut store: S,
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
) -> (F, S) {
    let profile = store.load();
    info!(best_wave = profile.high_score, seed = config.seed, "game loop started");
    let mut engine = SimulationEngine::new(config, profile);

    let mut last_frame = Instant::now();
    let mut next_frame_time = last_frame;

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&mut engine, &cmd_rx) {
            break;
        }

        // 2. Advance by the real time since the last frame
        let now = Instant::now();
        let snapshot = engine.advance((now - last_frame).as_secs_f64());
        last_frame = now;

        // 3. Persist when the engine asks for it
        if let Some(record) = engine.take_save_request() {
            debug!("saving profile");
            store.save(&record);
        }

        // 4. Present
        frontend.present(&snapshot);

        // 5. Sleep until next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_frame_time = now;
        }
    }

    store.save(engine.profile());
    info!("game loop stopped");
    (frontend, store)
}

/// Queue every pending command. Returns false when the loop should stop.
fn drain_commands(engine: &mut SimulationEngine, cmd_rx: &mpsc::Receiver<GameLoopCommand>) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use defender_core::state::GameStateSnapshot;
    use defender_profile::{MemoryStore, ProfileRecord};

    #[derive(Default)]
    struct RecordingFrontend {
        frames: Vec<GameStateSnapshot>,
    }

    impl Frontend for RecordingFrontend {
        fn present(&mut self, snapshot: &GameStateSnapshot) {
            self.frames.push(snapshot.clone());
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        tx.send(GameLoopCommand::Player(PlayerCommand::StartWave)).unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::Pause)).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut engine = SimulationEngine::new(SimConfig::default(), ProfileRecord::default());
        assert!(!drain_commands(&mut engine, &rx));
        let snap = engine.tick();
        assert_eq!(snap.wave.current_wave, 1);
        assert_eq!(snap.phase, defender_core::enums::GamePhase::Paused);
    }

    #[test]
    fn test_disconnect_stops_loop() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        drop(tx);
        let mut engine = SimulationEngine::new(SimConfig::default(), ProfileRecord::default());
        assert!(!drain_commands(&mut engine, &rx));
    }

    #[test]
    fn test_loop_presents_and_saves() {
        let (tx, handle) = spawn_game_loop(
            RecordingFrontend::default(),
            MemoryStore::default(),
            SimConfig::default(),
        )
        .unwrap();

        tx.send(GameLoopCommand::Player(PlayerCommand::ToggleSfx)).unwrap();
        std::thread::sleep(Duration::from_millis(100));
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let (frontend, store) = handle.join().unwrap();
        assert!(!frontend.frames.is_empty());
        // Toggle save plus the final save on shutdown
        assert!(store.save_count() >= 2);
        assert!(!store.stored().unwrap().sfx_enabled);
    }

    #[test]
    fn test_frame_duration_constant() {
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(FRAME_DURATION.as_nanos(), expected_nanos as u128);
    }
}
