//! Per-run state that resets on restart.

use tracing::info;

use defender_core::constants::STARTING_LIVES;
use defender_profile::unlocks::{self, Unlock};
use defender_profile::ProfileRecord;

use crate::economy::Ledger;
use crate::wave::WaveScheduler;

#[derive(Debug, Clone)]
pub struct RunState {
    pub ledger: Ledger,
    pub waves: WaveScheduler,
    pub lives: u32,
    /// Remaining real seconds of the post-contact recovery pause.
    pub life_lost_pause: f64,
    pub game_over: bool,
    /// Profile changed in a way worth persisting.
    pub save_requested: bool,
}

impl RunState {
    pub fn new(starting_money: u32, lives: u32) -> Self {
        Self {
            ledger: Ledger::new(starting_money),
            waves: WaveScheduler::default(),
            lives,
            life_lost_pause: 0.0,
            game_over: false,
            save_requested: false,
        }
    }

    /// Close the wave if the field is clear. Returns true if it just completed.
    pub fn check_wave_completion(&mut self, profile: &mut ProfileRecord) -> bool {
        if !self.waves.is_complete() {
            return false;
        }
        let wave = self.waves.current_wave;
        let opened_panel = self.waves.complete();
        profile.record_wave_completed();
        profile.observe_wave(wave);
        self.note_unlocks(profile);
        self.save_requested = true;
        info!(wave, opened_panel, "wave complete");
        true
    }

    /// Refresh milestone unlocks and log anything new.
    pub fn note_unlocks(&mut self, profile: &mut ProfileRecord) -> Vec<Unlock> {
        let gained = unlocks::refresh(profile);
        for unlock in &gained {
            info!(?unlock, "unlocked");
        }
        if !gained.is_empty() {
            self.save_requested = true;
        }
        gained
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new(0, STARTING_LIVES)
    }
}
