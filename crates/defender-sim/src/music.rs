//! Background music as a scheduled event stream on the real-time clock.

use defender_core::constants::MUSIC_BAR_INTERVAL;
use defender_core::events::AudioEvent;

#[derive(Debug, Clone, Default)]
pub struct MusicSchedule {
    /// Real seconds until the next bar is due.
    until_next_bar: f64,
    bars_played: u64,
}

impl MusicSchedule {
    /// Emit every bar that fell due during `real_dt`.
    pub fn tick(&mut self, real_dt: f64, enabled: bool, audio: &mut Vec<AudioEvent>) {
        if !enabled {
            return;
        }
        self.until_next_bar -= real_dt;
        while self.until_next_bar <= 0.0 {
            audio.push(AudioEvent::MusicBar {
                bar: self.bars_played,
            });
            self.bars_played += 1;
            self.until_next_bar += MUSIC_BAR_INTERVAL;
        }
    }

    pub fn bars_played(&self) -> u64 {
        self.bars_played
    }
}
