//! Wave scheduler state: Idle -> Spawning -> Clearing -> Countdown -> Spawning.
//!
//! `enemies_alive` and `enemies_to_spawn` are kept in lockstep with the
//! world: every spawn, split, death and core contact goes through here.

use defender_core::constants::*;
use defender_core::enums::{WaveCategory, WaveState};
use defender_waves::composer::WavePlan;

/// Tolerance for real-time timers accumulated from many small frames.
const TIMER_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Default)]
pub struct WaveScheduler {
    pub current_wave: u32,
    pub plan: Option<WavePlan>,
    pub state: WaveState,
    pub wave_in_progress: bool,
    pub enemies_alive: u32,
    pub enemies_to_spawn: u32,
    /// Simulated seconds since the last spawn.
    pub spawn_timer: f64,
    /// Remaining real seconds of the auto-advance countdown.
    pub countdown: f64,
    pub upgrade_shown_for_wave: Option<u32>,
    pub upgrade_panel_open: bool,
}

impl WaveScheduler {
    pub fn category(&self) -> WaveCategory {
        self.plan
            .as_ref()
            .map(|p| p.category)
            .unwrap_or_default()
    }

    /// A new wave may start only once the field is clear.
    pub fn can_start_wave(&self) -> bool {
        !self.wave_in_progress && self.enemies_alive == 0
    }

    pub fn countdown_active(&self) -> bool {
        self.state == WaveState::Countdown
    }

    /// Begin the next wave. Cancels any countdown and closes the panel.
    pub fn begin_next(&mut self) -> &WavePlan {
        self.current_wave += 1;
        let plan = WavePlan::for_wave(self.current_wave);

        self.enemies_to_spawn = plan.enemy_count;
        // Primed so the first enemy appears on the next spawning step.
        self.spawn_timer = plan.spawn_delay;
        self.wave_in_progress = true;
        self.state = WaveState::Spawning;
        self.countdown = 0.0;
        self.upgrade_panel_open = false;

        self.plan.insert(plan)
    }

    /// Advance the spawn timer. Returns true when one enemy is due.
    pub fn spawn_due(&mut self, dt: f64) -> bool {
        if self.state != WaveState::Spawning || self.enemies_to_spawn == 0 {
            return false;
        }
        let delay = self.plan.as_ref().map_or(f64::INFINITY, |p| p.spawn_delay);
        self.spawn_timer += dt;
        self.spawn_timer >= delay
    }

    /// Book a spawned enemy.
    pub fn record_spawn(&mut self) {
        self.spawn_timer = 0.0;
        self.enemies_to_spawn = self.enemies_to_spawn.saturating_sub(1);
        self.enemies_alive += 1;
        if self.enemies_to_spawn == 0 {
            self.state = WaveState::Clearing;
        }
    }

    /// Book split children entering the field.
    pub fn record_children(&mut self, count: u32) {
        self.enemies_alive += count;
    }

    /// Book an enemy leaving the field (death or core contact).
    pub fn record_removal(&mut self) {
        self.enemies_alive = self.enemies_alive.saturating_sub(1);
    }

    pub fn is_complete(&self) -> bool {
        self.wave_in_progress && self.enemies_alive == 0 && self.enemies_to_spawn == 0
    }

    /// Close the current wave. The first completion of a wave number opens
    /// the upgrade panel and starts the countdown; returns true in that case.
    pub fn complete(&mut self) -> bool {
        self.wave_in_progress = false;
        if self.upgrade_shown_for_wave == Some(self.current_wave) {
            self.state = WaveState::Idle;
            return false;
        }
        self.upgrade_shown_for_wave = Some(self.current_wave);
        self.upgrade_panel_open = true;
        self.countdown = WAVE_COUNTDOWN;
        self.state = WaveState::Countdown;
        true
    }

    /// Run the countdown on real time. Returns true when it expires.
    pub fn tick_countdown(&mut self, real_dt: f64) -> bool {
        if !self.countdown_active() || !self.can_start_wave() {
            return false;
        }
        self.countdown -= real_dt;
        if self.countdown <= TIMER_EPSILON {
            self.countdown = 0.0;
            self.state = WaveState::Idle;
            self.upgrade_panel_open = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_wave_plan() {
        let mut w = WaveScheduler::default();
        assert!(w.can_start_wave());
        let plan = w.begin_next().clone();
        assert_eq!(plan.wave, 1);
        assert_eq!(w.enemies_to_spawn, 14);
        assert_eq!(w.state, WaveState::Spawning);
        assert!(!w.can_start_wave());
        assert!(w.spawn_due(0.0), "first spawn is immediate");
    }

    #[test]
    fn spawning_moves_to_clearing() {
        let mut w = WaveScheduler::default();
        w.begin_next();
        for _ in 0..14 {
            w.record_spawn();
        }
        assert_eq!(w.state, WaveState::Clearing);
        assert_eq!(w.enemies_alive, 14);
        assert!(!w.spawn_due(10.0));
    }

    #[test]
    fn countdown_opens_once_per_wave() {
        let mut w = WaveScheduler::default();
        w.begin_next();
        w.enemies_to_spawn = 0;
        assert!(w.is_complete());
        assert!(w.complete());
        assert!(w.upgrade_panel_open);
        assert_eq!(w.state, WaveState::Countdown);

        w.wave_in_progress = true;
        assert!(!w.complete(), "second completion of the same wave");
    }

    #[test]
    fn countdown_expires_on_real_time() {
        let mut w = WaveScheduler::default();
        w.begin_next();
        w.enemies_to_spawn = 0;
        w.complete();
        let mut fired = false;
        for _ in 0..100 {
            fired |= w.tick_countdown(0.1);
        }
        assert!(fired);
        assert!(!w.upgrade_panel_open);
    }
}
