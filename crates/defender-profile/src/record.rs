//! The persisted profile record.

use serde::{Deserialize, Serialize};

use defender_core::enums::{AbilityKind, TurretClass};

/// Meta-progression flags. Once set they stay set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnlockFlags {
    pub pulse: bool,
    pub nuke: bool,
    pub gatling: bool,
    pub railgun: bool,
}

/// Everything that survives across runs.
///
/// `#[serde(default)]` merges a stored record over the defaults, so older
/// files missing newer fields still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    /// Highest wave reached in any run.
    pub high_score: u32,
    pub total_enemies_killed: u64,
    pub total_waves_completed: u64,
    pub total_games_played: u64,
    pub mega_boss_defeated: bool,
    pub unlocks: UnlockFlags,
    pub music_enabled: bool,
    pub sfx_enabled: bool,
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self {
            high_score: 0,
            total_enemies_killed: 0,
            total_waves_completed: 0,
            total_games_played: 0,
            mega_boss_defeated: false,
            unlocks: UnlockFlags::default(),
            music_enabled: true,
            sfx_enabled: true,
        }
    }
}

impl ProfileRecord {
    pub fn record_kill(&mut self) {
        self.total_enemies_killed += 1;
    }

    pub fn record_wave_completed(&mut self) {
        self.total_waves_completed += 1;
    }

    pub fn record_mega_boss_defeated(&mut self) {
        self.mega_boss_defeated = true;
    }

    /// Close out a run. Returns true when `wave_reached` is a new best.
    pub fn record_game_over(&mut self, wave_reached: u32) -> bool {
        self.total_games_played += 1;
        if wave_reached > self.high_score {
            self.high_score = wave_reached;
            true
        } else {
            false
        }
    }

    /// Raise the best wave mid-run so wave-gated unlocks apply immediately.
    pub fn observe_wave(&mut self, wave: u32) {
        self.high_score = self.high_score.max(wave);
    }

    pub fn ability_unlocked(&self, ability: AbilityKind) -> bool {
        match ability {
            AbilityKind::Pierce | AbilityKind::Frost | AbilityKind::Fury => true,
            AbilityKind::Pulse => self.unlocks.pulse,
            AbilityKind::Nuke => self.unlocks.nuke,
        }
    }

    pub fn class_unlocked(&self, class: TurretClass) -> bool {
        match class {
            TurretClass::Standard => true,
            TurretClass::Gatling => self.unlocks.gatling,
            TurretClass::Railgun => self.unlocks.railgun,
        }
    }
}
