//! Wave composition: category, spawn plan, and per-spawn kind selection.

use rand::Rng;

use defender_core::constants::*;
use defender_core::enums::{EnemyKind, WaveCategory};

use crate::scaling;

/// Classify a wave. Priority: mega boss > boss > swarm > normal.
pub fn category(wave: u32) -> WaveCategory {
    if wave > 0 && wave % 10 == 0 {
        WaveCategory::MegaBoss
    } else if wave > 0 && wave % 5 == 0 {
        WaveCategory::Boss
    } else if wave > 2 && wave % 3 == 0 {
        WaveCategory::Swarm
    } else {
        WaveCategory::Normal
    }
}

/// Everything the spawner needs to run one wave.
#[derive(Debug, Clone, PartialEq)]
pub struct WavePlan {
    pub wave: u32,
    pub category: WaveCategory,
    pub enemy_count: u32,
    pub spawn_delay: f64,
    pub health_multiplier: f64,
    pub speed_multiplier: f64,
    pub money_reward: u32,
}

impl WavePlan {
    pub fn for_wave(wave: u32) -> Self {
        let category = category(wave);
        let base_count = scaling::enemy_count(wave);
        let base_delay = scaling::spawn_delay(wave);

        let (enemy_count, spawn_delay) = match category {
            WaveCategory::MegaBoss => (1, base_delay),
            WaveCategory::Swarm => (base_count * SWARM_COUNT_MULT, SWARM_SPAWN_DELAY),
            WaveCategory::Boss => (base_count / 2 + 1, base_delay * BOSS_DELAY_MULT),
            WaveCategory::Normal => (base_count, base_delay),
        };

        Self {
            wave,
            category,
            enemy_count,
            spawn_delay,
            health_multiplier: scaling::health_multiplier(wave),
            speed_multiplier: scaling::speed_multiplier(wave),
            money_reward: scaling::money_reward(wave),
        }
    }

    /// Pick the kind of the next spawn.
    pub fn draw_kind<R: Rng>(&self, rng: &mut R) -> EnemyKind {
        match self.category {
            WaveCategory::Swarm => EnemyKind::Swarm,
            WaveCategory::MegaBoss => EnemyKind::MegaBoss,
            WaveCategory::Boss => {
                if rng.gen::<f64>() < BOSS_TANK_CHANCE {
                    EnemyKind::Tank
                } else {
                    EnemyKind::Normal
                }
            }
            WaveCategory::Normal => {
                let pool = scaling::available_types(self.wave);
                pool[rng.gen_range(0..pool.len())]
            }
        }
    }
}

/// Category post-multipliers `(health, speed)` applied on top of the type table.
pub fn category_modifiers(category: WaveCategory, kind: EnemyKind) -> (f64, f64) {
    match category {
        WaveCategory::Boss if kind == EnemyKind::Tank => (BOSS_TANK_HEALTH_MULT, 1.0),
        WaveCategory::Boss => (BOSS_OTHER_HEALTH_MULT, 1.0),
        WaveCategory::Swarm => (SWARM_HEALTH_MULT, SWARM_SPEED_MULT),
        WaveCategory::Normal | WaveCategory::MegaBoss => (1.0, 1.0),
    }
}
