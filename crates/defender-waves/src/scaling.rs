//! Difficulty curves. Every function depends only on the wave number.

use defender_core::enums::EnemyKind;

/// Enemies in a normal wave. Grows super-linearly past waves 10 and 20.
pub fn enemy_count(wave: u32) -> u32 {
    let w = wave as f64;
    let mut count = 10.0 + 4.0 * w;
    if wave > 10 {
        count += (w - 10.0).powf(1.5);
    }
    if wave > 20 {
        count += (w - 20.0).powf(1.7);
    }
    count.floor() as u32
}

/// Exponential health scaling, the dominant late-game driver.
pub fn health_multiplier(wave: u32) -> f64 {
    0.6 * 1.2_f64.powi(wave as i32)
}

pub fn speed_multiplier(wave: u32) -> f64 {
    (0.8 + 0.06 * wave as f64).min(2.5)
}

/// Seconds between spawns.
pub fn spawn_delay(wave: u32) -> f64 {
    (2.5 - 0.1 * wave as f64).max(0.3)
}

/// Base money per kill. Linear, no late-game taper.
pub fn money_reward(wave: u32) -> u32 {
    8 + wave
}

/// Draw pool for normal waves. Splitter appears twice past wave 12.
pub fn available_types(wave: u32) -> Vec<EnemyKind> {
    use EnemyKind::*;

    match wave {
        0..=2 => vec![Normal],
        3..=4 => vec![Normal, Fast],
        5..=6 => vec![Normal, Fast, Tank],
        7..=9 => vec![Normal, Fast, Tank, Swarm, Shielded],
        10..=12 => vec![Normal, Fast, Tank, Swarm, Shielded, Regen],
        _ => vec![
            Normal, Fast, Tank, Swarm, Shielded, Regen, Splitter, Splitter,
        ],
    }
}
