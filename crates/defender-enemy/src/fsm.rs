//! Enemy behaviour state machine.
//!
//! Pure functions over the `Enemy` component and its position. The sim's
//! enemy system drives these each tick and turns the returned outcomes into
//! world mutations (despawns, money, children, events).

use defender_core::components::Enemy;
use defender_core::constants::*;
use defender_core::enums::{EnemyKind, EnemyLifecycle};
use defender_core::types::Position;

use crate::profiles::get_profile;

/// Wave-scaled base stats shared by every enemy spawned in a wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveBaseline {
    pub wave: u32,
    pub speed: f64,
    pub health: f64,
    pub money: u32,
}

impl WaveBaseline {
    /// Scale the global base stats by a wave's multipliers.
    pub fn new(wave: u32, speed_multiplier: f64, health_multiplier: f64, money: u32) -> Self {
        Self {
            wave,
            speed: ENEMY_BASE_SPEED * speed_multiplier,
            health: ENEMY_BASE_HEALTH * health_multiplier,
            money,
        }
    }
}

/// Result of advancing an enemy by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Advancing,
    /// Within contact radius of the core. The caller spends a life or ends the run.
    ReachedCore,
}

/// Result of a damage application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Absorbed by a shield hit; health untouched.
    Blocked,
    Damaged,
    Killed,
}

/// Build a fresh enemy of `kind` on the wave baseline.
pub fn spawn_enemy(kind: EnemyKind, baseline: &WaveBaseline) -> Enemy {
    let mut enemy = Enemy {
        kind: EnemyKind::Normal,
        wave: baseline.wave,
        speed: baseline.speed,
        base_speed: baseline.speed,
        health: baseline.health,
        max_health: baseline.health,
        money_reward: baseline.money,
        shield_hits: 0,
        regen_rate: 0.0,
        split: None,
        slow_timer: 0.0,
        slow_factor: 0.0,
        spawn_scale: 0.0,
        hit_flash: 0.0,
        rotation: 0.0,
        is_mega_root: false,
    };
    apply_type_modifiers(&mut enemy, kind);
    enemy
}

/// Multiply speed, max health and reward by the kind's profile and set its
/// specials. Always finishes with `health = max_health`, `base_speed = speed`.
pub fn apply_type_modifiers(enemy: &mut Enemy, kind: EnemyKind) {
    let profile = get_profile(kind);

    enemy.kind = kind;
    enemy.speed *= profile.speed_mult;
    enemy.max_health *= profile.health_mult;
    enemy.money_reward = (enemy.money_reward as f64 * profile.money_mult).floor() as u32;
    enemy.shield_hits = profile.shield_hits;
    enemy.regen_rate = enemy.max_health * profile.regen_fraction;
    enemy.split = profile.split;
    enemy.is_mega_root = kind == EnemyKind::MegaBoss;

    enemy.health = enemy.max_health;
    enemy.base_speed = enemy.speed;
    enemy.slow_factor = 0.0;
    enemy.slow_timer = 0.0;
}

/// Category post-multipliers on top of the type profile.
pub fn apply_category_modifiers(enemy: &mut Enemy, health_mult: f64, speed_mult: f64) {
    enemy.max_health *= health_mult;
    enemy.health = enemy.max_health;
    enemy.regen_rate *= health_mult;
    enemy.base_speed *= speed_mult;
    enemy.speed = enemy.base_speed * (1.0 - enemy.slow_factor);
}

pub fn lifecycle(enemy: &Enemy) -> EnemyLifecycle {
    if enemy.spawn_scale < 1.0 {
        EnemyLifecycle::Spawning
    } else {
        EnemyLifecycle::Active
    }
}

/// Advance one enemy by `dt` simulated seconds.
pub fn step(enemy: &mut Enemy, position: &mut Position, core: &Position, dt: f64) -> StepOutcome {
    enemy.spawn_scale = (enemy.spawn_scale + dt * ENEMY_SPAWN_GROWTH).min(1.0);

    if enemy.slow_timer > 0.0 {
        enemy.slow_timer -= dt;
        if enemy.slow_timer <= 0.0 {
            enemy.slow_timer = 0.0;
            enemy.slow_factor = 0.0;
            enemy.speed = enemy.base_speed;
        }
    }

    if enemy.regen_rate > 0.0 && enemy.health < enemy.max_health {
        enemy.health = (enemy.health + enemy.regen_rate * dt).min(enemy.max_health);
    }

    let dist = position.range_to(core);
    if dist > ENEMY_ARRIVAL_DEADZONE {
        position.step_toward(core, enemy.speed * dt);
        enemy.rotation = position.angle_to(core);
    }

    enemy.hit_flash = (enemy.hit_flash - dt * ENEMY_HIT_FLASH_DECAY).max(0.0);

    if dist < ENEMY_CORE_CONTACT_RADIUS {
        StepOutcome::ReachedCore
    } else {
        StepOutcome::Advancing
    }
}

/// Apply projectile damage. A shield absorbs the whole hit.
pub fn take_damage(enemy: &mut Enemy, amount: f64) -> DamageOutcome {
    enemy.hit_flash = 1.0;

    if enemy.shield_hits > 0 {
        enemy.shield_hits -= 1;
        return DamageOutcome::Blocked;
    }

    enemy.health -= amount;
    if enemy.health <= 0.0 {
        DamageOutcome::Killed
    } else {
        DamageOutcome::Damaged
    }
}

/// Damage that ignores shields (pulse).
pub fn take_piercing_damage(enemy: &mut Enemy, amount: f64) -> DamageOutcome {
    enemy.hit_flash = 1.0;
    enemy.health -= amount;
    if enemy.health <= 0.0 {
        DamageOutcome::Killed
    } else {
        DamageOutcome::Damaged
    }
}

/// Nuke strike. Ordinary enemies die outright; mega tiers lose a fixed
/// fraction of max health but keep at least 1 HP.
pub fn nuke_strike(enemy: &mut Enemy) -> DamageOutcome {
    if !enemy.kind.is_mega() {
        enemy.health = 0.0;
        return DamageOutcome::Killed;
    }
    enemy.hit_flash = 1.0;
    enemy.health = (enemy.health - enemy.max_health * NUKE_MEGA_DAMAGE_FRACTION).max(1.0);
    DamageOutcome::Damaged
}

/// Slow to `base_speed * (1 - percent)` for a fixed duration. Refreshes, never stacks.
pub fn apply_slow(enemy: &mut Enemy, percent: f64) {
    enemy.slow_factor = percent.clamp(0.0, 1.0);
    enemy.speed = enemy.base_speed * (1.0 - enemy.slow_factor);
    enemy.slow_timer = SLOW_DURATION;
}

/// Reduced copy of a splitter. Cannot split again and skips the spawn-in.
/// Speed derives from the parent's current speed, so a slowed parent
/// yields slower fragments.
pub fn fragment_of(parent: &Enemy) -> Enemy {
    let speed = parent.speed * FRAGMENT_SPEED_FACTOR;
    let max_health = parent.max_health * FRAGMENT_HEALTH_FRACTION;
    Enemy {
        kind: parent.kind,
        wave: parent.wave,
        speed,
        base_speed: speed,
        health: max_health,
        max_health,
        money_reward: (parent.money_reward as f64 * FRAGMENT_MONEY_FRACTION).floor() as u32,
        shield_hits: 0,
        regen_rate: 0.0,
        split: None,
        slow_timer: 0.0,
        slow_factor: 0.0,
        spawn_scale: 1.0,
        hit_flash: 0.0,
        rotation: parent.rotation,
        is_mega_root: false,
    }
}

/// Evenly spaced points on the split ring around a death position.
pub fn split_positions(center: Position, count: u32) -> Vec<Position> {
    (0..count)
        .map(|i| {
            let angle = i as f64 / count as f64 * std::f64::consts::TAU;
            Position::on_circle(center, SPLIT_RADIUS, angle)
        })
        .collect()
}
