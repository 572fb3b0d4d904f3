//! Entity spawn factories.
//!
//! Creates enemies, projectiles and short-lived effects with the
//! appropriate component bundles.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use defender_core::components::*;
use defender_core::constants::*;
use defender_core::types::Position;
use defender_enemy::fsm::{self, WaveBaseline};
use defender_waves::composer::{category_modifiers, WavePlan};
use defender_waves::scaling;

use crate::bullet::Bullet;
use crate::turret::ShotProfile;

/// Baseline for enemies of `wave`, straight from the scaling curves.
pub fn baseline_for_wave(wave: u32) -> WaveBaseline {
    WaveBaseline::new(
        wave,
        scaling::speed_multiplier(wave),
        scaling::health_multiplier(wave),
        scaling::money_reward(wave),
    )
}

/// Spawn one enemy of the planned wave at a random angle on the spawn ring.
pub fn spawn_wave_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    plan: &WavePlan,
    spawn_radius: f64,
) -> Entity {
    let angle = rng.gen::<f64>() * std::f64::consts::TAU;
    let position = Position::on_circle(Position::ORIGIN, spawn_radius, angle);

    let kind = plan.draw_kind(rng);
    let baseline = WaveBaseline::new(
        plan.wave,
        plan.speed_multiplier,
        plan.health_multiplier,
        plan.money_reward,
    );
    let mut enemy = fsm::spawn_enemy(kind, &baseline);
    let (health_mult, speed_mult) = category_modifiers(plan.category, kind);
    fsm::apply_category_modifiers(&mut enemy, health_mult, speed_mult);
    enemy.rotation = position.angle_to(&Position::ORIGIN);

    world.spawn((enemy, position))
}

/// Fan a dead enemy's split out around its death position.
/// Returns the number of children spawned.
pub fn spawn_split_children(world: &mut World, parent: &Enemy, at: Position) -> u32 {
    let Some(split) = parent.split else {
        return 0;
    };
    if split.count == 0 {
        return 0;
    }

    for position in fsm::split_positions(at, split.count) {
        let mut child = match split.child {
            SplitChild::Fragment => fsm::fragment_of(parent),
            SplitChild::Tier(kind) => fsm::spawn_enemy(kind, &baseline_for_wave(parent.wave)),
        };
        child.spawn_scale = 1.0;
        child.rotation = position.angle_to(&Position::ORIGIN);
        world.spawn((child, position));
    }
    split.count
}

/// Fire one projectile from the muzzle toward `target`.
pub fn spawn_bullet(
    world: &mut World,
    target: Entity,
    target_position: Position,
    shot: ShotProfile,
) -> Entity {
    let aim = Position::ORIGIN.direction_to(&target_position);
    let muzzle = Position::new(aim.x * MUZZLE_OFFSET, aim.y * MUZZLE_OFFSET);
    let bullet = Bullet {
        target: Some(target),
        damage: shot.damage,
        speed: BULLET_SPEED,
        pierce_count: shot.pierce,
        slow_percent: shot.slow,
        is_crit: shot.is_crit,
        ..Bullet::default()
    };
    world.spawn((bullet, muzzle))
}

pub fn spawn_explosion(world: &mut World, at: Position, size: f64) -> Entity {
    world.spawn((
        Explosion {
            size,
            timer: 0.0,
            max_time: EXPLOSION_DURATION,
        },
        at,
    ))
}

/// Floating number above a hit, drifting upward with a little spread.
pub fn spawn_damage_number(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    at: Position,
    amount: f64,
    is_crit: bool,
    blocked: bool,
) -> Entity {
    let angle = -std::f64::consts::FRAC_PI_2 + (rng.gen::<f64>() - 0.5) * 0.8;
    let speed = (40.0 + rng.gen::<f64>() * 20.0) * if is_crit { 1.3 } else { 1.0 };
    let position = Position::new(at.x + (rng.gen::<f64>() - 0.5) * 10.0, at.y - 15.0);
    world.spawn((
        DamageNumber {
            amount,
            is_crit,
            blocked,
            vx: angle.cos() * speed,
            vy: angle.sin() * speed,
            timer: 0.0,
        },
        position,
    ))
}
