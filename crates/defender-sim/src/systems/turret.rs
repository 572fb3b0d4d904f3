//! Turret system: ability timers, pulse passes, targeting, firing.

use hecs::{Entity, World};

use defender_core::components::Enemy;
use defender_core::constants::{MUZZLE_FLASH_DECAY, PULSE_INTERVAL};
use defender_core::events::AudioEvent;
use defender_core::types::Position;

use super::{abilities, TickContext};
use crate::turret::Turret;
use crate::world_setup;

pub fn run(world: &mut World, turret: &mut Turret, ctx: &mut TickContext, dt: f64) {
    turret.ambient_time += dt;
    turret.muzzle_flash = (turret.muzzle_flash - dt * MUZZLE_FLASH_DECAY).max(0.0);

    if turret.pulse.active {
        turret.pulse_accumulator += dt.min(turret.pulse.timer);
        while turret.pulse_accumulator >= PULSE_INTERVAL {
            turret.pulse_accumulator -= PULSE_INTERVAL;
            abilities::pulse_sweep(world, turret.attack_range, ctx);
        }
    }
    turret.tick_abilities(dt);
    if !turret.pulse.active {
        turret.pulse_accumulator = 0.0;
    }

    turret.target = nearest_in_range(world, &Position::ORIGIN, turret.attack_range);
    if let Some(position) = turret.target.and_then(|t| target_position(world, t)) {
        turret.rotation = Position::ORIGIN.angle_to(&position);
    }

    turret.shoot_timer -= dt;
    if turret.shoot_timer <= 0.0 && turret.target.is_some() {
        fire(world, turret, ctx);
        turret.shoot_timer = 1.0 / turret.fire_rate;
    }
}

fn target_position(world: &World, entity: Entity) -> Option<Position> {
    world.get::<&Position>(entity).ok().map(|p| *p)
}

/// Closest enemy with distance `<= range`. Ties keep the first one found.
pub fn nearest_in_range(world: &World, origin: &Position, range: f64) -> Option<Entity> {
    let mut best: Option<(Entity, f64)> = None;
    for (entity, (_enemy, pos)) in world.query::<(&Enemy, &Position)>().iter() {
        let dist = origin.range_to(pos);
        if dist > range {
            continue;
        }
        if best.map_or(true, |(_, d)| dist < d) {
            best = Some((entity, dist));
        }
    }
    best.map(|(e, _)| e)
}

/// Every enemy within `range`, nearest first. Stable for equal distances.
pub fn in_range_by_distance(
    world: &World,
    origin: &Position,
    range: f64,
) -> Vec<(Entity, Position)> {
    let mut found: Vec<(Entity, Position, f64)> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(e, (_, p))| (e, *p, origin.range_to(p)))
        .filter(|(_, _, d)| *d <= range)
        .collect();
    found.sort_by(|a, b| a.2.total_cmp(&b.2));
    found.into_iter().map(|(e, p, _)| (e, p)).collect()
}

/// Emit one volley. One projectile per target, one audio cue per volley.
fn fire(world: &mut World, turret: &mut Turret, ctx: &mut TickContext) {
    let targets: Vec<(Entity, Position)> = if turret.projectile_count <= 1 {
        turret
            .target
            .and_then(|t| target_position(world, t).map(|p| (t, p)))
            .into_iter()
            .collect()
    } else {
        in_range_by_distance(world, &Position::ORIGIN, turret.attack_range)
            .into_iter()
            .take(turret.projectile_count as usize)
            .collect()
    };
    if targets.is_empty() {
        return;
    }

    let shot = turret.shot_profile();
    for (target, position) in targets {
        world_setup::spawn_bullet(world, target, position, shot);
    }
    turret.muzzle_flash = 1.0;

    ctx.audio.push(if shot.is_crit {
        AudioEvent::CritShoot
    } else {
        AudioEvent::Shoot
    });
}
