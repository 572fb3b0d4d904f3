//! Projectile system: homing, hit detection, pierce retargeting.

use hecs::{Entity, World};

use defender_core::components::Enemy;
use defender_core::constants::{BULLET_HIT_RADIUS, BULLET_RETARGET_RADIUS};
use defender_core::types::Position;

use super::{enemy, TickContext};
use crate::bullet::Bullet;

/// Advance every projectile, removing spent ones.
pub fn run(world: &mut World, ctx: &mut TickContext, dt: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let bullets: Vec<Entity> = world.query::<&Bullet>().iter().map(|(e, _)| e).collect();
    for entity in bullets {
        let (mut position, mut bullet) =
            match world.query_one_mut::<(&Position, &mut Bullet)>(entity) {
                Ok((p, b)) => (*p, std::mem::take(b)),
                Err(_) => continue,
            };

        let keep = step(world, &mut position, &mut bullet, ctx, dt);

        if keep {
            if let Ok((p, b)) = world.query_one_mut::<(&mut Position, &mut Bullet)>(entity) {
                *p = position;
                *b = bullet;
            }
        } else {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Position of a live enemy, `None` once it has been despawned.
fn enemy_position(world: &World, entity: Entity) -> Option<Position> {
    let mut query = world.query_one::<(&Enemy, &Position)>(entity).ok()?;
    let position = query.get().map(|(_, p)| *p);
    position
}

/// One projectile step. Returns false when the projectile should be removed.
pub fn step(
    world: &mut World,
    position: &mut Position,
    bullet: &mut Bullet,
    ctx: &mut TickContext,
    dt: f64,
) -> bool {
    let mut target = bullet.target.and_then(|t| enemy_position(world, t).map(|p| (t, p)));

    if target.is_none() {
        bullet.target = None;
        if bullet.pierce_count > 0 {
            bullet.target = find_new_target(world, position, bullet);
            target = bullet.target.and_then(|t| enemy_position(world, t).map(|p| (t, p)));
        }
    }
    let Some((target, target_position)) = target else {
        return false;
    };

    bullet.push_trail(*position);

    let dist = position.range_to(&target_position);
    if dist > 0.0 {
        position.step_toward(&target_position, bullet.speed * dt);
    }

    if dist < BULLET_HIT_RADIUS {
        hit(world, target, bullet, ctx);
        if bullet.pierce_count > 0 {
            bullet.pierce_count -= 1;
            bullet.enemies_hit.push(target);
            bullet.target = find_new_target(world, position, bullet);
            return bullet.target.is_some();
        }
        return false;
    }

    true
}

/// Damage plus optional slow. No-op if the target is already gone.
fn hit(world: &mut World, target: Entity, bullet: &Bullet, ctx: &mut TickContext) {
    if enemy::damage(world, target, bullet.damage, bullet.is_crit, ctx).is_none() {
        return;
    }
    if bullet.slow_percent > 0.0 {
        if let Ok(mut e) = world.get::<&mut Enemy>(target) {
            defender_enemy::fsm::apply_slow(&mut e, bullet.slow_percent);
        }
    }
}

/// Nearest enemy strictly inside the retarget radius that this projectile
/// has not struck yet. Ties keep the first one found.
pub fn find_new_target(world: &World, from: &Position, bullet: &Bullet) -> Option<Entity> {
    let mut best: Option<(Entity, f64)> = None;
    for (entity, (_enemy, pos)) in world.query::<(&Enemy, &Position)>().iter() {
        if bullet.already_hit(entity) {
            continue;
        }
        let dist = from.range_to(pos);
        let limit = best.map_or(BULLET_RETARGET_RADIUS, |(_, d)| d);
        if dist < limit {
            best = Some((entity, dist));
        }
    }
    best.map(|(e, _)| e)
}
