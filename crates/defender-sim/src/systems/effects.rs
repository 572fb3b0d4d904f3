//! Effects system: ages explosions and damage numbers, removes expired ones.

use hecs::{Entity, World};

use defender_core::components::{DamageNumber, Explosion};
use defender_core::constants::{DAMAGE_NUMBER_DRAG, DAMAGE_NUMBER_DURATION, FRAME_RATE};
use defender_core::types::Position;

pub fn run(world: &mut World, dt: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, explosion) in world.query_mut::<&mut Explosion>() {
        explosion.timer += dt;
        if explosion.timer >= explosion.max_time {
            despawn_buffer.push(entity);
        }
    }

    let drag = DAMAGE_NUMBER_DRAG.powf(dt * FRAME_RATE as f64);
    for (entity, (number, pos)) in world.query_mut::<(&mut DamageNumber, &mut Position)>() {
        number.timer += dt;
        number.vx *= drag;
        number.vy *= drag;
        pos.x += number.vx * dt;
        pos.y += number.vy * dt;
        if number.timer >= DAMAGE_NUMBER_DURATION {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
