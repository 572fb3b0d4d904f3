//! Wave spawning system: drip-feeds the current wave onto the spawn ring.

use hecs::World;
use tracing::debug;

use super::TickContext;
use crate::turret::Turret;
use crate::world_setup;

/// Spawn at most one enemy per step when the spawn timer is due.
pub fn run(world: &mut World, turret: &Turret, ctx: &mut TickContext, dt: f64) {
    if !ctx.run.waves.spawn_due(dt) {
        return;
    }
    let Some(plan) = ctx.run.waves.plan.clone() else {
        return;
    };

    let entity = world_setup::spawn_wave_enemy(world, ctx.rng, &plan, turret.spawn_radius());
    ctx.run.waves.record_spawn();
    debug!(
        ?entity,
        wave = plan.wave,
        remaining = ctx.run.waves.enemies_to_spawn,
        "enemy spawned"
    );
}
