//! Area abilities. Both scan first and kill afterwards so the enemy set
//! is never mutated mid-iteration.

use hecs::{Entity, World};
use tracing::info;

use defender_core::components::Enemy;
use defender_core::constants::*;
use defender_core::events::AudioEvent;
use defender_core::types::Position;
use defender_enemy::fsm::{self, DamageOutcome};

use super::{enemy, TickContext};
use crate::world_setup;

/// One pulse pass: hit every enemy inside the band around `attack_range`
/// for flat plus max-health damage, ignoring shields.
/// Returns the number of enemies struck.
pub fn pulse_sweep(world: &mut World, attack_range: f64, ctx: &mut TickContext) -> usize {
    let mut struck: Vec<(Position, f64)> = Vec::new();
    let mut killed: Vec<Entity> = Vec::new();

    for (entity, (e, pos)) in world.query_mut::<(&mut Enemy, &Position)>() {
        let dist = pos.range_to(&Position::ORIGIN);
        if (dist - attack_range).abs() > PULSE_BAND {
            continue;
        }
        let amount = PULSE_FLAT_DAMAGE + e.max_health * PULSE_MAX_HEALTH_FRACTION;
        if fsm::take_piercing_damage(e, amount) == DamageOutcome::Killed {
            killed.push(entity);
        }
        struck.push((*pos, amount));
    }

    for &(pos, amount) in &struck {
        world_setup::spawn_damage_number(world, ctx.rng, pos, amount, false, false);
    }
    if !struck.is_empty() {
        ctx.audio.push(AudioEvent::Hit { is_crit: false });
    }

    for entity in killed {
        enemy::kill(world, entity, ctx);
    }
    struck.len()
}

/// Nuke: ordinary enemies die, mega tiers are left wounded.
pub fn nuke(world: &mut World, ctx: &mut TickContext) {
    let mut killed: Vec<Entity> = Vec::new();
    let mut wounded = 0;

    for (entity, e) in world.query_mut::<&mut Enemy>() {
        match fsm::nuke_strike(e) {
            DamageOutcome::Killed => killed.push(entity),
            _ => wounded += 1,
        }
    }

    world_setup::spawn_explosion(world, Position::ORIGIN, 5.0);
    info!(killed = killed.len(), wounded, "nuke detonated");

    for entity in killed {
        enemy::kill(world, entity, ctx);
    }
}
