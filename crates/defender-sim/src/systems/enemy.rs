//! Enemy system: movement, core contact, damage resolution and death.
//!
//! `damage` and `kill` are the only ways an enemy leaves the world by
//! combat, so money, counters and splits stay consistent for every caller.

use hecs::{Entity, World};
use tracing::{debug, info};

use defender_core::components::Enemy;
use defender_core::constants::LIFE_LOST_PAUSE;
use defender_core::enums::EnemyKind;
use defender_core::events::AudioEvent;
use defender_core::types::Position;
use defender_enemy::fsm::{self, DamageOutcome, StepOutcome};

use super::TickContext;
use crate::world_setup;

/// Advance every enemy and resolve core contacts.
pub fn run(world: &mut World, ctx: &mut TickContext, dt: f64) {
    let mut contacts = Vec::new();
    for (entity, (enemy, position)) in world.query_mut::<(&mut Enemy, &mut Position)>() {
        if fsm::step(enemy, position, &Position::ORIGIN, dt) == StepOutcome::ReachedCore {
            contacts.push(entity);
        }
    }

    for entity in contacts {
        if ctx.run.game_over {
            break;
        }
        reach_core(world, entity, ctx);
    }
}

/// Spend a life for an enemy at the core, or end the run when none remain.
fn reach_core(world: &mut World, entity: Entity, ctx: &mut TickContext) {
    if ctx.run.lives == 0 {
        ctx.run.game_over = true;
        return;
    }

    let position = match world.get::<&Position>(entity) {
        Ok(p) => *p,
        Err(_) => return,
    };
    let _ = world.despawn(entity);
    ctx.run.waves.record_removal();
    ctx.run.lives -= 1;
    ctx.run.life_lost_pause = LIFE_LOST_PAUSE;

    world_setup::spawn_explosion(world, position, 0.6);
    ctx.audio.push(AudioEvent::LifeLost {
        lives_remaining: ctx.run.lives,
    });
    info!(lives = ctx.run.lives, "enemy reached the core");

    ctx.run.check_wave_completion(ctx.profile);
}

/// Apply projectile damage to `entity`. `None` if it is already gone.
pub fn damage(
    world: &mut World,
    entity: Entity,
    amount: f64,
    is_crit: bool,
    ctx: &mut TickContext,
) -> Option<DamageOutcome> {
    let (outcome, position) = {
        let (enemy, position) = world.query_one_mut::<(&mut Enemy, &Position)>(entity).ok()?;
        (fsm::take_damage(enemy, amount), *position)
    };

    if outcome == DamageOutcome::Blocked {
        world_setup::spawn_damage_number(world, ctx.rng, position, 0.0, false, true);
        ctx.audio.push(AudioEvent::ShieldBlock);
    } else {
        world_setup::spawn_damage_number(world, ctx.rng, position, amount, is_crit, false);
        ctx.audio.push(AudioEvent::Hit { is_crit });
    }

    if outcome == DamageOutcome::Killed {
        kill(world, entity, ctx);
    }
    Some(outcome)
}

/// Resolve a death: reward, counters, effects, split children, wave check.
/// Returns false if the entity was already gone.
pub fn kill(world: &mut World, entity: Entity, ctx: &mut TickContext) -> bool {
    let (enemy, position) = match world.query_one_mut::<(&Enemy, &Position)>(entity) {
        Ok((e, p)) => (e.clone(), *p),
        Err(_) => return false,
    };
    let _ = world.despawn(entity);

    ctx.run.ledger.earn(enemy.money_reward);
    ctx.run.waves.record_removal();
    ctx.profile.record_kill();

    world_setup::spawn_explosion(world, position, explosion_size(enemy.kind));
    ctx.audio.push(AudioEvent::Explosion { kind: enemy.kind });

    let children = world_setup::spawn_split_children(world, &enemy, position);
    if children > 0 {
        ctx.run.waves.record_children(children);
        debug!(kind = enemy.kind.as_str(), children, "enemy split");
    }

    if enemy.is_mega_root {
        ctx.profile.record_mega_boss_defeated();
        info!(wave = enemy.wave, "mega boss defeated");
        ctx.run.note_unlocks(ctx.profile);
    }

    ctx.run.check_wave_completion(ctx.profile);
    true
}

fn explosion_size(kind: EnemyKind) -> f64 {
    match kind {
        EnemyKind::MegaBoss => 3.0,
        EnemyKind::MegaBossMedium => 2.0,
        EnemyKind::Tank | EnemyKind::MegaBossSmall => 1.4,
        EnemyKind::Swarm => 0.7,
        _ => 1.0,
    }
}
