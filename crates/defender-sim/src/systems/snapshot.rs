//! Snapshot system: projects the world and run state into a
//! `GameStateSnapshot`. Read-only.

use hecs::World;

use defender_core::components::{DamageNumber, Enemy, Explosion};
use defender_core::enums::{AbilityKind, GamePhase, UpgradeKind};
use defender_core::events::AudioEvent;
use defender_core::state::*;
use defender_core::types::{Position, SimTime};
use defender_enemy::fsm;
use defender_profile::ProfileRecord;

use crate::bullet::Bullet;
use crate::economy::max_charges;
use crate::run::RunState;
use crate::turret::Turret;

/// Everything the snapshot reads besides the world.
pub struct SnapshotInput<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub speed_multiplier: f64,
    pub turret: &'a Turret,
    pub run: &'a RunState,
    pub profile: &'a ProfileRecord,
}

pub fn build_snapshot(
    world: &World,
    input: &SnapshotInput,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: input.time,
        phase: input.phase,
        speed_multiplier: input.speed_multiplier,
        wave: build_wave_view(input.run),
        core: build_core_view(input.turret),
        enemies: build_enemy_views(world),
        projectiles: build_projectile_views(world),
        explosions: build_explosion_views(world),
        damage_numbers: build_damage_number_views(world),
        labels: build_labels(input),
        audio_events,
    }
}

fn build_wave_view(run: &RunState) -> WaveView {
    let waves = &run.waves;
    WaveView {
        current_wave: waves.current_wave,
        category: waves.category(),
        state: waves.state,
        wave_in_progress: waves.wave_in_progress,
        enemies_alive: waves.enemies_alive,
        enemies_to_spawn: waves.enemies_to_spawn,
        countdown: waves.countdown_active().then_some(waves.countdown),
        upgrade_panel_open: waves.upgrade_panel_open,
        money: run.ledger.money(),
        lives: run.lives,
    }
}

fn build_core_view(turret: &Turret) -> CoreView {
    CoreView {
        class: turret.class,
        damage: turret.damage,
        fire_rate: turret.fire_rate,
        attack_range: turret.attack_range,
        projectile_count: turret.projectile_count,
        rotation: turret.rotation,
        muzzle_flash: turret.muzzle_flash,
        has_target: turret.target.is_some(),
        abilities: AbilityKind::ALL
            .into_iter()
            .map(|ability| {
                let slot = turret.slot(ability).copied().unwrap_or_default();
                AbilityView {
                    ability,
                    active: slot.active,
                    timer: slot.timer,
                    charges: turret.charges(ability),
                }
            })
            .collect(),
    }
}

fn build_enemy_views(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(_, (enemy, pos))| EnemyView {
            kind: enemy.kind,
            position: *pos,
            rotation: enemy.rotation,
            health_fraction: if enemy.max_health > 0.0 {
                (enemy.health / enemy.max_health).clamp(0.0, 1.0)
            } else {
                0.0
            },
            shield_hits: enemy.shield_hits,
            slowed: enemy.slow_timer > 0.0,
            spawn_scale: enemy.spawn_scale,
            hit_flash: enemy.hit_flash,
            lifecycle: fsm::lifecycle(enemy),
        })
        .collect()
}

fn build_projectile_views(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Bullet, &Position)>()
        .iter()
        .map(|(_, (bullet, pos))| ProjectileView {
            position: *pos,
            trail: bullet.trail.iter().copied().collect(),
            is_crit: bullet.is_crit,
            frost: bullet.slow_percent > 0.0,
            pierce_remaining: bullet.pierce_count,
        })
        .collect()
}

fn build_explosion_views(world: &World) -> Vec<ExplosionView> {
    world
        .query::<(&Explosion, &Position)>()
        .iter()
        .map(|(_, (explosion, pos))| ExplosionView {
            position: *pos,
            size: explosion.size,
            progress: (explosion.timer / explosion.max_time).clamp(0.0, 1.0),
        })
        .collect()
}

fn build_damage_number_views(world: &World) -> Vec<DamageNumberView> {
    use defender_core::constants::DAMAGE_NUMBER_DURATION;

    world
        .query::<(&DamageNumber, &Position)>()
        .iter()
        .map(|(_, (number, pos))| DamageNumberView {
            position: *pos,
            amount: number.amount,
            is_crit: number.is_crit,
            blocked: number.blocked,
            alpha: (1.0 - number.timer / DAMAGE_NUMBER_DURATION).clamp(0.0, 1.0),
        })
        .collect()
}

fn build_labels(input: &SnapshotInput) -> UiLabels {
    let run = input.run;
    let waves = &run.waves;
    let turret = input.turret;
    let profile = input.profile;
    let money = run.ledger.money();
    let game_over = input.phase == GamePhase::GameOver;

    let wave = match waves.category().label_suffix() {
        Some(suffix) if waves.current_wave > 0 => {
            format!("Wave {} - {}", waves.current_wave, suffix)
        }
        _ => format!("Wave {}", waves.current_wave),
    };

    let start_wave = if game_over {
        ButtonLabel {
            text: "GAME OVER".into(),
            enabled: false,
        }
    } else if !waves.can_start_wave() {
        ButtonLabel {
            text: "WAVE IN PROGRESS".into(),
            enabled: false,
        }
    } else if waves.countdown_active() {
        ButtonLabel {
            text: format!("NEXT WAVE ({})", waves.countdown.ceil() as u32),
            enabled: true,
        }
    } else {
        ButtonLabel {
            text: "START WAVE".into(),
            enabled: true,
        }
    };

    let abilities = AbilityKind::ALL
        .into_iter()
        .map(|ability| {
            let name = ability.label();
            let charges = turret.charges(ability);
            if !profile.ability_unlocked(ability) {
                ButtonLabel {
                    text: format!("{name} [LOCKED]"),
                    enabled: false,
                }
            } else if let Some(slot) = turret.slot(ability).filter(|s| s.active) {
                ButtonLabel {
                    text: format!("{name} [{:.1}s]", slot.timer),
                    enabled: false,
                }
            } else {
                ButtonLabel {
                    text: format!("{name} [{charges}]"),
                    enabled: charges > 0 && !game_over,
                }
            }
        })
        .collect();

    let ability_shop = AbilityKind::ALL
        .into_iter()
        .map(|ability| {
            let cost = run.ledger.ability_cost(ability);
            let full = turret.charges(ability) >= max_charges(ability);
            let unlocked = profile.ability_unlocked(ability);
            ButtonLabel {
                text: if full {
                    format!("{} FULL", ability.label())
                } else {
                    format!("{} ${cost}", ability.label())
                },
                enabled: unlocked && !full && money >= cost && !game_over,
            }
        })
        .collect();

    let upgrades = UpgradeKind::ALL
        .into_iter()
        .map(|upgrade| {
            let track = run.ledger.upgrade(upgrade);
            ButtonLabel {
                text: if track.at_cap() {
                    format!("{} MAX", upgrade.label())
                } else {
                    format!("{} Lv{} ${}", upgrade.label(), track.level + 1, track.cost)
                },
                enabled: run.ledger.can_buy_upgrade(upgrade) && !game_over,
            }
        })
        .collect();

    UiLabels {
        money: format!("$ {money}"),
        enemies: format!("Enemies: {}", waves.enemies_alive + waves.enemies_to_spawn),
        wave,
        best_wave: format!("Best: Wave {}", profile.high_score),
        lives: format!("Lives: {}", run.lives),
        speed: format!("{}x", input.speed_multiplier),
        start_wave,
        abilities,
        ability_shop,
        upgrades,
    }
}
