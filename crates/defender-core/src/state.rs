//! Game state snapshot: the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioEvent;
use crate::types::{Position, SimTime};

/// Complete game state produced after each tick. Never read back by the sim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub speed_multiplier: f64,
    pub wave: WaveView,
    pub core: CoreView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub explosions: Vec<ExplosionView>,
    pub damage_numbers: Vec<DamageNumberView>,
    pub labels: UiLabels,
    pub audio_events: Vec<AudioEvent>,
}

/// Scheduler and economy counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub current_wave: u32,
    pub category: WaveCategory,
    pub state: WaveState,
    pub wave_in_progress: bool,
    pub enemies_alive: u32,
    pub enemies_to_spawn: u32,
    /// Remaining real seconds, present while the countdown runs.
    pub countdown: Option<f64>,
    pub upgrade_panel_open: bool,
    pub money: u32,
    pub lives: u32,
}

/// The defended turret.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoreView {
    pub class: TurretClass,
    pub damage: f64,
    pub fire_rate: f64,
    pub attack_range: f64,
    pub projectile_count: u32,
    pub rotation: f64,
    pub muzzle_flash: f64,
    pub has_target: bool,
    pub abilities: Vec<AbilityView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityView {
    pub ability: AbilityKind,
    pub active: bool,
    pub timer: f64,
    pub charges: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub position: Position,
    pub rotation: f64,
    /// Health over max health, 0 to 1.
    pub health_fraction: f64,
    pub shield_hits: u32,
    pub slowed: bool,
    pub spawn_scale: f64,
    pub hit_flash: f64,
    pub lifecycle: EnemyLifecycle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub trail: Vec<Position>,
    pub is_crit: bool,
    pub frost: bool,
    pub pierce_remaining: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub position: Position,
    pub size: f64,
    /// 0 at birth, 1 at expiry.
    pub progress: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageNumberView {
    pub position: Position,
    pub amount: f64,
    pub is_crit: bool,
    pub blocked: bool,
    /// 1 at birth, 0 at expiry.
    pub alpha: f64,
}

/// Read-only text projections for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiLabels {
    pub money: String,
    pub enemies: String,
    pub wave: String,
    pub best_wave: String,
    pub lives: String,
    pub speed: String,
    pub start_wave: ButtonLabel,
    /// Activation buttons, one per ability.
    pub abilities: Vec<ButtonLabel>,
    /// Charge purchase buttons, one per ability.
    pub ability_shop: Vec<ButtonLabel>,
    pub upgrades: Vec<ButtonLabel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ButtonLabel {
    pub text: String,
    pub enabled: bool,
}
