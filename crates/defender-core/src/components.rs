//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in `defender-enemy` and the sim systems.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// What an enemy turns into when it dies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitChild {
    /// Reduced copy of the parent that cannot split again.
    Fragment,
    /// Fresh enemy of the given kind (mega-boss chain).
    Tier(EnemyKind),
}

/// Split-on-death fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSpec {
    pub count: u32,
    pub child: SplitChild,
}

/// Enemy state. Paired with a `Position` on the same entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// Wave the enemy belongs to. Tier children are rolled against it.
    pub wave: u32,
    /// Current speed, reduced while slowed.
    pub speed: f64,
    /// Unslowed speed.
    pub base_speed: f64,
    pub health: f64,
    pub max_health: f64,
    pub money_reward: u32,
    /// Hits absorbed before real damage applies.
    pub shield_hits: u32,
    /// Health restored per second.
    pub regen_rate: f64,
    pub split: Option<SplitSpec>,
    pub slow_timer: f64,
    /// Active slow fraction, 0 when not slowed.
    pub slow_factor: f64,
    /// Spawn-in animation, 0 to 1.
    pub spawn_scale: f64,
    pub hit_flash: f64,
    /// Facing angle toward the core (radians).
    pub rotation: f64,
    /// Root of a mega-boss chain. Its death counts as defeating the mega boss.
    pub is_mega_root: bool,
}

/// Expanding ring left by a death or a core contact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Explosion {
    pub size: f64,
    pub timer: f64,
    pub max_time: f64,
}

/// Floating number shown where damage landed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DamageNumber {
    pub amount: f64,
    pub is_crit: bool,
    /// Absorbed by a shield.
    pub blocked: bool,
    pub vx: f64,
    pub vy: f64,
    pub timer: f64,
}
