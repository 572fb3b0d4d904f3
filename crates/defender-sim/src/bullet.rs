//! Projectile component.

use std::collections::VecDeque;

use hecs::Entity;

use defender_core::constants::BULLET_TRAIL_LENGTH;
use defender_core::types::Position;

/// Homing round. Paired with a `Position` on the same entity.
///
/// `target` is a generational handle: once the enemy is despawned every
/// lookup fails, even if hecs later reuses the slot.
#[derive(Debug, Clone, Default)]
pub struct Bullet {
    pub target: Option<Entity>,
    pub damage: f64,
    pub speed: f64,
    /// Remaining penetrations.
    pub pierce_count: u32,
    /// 0 for no slow.
    pub slow_percent: f64,
    pub is_crit: bool,
    /// Enemies already struck, never retargeted.
    pub enemies_hit: Vec<Entity>,
    /// Most recent position first.
    pub trail: VecDeque<Position>,
}

impl Bullet {
    pub fn push_trail(&mut self, position: Position) {
        self.trail.push_front(position);
        self.trail.truncate(BULLET_TRAIL_LENGTH);
    }

    pub fn already_hit(&self, entity: Entity) -> bool {
        self.enemies_hit.contains(&entity)
    }
}
