//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` plus the run state they
//! touch. They do not own state; it lives in components and `RunState`.

pub mod abilities;
pub mod effects;
pub mod enemy;
pub mod projectile;
pub mod snapshot;
pub mod turret;
pub mod wave_spawner;

use rand_chacha::ChaCha8Rng;

use defender_core::events::AudioEvent;
use defender_profile::ProfileRecord;

use crate::run::RunState;

/// Mutable state shared by every system that can kill an enemy.
pub struct TickContext<'a> {
    pub run: &'a mut RunState,
    pub profile: &'a mut ProfileRecord,
    pub rng: &'a mut ChaCha8Rng,
    pub audio: &'a mut Vec<AudioEvent>,
}
