//! Simulation constants and tuning parameters.

/// Nominal frame rate of the real-time clock (Hz).
pub const FRAME_RATE: u32 = 60;

/// Seconds per nominal frame.
pub const FRAME_DT: f64 = 1.0 / FRAME_RATE as f64;

/// Upper bound on a single frame's real delta. Longer stalls are truncated.
pub const MAX_FRAME_DT: f64 = 0.1;

/// Speed multipliers cycled by the speed control.
pub const SPEED_STEPS: [f64; 3] = [1.0, 2.0, 3.0];

// --- Core turret ---

pub const CORE_BASE_DAMAGE: f64 = 35.0;

/// Shots per second.
pub const CORE_BASE_FIRE_RATE: f64 = 3.0;

pub const CORE_BASE_ATTACK_RANGE: f64 = 225.0;

pub const CORE_BASE_PROJECTILE_COUNT: u32 = 1;

/// Muzzle flash decay per second.
pub const MUZZLE_FLASH_DECAY: f64 = 8.0;

/// Distance from the core at which projectiles appear.
pub const MUZZLE_OFFSET: f64 = 25.0;

// --- Run ---

pub const STARTING_LIVES: u32 = 3;

pub const STARTING_MONEY: u32 = 0;

/// Real-time recovery pause after an enemy reaches the core (seconds).
pub const LIFE_LOST_PAUSE: f64 = 1.5;

// --- Enemies ---

/// Base enemy speed before wave and type multipliers.
pub const ENEMY_BASE_SPEED: f64 = 30.0;

/// Base enemy health before wave and type multipliers.
pub const ENEMY_BASE_HEALTH: f64 = 40.0;

/// Spawn-in growth rate (scale units per second, 0 to 1 in 0.25 s).
pub const ENEMY_SPAWN_GROWTH: f64 = 4.0;

/// Hit flash decay per second.
pub const ENEMY_HIT_FLASH_DECAY: f64 = 6.0;

/// Within this distance of the core an enemy stops moving.
pub const ENEMY_ARRIVAL_DEADZONE: f64 = 5.0;

/// Distance at which an enemy counts as having reached the core.
pub const ENEMY_CORE_CONTACT_RADIUS: f64 = 20.0;

/// Duration of a slow effect (seconds). Reapplying refreshes it.
pub const SLOW_DURATION: f64 = 2.0;

pub const SHIELDED_HITS: u32 = 5;

/// Regen enemies restore this fraction of max health per second.
pub const REGEN_FRACTION_PER_SEC: f64 = 0.1;

/// Children of a split are placed on a circle of this radius.
pub const SPLIT_RADIUS: f64 = 20.0;

pub const SPLITTER_CHILD_COUNT: u32 = 2;

pub const MEGA_SPLIT_COUNT: u32 = 3;

/// Fragment stats relative to the parent.
pub const FRAGMENT_HEALTH_FRACTION: f64 = 0.3;
pub const FRAGMENT_SPEED_FACTOR: f64 = 1.5;
pub const FRAGMENT_MONEY_FRACTION: f64 = 0.3;

// --- Projectiles ---

pub const BULLET_SPEED: f64 = 250.0;

pub const BULLET_HIT_RADIUS: f64 = 8.0;

/// Pierce retarget search radius. Smaller than the base attack range.
pub const BULLET_RETARGET_RADIUS: f64 = 150.0;

pub const BULLET_TRAIL_LENGTH: usize = 8;

// --- Abilities ---

pub const PIERCE_DURATION: f64 = 8.0;
pub const FROST_DURATION: f64 = 10.0;
pub const FURY_DURATION: f64 = 8.0;
pub const PULSE_DURATION: f64 = 6.0;

/// Pierce budget granted while the pierce ability is active.
pub const PIERCE_ABILITY_BUDGET: u32 = 3;

/// Slow applied by frost rounds.
pub const FROST_SLOW: f64 = 0.5;

/// Damage multiplier for fury (critical) rounds.
pub const FURY_DAMAGE_MULT: f64 = 2.0;

/// Seconds between pulse damage passes.
pub const PULSE_INTERVAL: f64 = 0.15;

/// Half-width of the pulse band around the attack range.
pub const PULSE_BAND: f64 = 20.0;

pub const PULSE_FLAT_DAMAGE: f64 = 15.0;

pub const PULSE_MAX_HEALTH_FRACTION: f64 = 0.05;

/// Fraction of max health a nuke removes from mega-tier enemies.
pub const NUKE_MEGA_DAMAGE_FRACTION: f64 = 0.4;

pub const ABILITY_MAX_CHARGES: u32 = 3;
pub const NUKE_MAX_CHARGES: u32 = 1;

/// Geometric growth of ability charge cost per cumulative purchase.
pub const ABILITY_COST_MULTIPLIER: f64 = 1.35;

// --- Waves ---

pub const BASE_SPAWN_RADIUS: f64 = 280.0;

/// Spawn ring is kept at least this far outside the attack range.
pub const SPAWN_RANGE_BUFFER: f64 = 40.0;

/// Auto-advance countdown between waves (real seconds).
pub const WAVE_COUNTDOWN: f64 = 10.0;

pub const SWARM_COUNT_MULT: u32 = 3;
pub const SWARM_SPAWN_DELAY: f64 = 0.15;
pub const SWARM_HEALTH_MULT: f64 = 0.4;
pub const SWARM_SPEED_MULT: f64 = 1.3;

pub const BOSS_DELAY_MULT: f64 = 1.5;
pub const BOSS_TANK_CHANCE: f64 = 0.7;
pub const BOSS_TANK_HEALTH_MULT: f64 = 2.0;
pub const BOSS_OTHER_HEALTH_MULT: f64 = 1.5;

// --- Effects ---

pub const EXPLOSION_DURATION: f64 = 0.4;

pub const DAMAGE_NUMBER_DURATION: f64 = 0.8;

/// Velocity damping applied to floating damage numbers per 1/60 s of
/// simulated time.
pub const DAMAGE_NUMBER_DRAG: f64 = 0.95;

// --- Audio scheduling ---

/// Real seconds between background music bars.
pub const MUSIC_BAR_INTERVAL: f64 = 4.0;

// --- Unlocks ---

/// Best wave needed before pulse charges can be bought.
pub const PULSE_UNLOCK_WAVE: u32 = 10;

pub const GATLING_UNLOCK_KILLS: u64 = 500;

pub const RAILGUN_UNLOCK_WAVES: u64 = 50;
