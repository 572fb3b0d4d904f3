//! Simulation engine for Core Defender.
//!
//! Owns the hecs ECS world, advances every system on a clamped real-time
//! frame clock, and produces `GameStateSnapshot`s for the frontend.

pub mod bullet;
pub mod economy;
pub mod engine;
pub mod music;
pub mod run;
pub mod systems;
pub mod turret;
pub mod wave;
pub mod world_setup;

pub use defender_core as core;
pub use engine::{SimConfig, SimulationEngine};
