//! Enemy behaviour for Core Defender.
//!
//! Per-kind stat profiles and the pure state-machine steps that move,
//! damage, slow, and split enemies. No ECS dependency.

pub mod fsm;
pub mod profiles;

pub use defender_core as core;

#[cfg(test)]
mod tests;
