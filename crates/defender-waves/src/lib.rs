//! Wave generation for Core Defender.
//!
//! Pure, deterministic scaling curves keyed by wave number, plus the
//! per-category composition rules the spawner follows.

pub mod composer;
pub mod scaling;

pub use defender_core as core;

#[cfg(test)]
mod tests;
