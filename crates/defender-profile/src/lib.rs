//! Persistent player profile for Core Defender.
//!
//! The single record that survives between runs: best wave, lifetime
//! counters, unlock flags, and audio settings. Stores never fail loudly;
//! a missing or corrupt profile falls back to defaults.

pub mod error;
pub mod record;
pub mod store;
pub mod unlocks;

pub use error::ProfileError;
pub use record::{ProfileRecord, UnlockFlags};
pub use store::{JsonFileStore, MemoryStore, ProfileStore};

#[cfg(test)]
mod tests;
