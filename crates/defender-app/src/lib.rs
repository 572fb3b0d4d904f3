//! Core Defender headless application shell.
//!
//! Runs the simulation on its own thread, feeds it player commands from a
//! channel, and hands every snapshot to a `Frontend`.

pub mod config;
pub mod console;
pub mod frontend;
pub mod game_loop;

pub use defender_core as core;
