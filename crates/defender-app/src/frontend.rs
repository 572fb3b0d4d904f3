//! Snapshot consumers.

use std::io::Write;

use tracing::{debug, info, warn};

use defender_core::enums::GamePhase;
use defender_core::state::GameStateSnapshot;

/// Receives every snapshot the game loop produces.
pub trait Frontend {
    fn present(&mut self, snapshot: &GameStateSnapshot);
}

impl<F: Frontend + ?Sized> Frontend for Box<F> {
    fn present(&mut self, snapshot: &GameStateSnapshot) {
        (**self).present(snapshot);
    }
}

/// Headless frontend: audio cues at `debug`, a HUD line at `info` at most
/// once per `status_interval` real seconds and on every phase change.
#[derive(Debug, Clone)]
pub struct LogFrontend {
    status_interval: f64,
    last_status_at: Option<f64>,
    last_phase: Option<GamePhase>,
}

impl Default for LogFrontend {
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl LogFrontend {
    pub fn new(status_interval: f64) -> Self {
        Self {
            status_interval,
            last_status_at: None,
            last_phase: None,
        }
    }

    /// Whether this snapshot should produce a status line.
    fn status_due(&self, snapshot: &GameStateSnapshot) -> bool {
        if self.last_phase != Some(snapshot.phase) {
            return true;
        }
        self.last_status_at
            .map_or(true, |at| snapshot.time.real_secs - at >= self.status_interval)
    }
}

impl Frontend for LogFrontend {
    fn present(&mut self, snapshot: &GameStateSnapshot) {
        for event in &snapshot.audio_events {
            debug!(?event, "audio");
        }

        if !self.status_due(snapshot) {
            return;
        }
        self.last_status_at = Some(snapshot.time.real_secs);
        self.last_phase = Some(snapshot.phase);

        let labels = &snapshot.labels;
        info!(
            phase = ?snapshot.phase,
            "{} | {} | {} | {} | {} | {} | [{}]",
            labels.wave,
            labels.best_wave,
            labels.money,
            labels.lives,
            labels.enemies,
            labels.speed,
            labels.start_wave.text,
        );
    }
}

/// Streams every `every`-th snapshot as one JSON line, for external renderers.
pub struct JsonLinesFrontend<W: Write> {
    out: W,
    every: u64,
    failed: bool,
}

impl<W: Write> JsonLinesFrontend<W> {
    pub fn new(out: W, every: u64) -> Self {
        Self {
            out,
            every: every.max(1),
            failed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, snapshot: &GameStateSnapshot) -> Result<(), Box<dyn std::error::Error>> {
        serde_json::to_writer(&mut self.out, snapshot)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Frontend for JsonLinesFrontend<W> {
    fn present(&mut self, snapshot: &GameStateSnapshot) {
        if self.failed || snapshot.time.tick % self.every != 0 {
            return;
        }
        if let Err(e) = self.write_line(snapshot) {
            // Reader is gone.
            warn!(error = %e, "snapshot stream closed");
            self.failed = true;
        }
    }
}
