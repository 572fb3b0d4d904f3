//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in arena space. The core sits at the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
///
/// `elapsed_secs` is scaled simulation time (speed multiplier applied, frozen
/// while paused). `real_secs` is wall-clock time fed into the engine.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of frames processed.
    pub tick: u64,
    pub elapsed_secs: f64,
    pub real_secs: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `center` along `angle` (radians, 0 = +x).
    pub fn on_circle(center: Position, radius: f64, angle: f64) -> Self {
        Self {
            x: center.x + angle.cos() * radius,
            y: center.y + angle.sin() * radius,
        }
    }

    /// Euclidean distance to another position.
    pub fn range_to(&self, other: &Position) -> f64 {
        DVec2::from(*self).distance(DVec2::from(*other))
    }

    /// Unit vector pointing at `other`, or zero when the points coincide.
    pub fn direction_to(&self, other: &Position) -> DVec2 {
        (DVec2::from(*other) - DVec2::from(*self)).normalize_or_zero()
    }

    /// Angle of the vector toward `other` in radians (atan2 convention).
    pub fn angle_to(&self, other: &Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Move by `distance` toward `other`.
    pub fn step_toward(&mut self, other: &Position, distance: f64) {
        let dir = self.direction_to(other);
        self.x += dir.x * distance;
        self.y += dir.y * distance;
    }
}

impl From<Position> for DVec2 {
    fn from(p: Position) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Position::new(v.x, v.y)
    }
}

impl SimTime {
    /// Record one processed frame.
    pub fn advance(&mut self, sim_dt: f64, real_dt: f64) {
        self.tick += 1;
        self.elapsed_secs += sim_dt;
        self.real_secs += real_dt;
    }
}
