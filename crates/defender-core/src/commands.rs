//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and validated at the next tick boundary.
//! Anything invalid for the current state is dropped without effect.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Waves ---
    /// Start the next wave now, cancelling any countdown.
    StartWave,

    // --- Abilities ---
    ActivateAbility { ability: AbilityKind },

    // --- Economy ---
    PurchaseUpgrade { upgrade: UpgradeKind },
    PurchaseAbility { ability: AbilityKind },
    /// Dismiss the between-wave upgrade panel.
    CloseUpgradePanel,

    // --- Simulation control ---
    Pause,
    Resume,
    TogglePause,
    /// Step through the speed multipliers (1x, 2x, 3x).
    CycleSpeed,
    /// Throw away the current run and start over with the given class.
    RestartRun { class: TurretClass },

    // --- Settings ---
    ToggleMusic,
    ToggleSfx,
}
