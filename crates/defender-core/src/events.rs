//! Events emitted by the simulation for the audio sink.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Fire-and-forget audio cues, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Normal volley fired.
    Shoot,
    /// Volley containing at least one critical round.
    CritShoot,
    /// Damage landed on an enemy.
    Hit { is_crit: bool },
    /// Damage absorbed by a shield.
    ShieldBlock,
    Explosion { kind: EnemyKind },
    AbilityActivate { ability: AbilityKind },
    UpgradePurchase { upgrade: Option<UpgradeKind> },
    WaveStart { wave: u32 },
    BossWarning { wave: u32, category: WaveCategory },
    GameOver { wave: u32 },
    /// An enemy reached the core and a life was spent.
    LifeLost { lives_remaining: u32 },
    /// UI acknowledgement of an accepted action.
    Click,
    /// One bar of the background music loop.
    MusicBar { bar: u64 },
}

impl AudioEvent {
    /// Sound effects are muted by the sfx setting; music is not.
    pub fn is_sfx(&self) -> bool {
        !matches!(self, AudioEvent::MusicBar { .. })
    }
}
