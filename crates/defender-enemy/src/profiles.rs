//! Kind-specific stat profiles.
//!
//! Consolidates the per-kind modifier table used by `fsm::apply_type_modifiers`.

use defender_core::components::{SplitChild, SplitSpec};
use defender_core::enums::EnemyKind;

/// Multipliers and specials for an enemy kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    pub speed_mult: f64,
    pub health_mult: f64,
    /// Applied to the money reward, then floored.
    pub money_mult: f64,
    pub shield_hits: u32,
    /// Fraction of max health restored per second.
    pub regen_fraction: f64,
    pub split: Option<SplitSpec>,
}

impl EnemyProfile {
    const fn plain(speed_mult: f64, health_mult: f64, money_mult: f64) -> Self {
        Self {
            speed_mult,
            health_mult,
            money_mult,
            shield_hits: 0,
            regen_fraction: 0.0,
            split: None,
        }
    }
}

/// Get the stat profile for a given kind.
pub fn get_profile(kind: EnemyKind) -> EnemyProfile {
    use defender_core::constants::*;

    match kind {
        EnemyKind::Normal => EnemyProfile::plain(1.0, 1.0, 1.0),
        EnemyKind::Fast => EnemyProfile::plain(1.8, 0.5, 0.8),
        EnemyKind::Tank => EnemyProfile::plain(0.5, 3.0, 2.0),
        EnemyKind::Swarm => EnemyProfile::plain(1.2, 0.3, 0.5),
        EnemyKind::Shielded => EnemyProfile {
            shield_hits: SHIELDED_HITS,
            ..EnemyProfile::plain(0.9, 1.5, 1.5)
        },
        EnemyKind::Regen => EnemyProfile {
            regen_fraction: REGEN_FRACTION_PER_SEC,
            ..EnemyProfile::plain(0.8, 2.0, 1.8)
        },
        EnemyKind::Splitter => EnemyProfile {
            split: Some(SplitSpec {
                count: SPLITTER_CHILD_COUNT,
                child: SplitChild::Fragment,
            }),
            ..EnemyProfile::plain(1.0, 1.2, 0.7)
        },
        EnemyKind::MegaBoss => EnemyProfile {
            split: Some(SplitSpec {
                count: MEGA_SPLIT_COUNT,
                child: SplitChild::Tier(EnemyKind::MegaBossMedium),
            }),
            ..EnemyProfile::plain(0.3, 15.0, 5.0)
        },
        EnemyKind::MegaBossMedium => EnemyProfile {
            split: Some(SplitSpec {
                count: MEGA_SPLIT_COUNT,
                child: SplitChild::Tier(EnemyKind::MegaBossSmall),
            }),
            ..EnemyProfile::plain(0.5, 4.0, 1.5)
        },
        EnemyKind::MegaBossSmall => EnemyProfile::plain(0.8, 1.5, 0.5),
    }
}
