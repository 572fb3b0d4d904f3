//! Lifetime milestones that gate abilities and turret classes.

use defender_core::constants::*;
use defender_core::enums::{AbilityKind, TurretClass};

use crate::record::ProfileRecord;

/// Something newly made available by a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unlock {
    Ability(AbilityKind),
    Class(TurretClass),
}

/// Set any flags whose milestone is now met. Returns what changed.
pub fn refresh(record: &mut ProfileRecord) -> Vec<Unlock> {
    let mut gained = Vec::new();
    let flags = &mut record.unlocks;

    if !flags.pulse && record.high_score >= PULSE_UNLOCK_WAVE {
        flags.pulse = true;
        gained.push(Unlock::Ability(AbilityKind::Pulse));
    }
    if !flags.nuke && record.mega_boss_defeated {
        flags.nuke = true;
        gained.push(Unlock::Ability(AbilityKind::Nuke));
    }
    if !flags.gatling && record.total_enemies_killed >= GATLING_UNLOCK_KILLS {
        flags.gatling = true;
        gained.push(Unlock::Class(TurretClass::Gatling));
    }
    if !flags.railgun && record.total_waves_completed >= RAILGUN_UNLOCK_WAVES {
        flags.railgun = true;
        gained.push(Unlock::Class(TurretClass::Railgun));
    }

    gained
}
