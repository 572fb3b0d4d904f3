//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy archetype. Stat modifiers live in a data table keyed by this enum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    #[default]
    Normal,
    Fast,
    Tank,
    Swarm,
    Shielded,
    Regen,
    Splitter,
    MegaBoss,
    MegaBossMedium,
    MegaBossSmall,
}

impl EnemyKind {
    /// Any tier of the mega-boss chain.
    pub fn is_mega(self) -> bool {
        matches!(
            self,
            EnemyKind::MegaBoss | EnemyKind::MegaBossMedium | EnemyKind::MegaBossSmall
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EnemyKind::Normal => "normal",
            EnemyKind::Fast => "fast",
            EnemyKind::Tank => "tank",
            EnemyKind::Swarm => "swarm",
            EnemyKind::Shielded => "shielded",
            EnemyKind::Regen => "regen",
            EnemyKind::Splitter => "splitter",
            EnemyKind::MegaBoss => "megaboss",
            EnemyKind::MegaBossMedium => "megaboss_medium",
            EnemyKind::MegaBossSmall => "megaboss_small",
        }
    }
}

/// Wave category. Mutually exclusive; see `defender_waves::composer::category`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaveCategory {
    #[default]
    Normal,
    Swarm,
    Boss,
    MegaBoss,
}

impl WaveCategory {
    /// Suffix shown after the wave number in the wave label.
    pub fn label_suffix(self) -> Option<&'static str> {
        match self {
            WaveCategory::Normal => None,
            WaveCategory::Swarm => Some("SWARM"),
            WaveCategory::Boss => Some("BOSS"),
            WaveCategory::MegaBoss => Some("MEGA BOSS"),
        }
    }
}

/// Consumable turret abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityKind {
    Pierce,
    Frost,
    Fury,
    Pulse,
    Nuke,
}

impl AbilityKind {
    pub const ALL: [AbilityKind; 5] = [
        AbilityKind::Pierce,
        AbilityKind::Frost,
        AbilityKind::Fury,
        AbilityKind::Pulse,
        AbilityKind::Nuke,
    ];

    /// Abilities that run on a timer once activated. Nuke resolves instantly.
    pub const TIMED: [AbilityKind; 4] = [
        AbilityKind::Pierce,
        AbilityKind::Frost,
        AbilityKind::Fury,
        AbilityKind::Pulse,
    ];

    pub fn is_timed(self) -> bool {
        self != AbilityKind::Nuke
    }

    pub fn label(self) -> &'static str {
        match self {
            AbilityKind::Pierce => "PIERCE",
            AbilityKind::Frost => "FROST",
            AbilityKind::Fury => "FURY",
            AbilityKind::Pulse => "PULSE",
            AbilityKind::Nuke => "NUKE",
        }
    }
}

/// Permanent stat upgrades bought with money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeKind {
    Damage,
    FireRate,
    Range,
    Multishot,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 4] = [
        UpgradeKind::Damage,
        UpgradeKind::FireRate,
        UpgradeKind::Range,
        UpgradeKind::Multishot,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UpgradeKind::Damage => "DAMAGE",
            UpgradeKind::FireRate => "FIRE RATE",
            UpgradeKind::Range => "RANGE",
            UpgradeKind::Multishot => "MULTISHOT",
        }
    }
}

/// Turret loadout chosen at the start of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurretClass {
    #[default]
    Standard,
    /// Faster, weaker shots.
    Gatling,
    /// Slow, heavy shots with inherent pierce.
    Railgun,
}

/// Top-level run phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
    /// Terminal until a restart.
    GameOver,
}

/// Wave scheduler state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveState {
    /// Between waves with no countdown running.
    #[default]
    Idle,
    /// Enemies remain to be spawned.
    Spawning,
    /// Spawning done; waiting for the field to clear.
    Clearing,
    /// Auto-advance countdown running.
    Countdown,
}

/// Visible lifecycle of an enemy. Dying is instantaneous and never observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyLifecycle {
    #[default]
    Spawning,
    Active,
}
