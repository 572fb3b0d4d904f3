//! The defended core turret: stats, ability slots, and per-shot modifiers.

use hecs::Entity;

use defender_core::constants::*;
use defender_core::enums::{AbilityKind, TurretClass, UpgradeKind};

/// One timed ability. `active` implies `timer > 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AbilitySlot {
    pub active: bool,
    pub timer: f64,
    pub charges: u32,
}

/// Class modifiers applied to the base turret.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassStats {
    pub damage_mult: f64,
    pub fire_rate_mult: f64,
    pub range_bonus: f64,
    pub inherent_pierce: u32,
}

pub fn class_stats(class: TurretClass) -> ClassStats {
    match class {
        TurretClass::Standard => ClassStats {
            damage_mult: 1.0,
            fire_rate_mult: 1.0,
            range_bonus: 0.0,
            inherent_pierce: 0,
        },
        TurretClass::Gatling => ClassStats {
            damage_mult: 0.7,
            fire_rate_mult: 1.5,
            range_bonus: 0.0,
            inherent_pierce: 0,
        },
        TurretClass::Railgun => ClassStats {
            damage_mult: 1.6,
            fire_rate_mult: 0.6,
            range_bonus: 25.0,
            inherent_pierce: 1,
        },
    }
}

pub fn ability_duration(ability: AbilityKind) -> f64 {
    match ability {
        AbilityKind::Pierce => PIERCE_DURATION,
        AbilityKind::Frost => FROST_DURATION,
        AbilityKind::Fury => FURY_DURATION,
        AbilityKind::Pulse => PULSE_DURATION,
        AbilityKind::Nuke => 0.0,
    }
}

/// Modifiers stamped onto every projectile of a volley.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotProfile {
    pub damage: f64,
    pub is_crit: bool,
    pub pierce: u32,
    pub slow: f64,
}

#[derive(Debug, Clone)]
pub struct Turret {
    pub class: TurretClass,
    pub damage: f64,
    /// Shots per second.
    pub fire_rate: f64,
    pub attack_range: f64,
    pub projectile_count: u32,
    pub inherent_pierce: u32,
    pub target: Option<Entity>,
    pub shoot_timer: f64,
    pub rotation: f64,
    pub muzzle_flash: f64,
    /// Cosmetic animation clock.
    pub ambient_time: f64,
    /// Active time banked toward the next pulse pass.
    pub pulse_accumulator: f64,
    pub pierce: AbilitySlot,
    pub frost: AbilitySlot,
    pub fury: AbilitySlot,
    pub pulse: AbilitySlot,
    pub nuke_charges: u32,
}

impl Turret {
    pub fn new(class: TurretClass) -> Self {
        let stats = class_stats(class);
        Self {
            class,
            damage: CORE_BASE_DAMAGE * stats.damage_mult,
            fire_rate: CORE_BASE_FIRE_RATE * stats.fire_rate_mult,
            attack_range: CORE_BASE_ATTACK_RANGE + stats.range_bonus,
            projectile_count: CORE_BASE_PROJECTILE_COUNT,
            inherent_pierce: stats.inherent_pierce,
            target: None,
            shoot_timer: 0.0,
            rotation: 0.0,
            muzzle_flash: 0.0,
            ambient_time: 0.0,
            pulse_accumulator: 0.0,
            pierce: AbilitySlot::default(),
            frost: AbilitySlot::default(),
            fury: AbilitySlot::default(),
            pulse: AbilitySlot::default(),
            nuke_charges: 0,
        }
    }

    /// Timed slot for an ability. `None` for the instant nuke.
    pub fn slot(&self, ability: AbilityKind) -> Option<&AbilitySlot> {
        match ability {
            AbilityKind::Pierce => Some(&self.pierce),
            AbilityKind::Frost => Some(&self.frost),
            AbilityKind::Fury => Some(&self.fury),
            AbilityKind::Pulse => Some(&self.pulse),
            AbilityKind::Nuke => None,
        }
    }

    fn slot_mut(&mut self, ability: AbilityKind) -> Option<&mut AbilitySlot> {
        match ability {
            AbilityKind::Pierce => Some(&mut self.pierce),
            AbilityKind::Frost => Some(&mut self.frost),
            AbilityKind::Fury => Some(&mut self.fury),
            AbilityKind::Pulse => Some(&mut self.pulse),
            AbilityKind::Nuke => None,
        }
    }

    pub fn charges(&self, ability: AbilityKind) -> u32 {
        match self.slot(ability) {
            Some(slot) => slot.charges,
            None => self.nuke_charges,
        }
    }

    pub fn add_charge(&mut self, ability: AbilityKind) {
        match self.slot_mut(ability) {
            Some(slot) => slot.charges += 1,
            None => self.nuke_charges += 1,
        }
    }

    pub fn is_active(&self, ability: AbilityKind) -> bool {
        self.slot(ability).is_some_and(|s| s.active)
    }

    /// Spend a charge. Timed abilities must not already be running.
    /// Returns false with no change when the activation is invalid.
    pub fn activate(&mut self, ability: AbilityKind) -> bool {
        let duration = ability_duration(ability);
        match self.slot_mut(ability) {
            Some(slot) => {
                if slot.charges == 0 || slot.active {
                    return false;
                }
                slot.charges -= 1;
                slot.active = true;
                slot.timer = duration;
            }
            None => {
                if self.nuke_charges == 0 {
                    return false;
                }
                self.nuke_charges -= 1;
            }
        }
        if ability == AbilityKind::Pulse {
            self.pulse_accumulator = 0.0;
        }
        true
    }

    /// Count down every running ability independently.
    pub fn tick_abilities(&mut self, dt: f64) {
        for ability in AbilityKind::TIMED {
            if let Some(slot) = self.slot_mut(ability) {
                if slot.active {
                    slot.timer -= dt;
                    if slot.timer <= 0.0 {
                        slot.timer = 0.0;
                        slot.active = false;
                    }
                }
            }
        }
    }

    pub fn shot_profile(&self) -> ShotProfile {
        let fury = self.fury.active;
        ShotProfile {
            damage: if fury {
                self.damage * FURY_DAMAGE_MULT
            } else {
                self.damage
            },
            is_crit: fury,
            pierce: if self.pierce.active {
                PIERCE_ABILITY_BUDGET
            } else {
                self.inherent_pierce
            },
            slow: if self.frost.active { FROST_SLOW } else { 0.0 },
        }
    }

    /// Apply one purchased upgrade level.
    pub fn apply_upgrade(&mut self, upgrade: UpgradeKind, increment: f64) {
        match upgrade {
            UpgradeKind::Damage => self.damage += increment,
            UpgradeKind::FireRate => self.fire_rate += increment,
            UpgradeKind::Range => self.attack_range += increment,
            UpgradeKind::Multishot => self.projectile_count += increment as u32,
        }
    }

    /// Radius of the spawn ring. Never inside attack range.
    pub fn spawn_radius(&self) -> f64 {
        BASE_SPAWN_RADIUS.max(self.attack_range + SPAWN_RANGE_BUFFER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_needs_a_charge() {
        let mut t = Turret::new(TurretClass::Standard);
        assert!(!t.activate(AbilityKind::Frost));
        t.add_charge(AbilityKind::Frost);
        assert!(t.activate(AbilityKind::Frost));
        assert!(t.is_active(AbilityKind::Frost));
        assert_eq!(t.frost.timer, FROST_DURATION);
        assert_eq!(t.charges(AbilityKind::Frost), 0);
    }

    #[test]
    fn cannot_reactivate_while_running() {
        let mut t = Turret::new(TurretClass::Standard);
        t.add_charge(AbilityKind::Pierce);
        t.add_charge(AbilityKind::Pierce);
        assert!(t.activate(AbilityKind::Pierce));
        assert!(!t.activate(AbilityKind::Pierce));
        assert_eq!(t.charges(AbilityKind::Pierce), 1);
    }

    #[test]
    fn timers_expire_independently() {
        let mut t = Turret::new(TurretClass::Standard);
        t.add_charge(AbilityKind::Pierce);
        t.add_charge(AbilityKind::Frost);
        t.activate(AbilityKind::Pierce);
        t.activate(AbilityKind::Frost);

        t.tick_abilities(8.5);
        assert!(!t.is_active(AbilityKind::Pierce));
        assert_eq!(t.pierce.timer, 0.0);
        assert!(t.is_active(AbilityKind::Frost));
        assert!(t.frost.timer > 0.0);
    }

    #[test]
    fn shot_profile_follows_abilities() {
        let mut t = Turret::new(TurretClass::Standard);
        let plain = t.shot_profile();
        assert_eq!(plain.damage, 35.0);
        assert!(!plain.is_crit);
        assert_eq!(plain.pierce, 0);
        assert_eq!(plain.slow, 0.0);

        for a in [AbilityKind::Pierce, AbilityKind::Frost, AbilityKind::Fury] {
            t.add_charge(a);
            t.activate(a);
        }
        let boosted = t.shot_profile();
        assert_eq!(boosted.damage, 70.0);
        assert!(boosted.is_crit);
        assert_eq!(boosted.pierce, 3);
        assert_eq!(boosted.slow, 0.5);
    }

    #[test]
    fn class_variants() {
        let gatling = Turret::new(TurretClass::Gatling);
        assert!((gatling.fire_rate - 4.5).abs() < 1e-9);
        assert!((gatling.damage - 24.5).abs() < 1e-9);

        let railgun = Turret::new(TurretClass::Railgun);
        assert_eq!(railgun.attack_range, 250.0);
        assert_eq!(railgun.shot_profile().pierce, 1);
    }

    #[test]
    fn spawn_radius_tracks_range() {
        let mut t = Turret::new(TurretClass::Standard);
        assert_eq!(t.spawn_radius(), 280.0);
        t.apply_upgrade(UpgradeKind::Range, 100.0);
        assert_eq!(t.spawn_radius(), 365.0);
    }

    #[test]
    fn nuke_uses_its_own_inventory() {
        let mut t = Turret::new(TurretClass::Standard);
        assert!(t.slot(AbilityKind::Nuke).is_none());
        t.add_charge(AbilityKind::Nuke);
        assert_eq!(t.charges(AbilityKind::Nuke), 1);
        assert!(t.activate(AbilityKind::Nuke));
        assert!(!t.activate(AbilityKind::Nuke));
    }
}
