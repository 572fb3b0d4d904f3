//! Money, permanent upgrades, and ability charge pricing.
//!
//! Every purchase is atomic: all checks run before money is deducted, and
//! the caller applies the effect only on `Ok`.

use std::collections::HashMap;

use thiserror::Error;

use defender_core::constants::*;
use defender_core::enums::{AbilityKind, UpgradeKind};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("need {cost} money, have {money}")]
    InsufficientFunds { cost: u32, money: u32 },
    #[error("{0:?} is at its level cap")]
    AtCap(UpgradeKind),
    #[error("{ability:?} already holds {max} charges")]
    ChargesFull { ability: AbilityKind, max: u32 },
    #[error("{0:?} is still locked")]
    Locked(AbilityKind),
}

/// Level, price and effect size of one upgrade line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpgradeTrack {
    pub level: u32,
    pub cost: u32,
    /// Stat added per level.
    pub increment: f64,
    /// Cost growth per purchase; new cost is floored.
    pub multiplier: f64,
    pub max_level: Option<u32>,
}

impl UpgradeTrack {
    pub fn for_kind(upgrade: UpgradeKind) -> Self {
        let (cost, increment, multiplier, max_level) = match upgrade {
            UpgradeKind::Damage => (50, 10.0, 1.8, None),
            UpgradeKind::FireRate => (75, 0.5, 2.0, None),
            // 225 + 7 * 25 = 400
            UpgradeKind::Range => (60, 25.0, 1.6, Some(7)),
            // 1 + 4 = 5 projectiles
            UpgradeKind::Multishot => (250, 1.0, 2.5, Some(4)),
        };
        Self {
            level: 0,
            cost,
            increment,
            multiplier,
            max_level,
        }
    }

    pub fn at_cap(&self) -> bool {
        self.max_level.is_some_and(|max| self.level >= max)
    }

    fn advance(&mut self) {
        self.level += 1;
        self.cost = (self.cost as f64 * self.multiplier).floor() as u32;
    }
}

pub fn ability_base_cost(ability: AbilityKind) -> u32 {
    match ability {
        AbilityKind::Pierce => 50,
        AbilityKind::Frost => 40,
        AbilityKind::Fury => 60,
        AbilityKind::Pulse => 120,
        AbilityKind::Nuke => 300,
    }
}

/// `round(base * 1.35^purchases)`, keyed on lifetime-of-run purchases.
pub fn ability_cost(ability: AbilityKind, purchases: u32) -> u32 {
    (ability_base_cost(ability) as f64 * ABILITY_COST_MULTIPLIER.powi(purchases as i32)).round()
        as u32
}

pub fn max_charges(ability: AbilityKind) -> u32 {
    match ability {
        AbilityKind::Nuke => NUKE_MAX_CHARGES,
        _ => ABILITY_MAX_CHARGES,
    }
}

#[derive(Debug, Clone)]
pub struct Ledger {
    money: u32,
    upgrades: HashMap<UpgradeKind, UpgradeTrack>,
    ability_purchases: HashMap<AbilityKind, u32>,
}

impl Ledger {
    pub fn new(starting_money: u32) -> Self {
        Self {
            money: starting_money,
            upgrades: UpgradeKind::ALL
                .into_iter()
                .map(|u| (u, UpgradeTrack::for_kind(u)))
                .collect(),
            ability_purchases: HashMap::new(),
        }
    }

    pub fn money(&self) -> u32 {
        self.money
    }

    pub fn earn(&mut self, amount: u32) {
        self.money = self.money.saturating_add(amount);
    }

    pub fn upgrade(&self, upgrade: UpgradeKind) -> UpgradeTrack {
        self.upgrades
            .get(&upgrade)
            .copied()
            .unwrap_or_else(|| UpgradeTrack::for_kind(upgrade))
    }

    pub fn ability_purchases(&self, ability: AbilityKind) -> u32 {
        self.ability_purchases.get(&ability).copied().unwrap_or(0)
    }

    pub fn ability_cost(&self, ability: AbilityKind) -> u32 {
        ability_cost(ability, self.ability_purchases(ability))
    }

    pub fn can_buy_upgrade(&self, upgrade: UpgradeKind) -> bool {
        let track = self.upgrade(upgrade);
        !track.at_cap() && self.money >= track.cost
    }

    /// Buy one level. Returns the stat increment to apply.
    pub fn purchase_upgrade(&mut self, upgrade: UpgradeKind) -> Result<f64, PurchaseError> {
        let money = self.money;
        let track = self
            .upgrades
            .entry(upgrade)
            .or_insert_with(|| UpgradeTrack::for_kind(upgrade));

        if track.at_cap() {
            return Err(PurchaseError::AtCap(upgrade));
        }
        if money < track.cost {
            return Err(PurchaseError::InsufficientFunds {
                cost: track.cost,
                money,
            });
        }

        self.money -= track.cost;
        let increment = track.increment;
        track.advance();
        Ok(increment)
    }

    /// Buy one charge. Returns the price paid.
    pub fn purchase_ability(
        &mut self,
        ability: AbilityKind,
        held_charges: u32,
        unlocked: bool,
    ) -> Result<u32, PurchaseError> {
        if !unlocked {
            return Err(PurchaseError::Locked(ability));
        }
        let max = max_charges(ability);
        if held_charges >= max {
            return Err(PurchaseError::ChargesFull { ability, max });
        }
        let cost = self.ability_cost(ability);
        if self.money < cost {
            return Err(PurchaseError::InsufficientFunds {
                cost,
                money: self.money,
            });
        }

        self.money -= cost;
        *self.ability_purchases.entry(ability).or_insert(0) += 1;
        Ok(cost)
    }
}
