//! Investment Tracks - Layer 2 of the stat pipeline.
//!
//! Souls spent in each item category accumulate into a track. Crossing the
//! shared breakpoints grants a flat bonus that is independent of which items
//! were bought:
//!
//! | track    | stat          | 800  | 2400 | 5600 | 12000 |
//! |----------|---------------|------|------|------|-------|
//! | weapon   | weapon damage | 0.04 | 0.10 | 0.18 | 0.28  |
//! | vitality | health        | 50   | 125  | 225  | 375   |
//! | spirit   | spirit power  | 4    | 12   | 24   | 40    |

use super::layer::StatLayer;
use super::sheet::StatSheet;
use crate::catalog::ItemCategory;
use crate::tables::BalanceTables;

/// Souls spent per item category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InvestmentSpend {
    pub weapon: i64,
    pub vitality: i64,
    pub spirit: i64,
}

impl InvestmentSpend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, category: ItemCategory, cost: i64) {
        let track = self.get_mut(category);
        *track = track.saturating_add(cost);
    }

    pub fn get(&self, category: ItemCategory) -> i64 {
        match category {
            ItemCategory::Weapon => self.weapon,
            ItemCategory::Vitality => self.vitality,
            ItemCategory::Spirit => self.spirit,
        }
    }

    fn get_mut(&mut self, category: ItemCategory) -> &mut i64 {
        match category {
            ItemCategory::Weapon => &mut self.weapon,
            ItemCategory::Vitality => &mut self.vitality,
            ItemCategory::Spirit => &mut self.spirit,
        }
    }

    pub fn total(&self) -> i64 {
        self.weapon
            .saturating_add(self.vitality)
            .saturating_add(self.spirit)
    }
}

/// Flat bonuses granted by the investment tracks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct InvestmentBonus {
    pub weapon_damage: f64,
    pub health: f64,
    pub spirit_power: f64,
}

impl InvestmentBonus {
    /// Looks up each track's highest breakpoint met; below the first breakpoint a track grants 0.
    pub fn from_spend(spend: &InvestmentSpend, tables: &BalanceTables) -> Self {
        let lookup = |category: ItemCategory, bonuses: &[f64]| {
            tables
                .investment_tier(spend.get(category))
                .map_or(0.0, |tier| bonuses[tier])
        };
        Self {
            weapon_damage: lookup(ItemCategory::Weapon, &tables.weapon_damage_bonus),
            health: lookup(ItemCategory::Vitality, &tables.health_bonus),
            spirit_power: lookup(ItemCategory::Spirit, &tables.spirit_power_bonus),
        }
    }
}

/// Spend and resulting bonus, kept together so hosts can show the track breakdown.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InvestmentSummary {
    pub spend: InvestmentSpend,
    pub bonus: InvestmentBonus,
}

impl InvestmentSummary {
    pub fn new(spend: InvestmentSpend, tables: &BalanceTables) -> Self {
        Self {
            spend,
            bonus: InvestmentBonus::from_spend(&spend, tables),
        }
    }
}

/// Layer 2 marker: applies [`InvestmentBonus`] onto a sheet.
pub struct InvestmentLayer;

impl StatLayer for InvestmentLayer {
    type Base = StatSheet;
    type Bonuses = InvestmentBonus;
    type Final = StatSheet;

    fn compute(base: &Self::Base, bonuses: &Self::Bonuses) -> Self::Final {
        let mut sheet = base.clone();
        sheet.weapon_damage += bonuses.weapon_damage;
        sheet.health += bonuses.health;
        sheet.spirit_power += bonuses.spirit_power;
        sheet
    }

    fn empty_bonuses() -> Self::Bonuses {
        InvestmentBonus::default()
    }
}
