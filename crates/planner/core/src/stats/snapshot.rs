//! DerivedStats - the complete stats snapshot of a build.
//!
//! A snapshot is recomputed wholesale from (character, equipped items, ability
//! upgrades) on every build change and never patched in place. The engine keeps
//! no memory between calls.

use super::ability::{AbilityDamage, compute_ability_damage};
use super::combat::CombatStats;
use super::investment::{InvestmentLayer, InvestmentSpend, InvestmentSummary};
use super::layer::StatLayer;
use super::points::points_used_with;
use super::sheet::{ItemBonuses, StatSheet};
use crate::build::AbilityUpgrades;
use crate::catalog::{Ability, Character, Item};
use crate::tables::BalanceTables;

/// Snapshot of every derived value for one build.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DerivedStats {
    /// Base stats + item deltas + investment bonuses.
    pub stats: StatSheet,
    /// Item deltas alone ("+X from items").
    pub item_bonuses: StatSheet,
    /// Track spend and bonuses ("+Y from investment").
    pub investment: InvestmentSummary,
    pub combat: CombatStats,
    pub total_souls: i64,
    pub points_used: u32,
    pub points_available: u32,
}

impl DerivedStats {
    /// Points left to spend; negative when the build is over budget.
    pub fn points_remaining(&self) -> i64 {
        i64::from(self.points_available) - i64::from(self.points_used)
    }
}

/// Pure stats engine parameterized by balance tables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatsEngine {
    tables: BalanceTables,
}

impl StatsEngine {
    pub fn new(tables: BalanceTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &BalanceTables {
        &self.tables
    }

    /// Computes the derived stats snapshot.
    ///
    /// `items` are the occupied slots only; the caller filters empty ones.
    pub fn compute<'a>(
        &self,
        character: &Character,
        items: impl IntoIterator<Item = &'a Item>,
        upgrades: &AbilityUpgrades,
    ) -> DerivedStats {
        derive(&self.tables, character, items, upgrades)
    }

    /// Damage of `ability` at the snapshot's spirit power and the ability's upgrade level.
    pub fn ability_damage(
        &self,
        ability: &Ability,
        derived: &DerivedStats,
        upgrades: &AbilityUpgrades,
    ) -> Option<AbilityDamage> {
        compute_ability_damage(
            ability,
            derived.stats.spirit_power,
            upgrades.level(&ability.id),
        )
    }
}

/// Computes the derived stats snapshot with the live balance tables.
pub fn compute_stats<'a>(
    character: &Character,
    items: impl IntoIterator<Item = &'a Item>,
    upgrades: &AbilityUpgrades,
) -> DerivedStats {
    derive(super::default_tables(), character, items, upgrades)
}

fn derive<'a>(
    tables: &BalanceTables,
    character: &Character,
    items: impl IntoIterator<Item = &'a Item>,
    upgrades: &AbilityUpgrades,
) -> DerivedStats {
    let mut spend = InvestmentSpend::new();
    let mut bonuses = ItemBonuses::new();
    let mut total_souls: i64 = 0;
    for item in items {
        spend.add(item.category, item.cost);
        bonuses.add_item(item);
        total_souls = total_souls.saturating_add(item.cost);
    }

    // Layer 1: base + items
    let seeded = StatSheet::seed(&character.base_stats, tables.default_stamina);
    let with_items = <StatSheet as StatLayer>::compute(&seeded, &bonuses);

    // Layer 2: investment tracks
    let investment = InvestmentSummary::new(spend, tables);
    let stats = InvestmentLayer::compute(&with_items, &investment.bonus);

    // Layer 3: combat numbers
    let combat = CombatStats::from_base(&stats);

    let points_used = points_used_with(upgrades, tables);
    let points_available = tables.points_for_souls(total_souls);

    tracing::trace!(
        character = %character.id,
        total_souls,
        points_used,
        points_available,
        "recomputed derived stats"
    );

    DerivedStats {
        stats,
        item_bonuses: bonuses.into_deltas(),
        investment,
        combat,
        total_souls,
        points_used,
        points_available,
    }
}
