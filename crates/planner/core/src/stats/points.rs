//! Ability-point economy.
//!
//! Upgrade tiers cost 1, 2 and 5 points, cumulatively. Points are earned from
//! total souls spent through a fixed milestone table. Nothing here enforces
//! `points_used <= points_available`; that policy belongs to the host.

use crate::build::AbilityUpgrades;
use crate::tables::BalanceTables;

/// Points spent across every ability in `upgrades`.
pub fn points_used_with(upgrades: &AbilityUpgrades, tables: &BalanceTables) -> u32 {
    upgrades
        .iter()
        .map(|(_, level)| tables.upgrade_cost(level))
        .fold(0, u32::saturating_add)
}

/// Point cost of bringing one ability from level 0 to `level`.
pub fn upgrade_cost(level: u8) -> u32 {
    super::default_tables().upgrade_cost(level)
}

/// Points spent across every ability in `upgrades`, with the live tables.
pub fn points_used(upgrades: &AbilityUpgrades) -> u32 {
    points_used_with(upgrades, super::default_tables())
}

/// Points earned after spending `total_souls`, with the live tables.
pub fn points_available(total_souls: i64) -> u32 {
    super::default_tables().points_for_souls(total_souls)
}
