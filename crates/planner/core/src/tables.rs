//! Balance tables: the fixed numeric breakpoints that drive investment bonuses,
//! slot unlocks and the ability-point economy.
//!
//! `BalanceTables::default()` holds the live game values. Hosts may override them
//! from a TOML file (see `planner-content::TablesLoader`), in which case
//! [`BalanceTables::validate`] must pass before the tables are used.

use crate::config::{FLEX_SLOT_COUNT, INVESTMENT_TIERS, UPGRADE_TIERS};
use crate::error::{ErrorSeverity, PlannerError};

/// One row of the ability-point milestone table.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointMilestone {
    /// Total souls spent required to reach this row.
    pub souls: i64,
    /// Ability points granted once the row is reached.
    pub points: u32,
}

impl PointMilestone {
    pub const fn new(souls: i64, points: u32) -> Self {
        Self { souls, points }
    }
}

/// Fixed balance tables used by the stats engine and the build state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BalanceTables {
    /// Per-category spend breakpoints shared by all investment tracks.
    pub investment_breakpoints: [i64; INVESTMENT_TIERS],
    /// Weapon track: weapon damage fraction granted at each breakpoint.
    pub weapon_damage_bonus: [f64; INVESTMENT_TIERS],
    /// Vitality track: flat health granted at each breakpoint.
    pub health_bonus: [f64; INVESTMENT_TIERS],
    /// Spirit track: spirit power granted at each breakpoint.
    pub spirit_power_bonus: [f64; INVESTMENT_TIERS],
    /// Total-souls thresholds for the flex slots (indices 9, 10, 11).
    pub slot_unlock_thresholds: [i64; FLEX_SLOT_COUNT],
    /// Point cost of upgrade tiers 1, 2 and 3.
    pub upgrade_costs: [u32; UPGRADE_TIERS],
    /// Ascending milestone table mapping total souls to available ability points.
    pub ability_point_milestones: Vec<PointMilestone>,
    /// Stamina used when a character does not define one.
    pub default_stamina: f64,
}

impl BalanceTables {
    pub const INVESTMENT_BREAKPOINTS: [i64; INVESTMENT_TIERS] = [800, 2400, 5600, 12000];
    pub const WEAPON_DAMAGE_BONUS: [f64; INVESTMENT_TIERS] = [0.04, 0.10, 0.18, 0.28];
    pub const HEALTH_BONUS: [f64; INVESTMENT_TIERS] = [50.0, 125.0, 225.0, 375.0];
    pub const SPIRIT_POWER_BONUS: [f64; INVESTMENT_TIERS] = [4.0, 12.0, 24.0, 40.0];
    pub const SLOT_UNLOCK_THRESHOLDS: [i64; FLEX_SLOT_COUNT] = [3000, 6000, 9000];
    pub const UPGRADE_COSTS: [u32; UPGRADE_TIERS] = [1, 2, 5];
    pub const DEFAULT_STAMINA: f64 = 3.0;
    pub const ABILITY_POINT_MILESTONES: [PointMilestone; 12] = [
        PointMilestone::new(0, 1),
        PointMilestone::new(1000, 2),
        PointMilestone::new(2500, 3),
        PointMilestone::new(4000, 4),
        PointMilestone::new(6000, 5),
        PointMilestone::new(8000, 6),
        PointMilestone::new(10000, 7),
        PointMilestone::new(13000, 8),
        PointMilestone::new(16000, 9),
        PointMilestone::new(20000, 10),
        PointMilestone::new(25000, 11),
        PointMilestone::new(30000, 12),
    ];

    pub fn new() -> Self {
        Self {
            investment_breakpoints: Self::INVESTMENT_BREAKPOINTS,
            weapon_damage_bonus: Self::WEAPON_DAMAGE_BONUS,
            health_bonus: Self::HEALTH_BONUS,
            spirit_power_bonus: Self::SPIRIT_POWER_BONUS,
            slot_unlock_thresholds: Self::SLOT_UNLOCK_THRESHOLDS,
            upgrade_costs: Self::UPGRADE_COSTS,
            ability_point_milestones: Self::ABILITY_POINT_MILESTONES.to_vec(),
            default_stamina: Self::DEFAULT_STAMINA,
        }
    }

    /// Index of the highest investment breakpoint met by `spend`, if any.
    pub fn investment_tier(&self, spend: i64) -> Option<usize> {
        self.investment_breakpoints
            .iter()
            .rposition(|&breakpoint| spend >= breakpoint)
    }

    /// Points granted by the highest milestone not exceeding `total_souls`.
    ///
    /// Returns 0 when no milestone is met (only possible for negative totals
    /// with the default table).
    pub fn points_for_souls(&self, total_souls: i64) -> u32 {
        self.ability_point_milestones
            .iter()
            .take_while(|m| m.souls <= total_souls)
            .last()
            .map_or(0, |m| m.points)
    }

    /// Cumulative point cost of reaching `level` (levels above the tier count saturate).
    pub fn upgrade_cost(&self, level: u8) -> u32 {
        self.upgrade_costs
            .iter()
            .take(level as usize)
            .fold(0, |total, &cost| total.saturating_add(cost))
    }

    /// Checks that every breakpoint table is strictly ascending.
    pub fn validate(&self) -> Result<(), TablesError> {
        ensure_ascending("investment_breakpoints", &self.investment_breakpoints)?;
        ensure_ascending("slot_unlock_thresholds", &self.slot_unlock_thresholds)?;
        let milestone_souls: Vec<i64> = self
            .ability_point_milestones
            .iter()
            .map(|m| m.souls)
            .collect();
        ensure_ascending("ability_point_milestones", &milestone_souls)
    }
}

impl Default for BalanceTables {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_ascending(table: &'static str, values: &[i64]) -> Result<(), TablesError> {
    match values.windows(2).position(|w| w[0] >= w[1]) {
        Some(index) => Err(TablesError::NotAscending {
            table,
            index: index + 1,
        }),
        None => Ok(()),
    }
}

/// Errors raised when validating overridden balance tables.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TablesError {
    /// A breakpoint table is not strictly ascending.
    #[error("table `{table}` is not strictly ascending at entry {index}")]
    NotAscending {
        /// Name of the offending table.
        table: &'static str,
        /// First entry that is not greater than its predecessor.
        index: usize,
    },
}

impl PlannerError for TablesError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            TablesError::NotAscending { .. } => "TABLES_NOT_ASCENDING",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn investment_tier_boundaries() {
        let tables = BalanceTables::default();
        assert_eq!(tables.investment_tier(799), None);
        assert_eq!(tables.investment_tier(800), Some(0));
        assert_eq!(tables.investment_tier(2399), Some(0));
        assert_eq!(tables.investment_tier(12000), Some(3));
        assert_eq!(tables.investment_tier(50000), Some(3));
    }

    #[test]
    fn milestones_pick_highest_reached() {
        let tables = BalanceTables::default();
        assert_eq!(tables.points_for_souls(0), 1);
        assert_eq!(tables.points_for_souls(2499), 2);
        assert_eq!(tables.points_for_souls(2500), 3);
        assert_eq!(tables.points_for_souls(1_000_000), 12);
        assert_eq!(tables.points_for_souls(-1), 0);
    }

    #[test]
    fn upgrade_cost_is_cumulative() {
        let tables = BalanceTables::default();
        assert_eq!(tables.upgrade_cost(0), 0);
        assert_eq!(tables.upgrade_cost(1), 1);
        assert_eq!(tables.upgrade_cost(2), 3);
        assert_eq!(tables.upgrade_cost(3), 8);
        assert_eq!(tables.upgrade_cost(7), 8);
    }

    #[test]
    fn default_tables_validate() {
        assert_eq!(BalanceTables::default().validate(), Ok(()));
    }

    #[test]
    fn descending_breakpoints_are_rejected() {
        let mut tables = BalanceTables::default();
        tables.slot_unlock_thresholds = [3000, 2000, 9000];
        let err = tables.validate().unwrap_err();
        assert_eq!(
            err,
            TablesError::NotAscending {
                table: "slot_unlock_thresholds",
                index: 1
            }
        );
        assert_eq!(err.error_code(), "TABLES_NOT_ASCENDING");
    }
}
