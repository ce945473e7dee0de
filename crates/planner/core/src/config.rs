use crate::tables::BalanceTables;

/// Number of equip slots in a build.
pub const SLOT_COUNT: usize = 12;
/// Slots `0..ALWAYS_OPEN_SLOTS` never lock.
pub const ALWAYS_OPEN_SLOTS: usize = 9;
/// Slots gated behind total-souls thresholds.
pub const FLEX_SLOT_COUNT: usize = SLOT_COUNT - ALWAYS_OPEN_SLOTS;
/// Upgrade tiers per ability.
pub const UPGRADE_TIERS: usize = 3;
/// Highest ability upgrade level.
pub const MAX_UPGRADE_LEVEL: u8 = UPGRADE_TIERS as u8;
/// Breakpoints per investment track.
pub const INVESTMENT_TIERS: usize = 4;

/// What `equip` does when the target slot already holds an item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SlotPolicy {
    /// Replace the occupant; the replaced item is reported in the outcome.
    #[default]
    Overwrite,
    /// Reject with `BuildError::SlotOccupied`.
    Strict,
}

/// Planner configuration and tunable parameters.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    pub slot_policy: SlotPolicy,
    /// Reject upgrade levels whose total cost exceeds the points earned so far.
    /// The engine itself never enforces this; only the session consults it.
    pub enforce_point_budget: bool,
    pub tables: BalanceTables,
}

impl PlannerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot_policy(mut self, slot_policy: SlotPolicy) -> Self {
        self.slot_policy = slot_policy;
        self
    }

    pub fn with_point_budget(mut self, enforce: bool) -> Self {
        self.enforce_point_budget = enforce;
        self
    }

    pub fn with_tables(mut self, tables: BalanceTables) -> Self {
        self.tables = tables;
        self
    }
}
