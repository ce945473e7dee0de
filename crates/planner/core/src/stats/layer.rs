//! The Base -> Bonuses -> Final pattern shared by every stat layer.

/// Trait for stat layers that follow the Base -> Bonuses -> Final pattern.
///
/// # Layer Architecture
///
/// ```text
/// Layer 1: StatSheet  + ItemBonuses      -> StatSheet   (item stat deltas)
/// Layer 2: StatSheet  + InvestmentBonus  -> StatSheet   (investment tracks)
/// Layer 3: StatSheet  + ()               -> CombatStats (DPS, effective health)
/// ```
///
/// # Example
///
/// ```
/// # use planner_core::stats::*;
/// # use planner_core::BaseStats;
/// let base = BaseStats { health: 500.0, ..BaseStats::default() };
/// let sheet = StatSheet::seed(&base, 3.0);
///
/// let mut bonuses = ItemBonuses::new();
/// bonuses.add_raw("health", 100.0);
///
/// let with_items = <StatSheet as StatLayer>::compute(&sheet, &bonuses);
/// assert_eq!(with_items.health, 600.0);
/// ```
pub trait StatLayer {
    /// The base/input type for this layer
    type Base;

    /// The bonuses type for this layer
    type Bonuses;

    /// The final/output type for this layer
    type Final;

    /// Compute the final values from base and bonuses
    fn compute(base: &Self::Base, bonuses: &Self::Bonuses) -> Self::Final;

    /// Create an empty bonus holder
    fn empty_bonuses() -> Self::Bonuses;

    /// Compute with no bonuses (convenience method)
    fn from_base(base: &Self::Base) -> Self::Final {
        Self::compute(base, &Self::empty_bonuses())
    }
}
