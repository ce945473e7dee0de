//! Stats Engine - layered derivation of a build's combat statistics.
//!
//! # Architecture
//!
//! ```text
//! [ Base stats (character) ]
//!      ↓  + item stat deltas          (Layer 1, sheet.rs)
//! [ StatSheet ]
//!      ↓  + investment track bonuses  (Layer 2, investment.rs)
//! [ StatSheet (final) ]
//!      ↓                              (Layer 3, combat.rs)
//! [ CombatStats ]
//! ```
//!
//! ## Principles
//!
//! 1. **Pure**: same inputs, same snapshot; inputs are never mutated
//! 2. **Wholesale**: every change recomputes the full [`DerivedStats`]
//! 3. **Uniform**: every item stat key is additive; flat vs. percentage is a display concern

pub mod ability;
pub mod combat;
pub mod investment;
pub mod layer;
pub mod points;
pub mod sheet;
pub mod snapshot;

use std::sync::LazyLock;

use crate::tables::BalanceTables;

pub use ability::{AbilityDamage, compute_ability_damage};
pub use combat::{CombatStats, effective_health};
pub use investment::{InvestmentBonus, InvestmentLayer, InvestmentSpend, InvestmentSummary};
pub use layer::StatLayer;
pub use points::{points_available, points_used, points_used_with, upgrade_cost};
pub use sheet::{ItemBonuses, StatKey, StatSheet};
pub use snapshot::{DerivedStats, StatsEngine, compute_stats};

static DEFAULT_TABLES: LazyLock<BalanceTables> = LazyLock::new(BalanceTables::default);

/// Live balance tables backing the free-function API.
pub(crate) fn default_tables() -> &'static BalanceTables {
    &DEFAULT_TABLES
}
