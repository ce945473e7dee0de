//! Build State - equipped slots and ability upgrade levels.
//!
//! [`Build`] owns the slot invariants (uniqueness, locks, capacity) and
//! announces every successful mutation to its [`BuildObserver`]s.
//! [`AbilityUpgrades`] tracks per-ability levels. Neither computes stats: hosts
//! feed their contents to the stats engine after each change.

mod error;
pub mod format;
mod observer;
mod slots;
mod upgrades;

pub use error::BuildError;
pub use format::{BuildData, LegacyBuild, LoadReport, NormalizedBuild, SavedBuild};
pub use observer::{BuildChange, BuildObserver};
pub use slots::{Build, EquipOutcome};
pub use upgrades::AbilityUpgrades;
