//! Deterministic build-planner core: data model, stats engine and build state.
//!
//! `planner-core` folds a character's base stats, up to twelve equipped items
//! and per-ability upgrade levels into a [`DerivedStats`] snapshot, and owns
//! the slot rules (uniqueness, soul-threshold locks, capacity) of a [`Build`].
//! It performs no I/O; content loading lives in `planner-content`.
//!
//! Data flows one way: [`Build`] and [`AbilityUpgrades`] change, the host is
//! notified through a [`BuildObserver`], and the host re-runs the
//! [`StatsEngine`]. [`PlannerSession`] bundles that loop for UI hosts.
pub mod build;
pub mod catalog;
pub mod config;
pub mod error;
pub mod session;
pub mod stats;
pub mod tables;

pub use build::{
    AbilityUpgrades, Build, BuildChange, BuildData, BuildError, BuildObserver, EquipOutcome,
    LegacyBuild, LoadReport, NormalizedBuild, SavedBuild,
};
pub use catalog::{
    Ability, AbilityId, AbilityKind, BaseStats, Character, CharacterId, Item, ItemCatalog,
    ItemCategory, ItemEffect, ItemId, ItemLookup, Upgrade, UpgradeEffect,
};
pub use config::{PlannerConfig, SLOT_COUNT, SlotPolicy};
pub use error::{ErrorSeverity, PlannerError};
pub use session::{AbilitySummary, PlannerSession};
pub use stats::{
    AbilityDamage, CombatStats, DerivedStats, InvestmentBonus, InvestmentSpend,
    InvestmentSummary, StatKey, StatSheet, StatsEngine, compute_ability_damage, compute_stats,
    effective_health, points_available, points_used, upgrade_cost,
};
pub use tables::{BalanceTables, PointMilestone, TablesError};
