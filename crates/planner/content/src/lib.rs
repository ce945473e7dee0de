//! Data-driven planner content: loaders and data validation.
//!
//! This crate reads the external inputs of the planner core from disk:
//! - Character datasets (JSON or RON)
//! - Item catalogs (JSON or RON)
//! - Balance table overrides and planner configuration (TOML)
//! - Saved builds (JSON)
//!
//! It also reports data-quality issues the core tolerates silently
//! (see [`validation`]).
//!
//! All loaders use planner-core types directly with serde for deserialization.

pub mod validation;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use validation::{Finding, FindingLevel, ValidationReport, validate_catalog};

#[cfg(feature = "loaders")]
pub use loaders::{
    BuildFile, BuildLoader, CharacterLoader, ConfigLoader, ContentFactory, DataFormat, ItemLoader,
    LoadResult, TablesLoader,
};
