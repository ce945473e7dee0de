//! Planner configuration loader.

use std::path::Path;

use planner_core::PlannerConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for planner configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// ```toml
    /// slot_policy = "strict"
    /// enforce_point_budget = true
    ///
    /// [tables]
    /// slot_unlock_thresholds = [2000, 5000, 8000]
    /// ```
    pub fn load(path: &Path) -> LoadResult<PlannerConfig> {
        let content = read_file(path)?;
        let config: PlannerConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .tables
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid balance tables in {}: {}", path.display(), e))?;

        tracing::debug!(path = %path.display(), policy = ?config.slot_policy, "loaded planner config");
        Ok(config)
    }
}
