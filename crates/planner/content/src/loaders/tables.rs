//! Balance tables loader.

use std::path::Path;

use planner_core::BalanceTables;

use crate::loaders::{LoadResult, read_file};

/// Loader for balance table overrides from TOML files.
pub struct TablesLoader;

impl TablesLoader {
    /// Load balance tables from a TOML file.
    ///
    /// Tables missing from the file keep their live values. The result is
    /// validated before it is returned.
    pub fn load(path: &Path) -> LoadResult<BalanceTables> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BalanceTables> {
        let tables: BalanceTables = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables TOML: {}", e))?;
        tables
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid balance tables: {}", e))?;
        Ok(tables)
    }
}
