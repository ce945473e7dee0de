//! Content factory for loading a whole data directory.

use std::path::{Path, PathBuf};

use planner_core::{Character, CharacterId, Item, ItemCatalog, PlannerConfig};

use crate::loaders::{
    CharacterLoader, ConfigLoader, DataFormat, ItemLoader, LoadResult, TablesLoader,
};

/// Content factory that loads planner content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml        (optional)
/// ├── tables.toml        (optional, overrides config tables)
/// ├── characters.json    (or characters.ron)
/// └── items.json         (or items.ron)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load planner configuration.
    ///
    /// Reads `config.toml` when present, then applies `tables.toml` on top.
    /// Both files are optional.
    pub fn load_config(&self) -> LoadResult<PlannerConfig> {
        let config_path = self.data_dir.join("config.toml");
        let mut config = if config_path.is_file() {
            ConfigLoader::load(&config_path)?
        } else {
            PlannerConfig::default()
        };

        let tables_path = self.data_dir.join("tables.toml");
        if tables_path.is_file() {
            config.tables = TablesLoader::load(&tables_path)?;
        }
        Ok(config)
    }

    /// Load every character from `characters.{json,ron}`.
    pub fn load_characters(&self) -> LoadResult<Vec<Character>> {
        CharacterLoader::load(&self.dataset_path("characters")?)
    }

    pub fn load_character(&self, id: &CharacterId) -> LoadResult<Character> {
        CharacterLoader::load_one(&self.dataset_path("characters")?, id)
    }

    /// Load the raw item list from `items.{json,ron}`.
    pub fn load_items(&self) -> LoadResult<Vec<Item>> {
        ItemLoader::load(&self.dataset_path("items")?)
    }

    pub fn load_catalog(&self) -> LoadResult<ItemCatalog> {
        ItemLoader::load_catalog(&self.dataset_path("items")?)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// First existing `{stem}.json` / `{stem}.ron` in the data directory.
    fn dataset_path(&self, stem: &str) -> LoadResult<PathBuf> {
        [DataFormat::Json, DataFormat::Ron]
            .into_iter()
            .map(|format| self.data_dir.join(format!("{}.{}", stem, format.extension())))
            .find(|path| path.is_file())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No {stem}.json or {stem}.ron in {}",
                    self.data_dir.display()
                )
            })
    }
}
