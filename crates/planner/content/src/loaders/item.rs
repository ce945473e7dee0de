//! Item catalog loader.

use std::path::Path;

use planner_core::{Item, ItemCatalog};

use crate::loaders::{LoadResult, load_dataset};

/// Loader for item lists from JSON or RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load the raw item list, duplicates included.
    ///
    /// Use this for validation; [`ItemLoader::load_catalog`] keeps only the
    /// last definition of a repeated id.
    pub fn load(path: &Path) -> LoadResult<Vec<Item>> {
        let items: Vec<Item> = load_dataset(path, "item dataset")?;
        tracing::debug!(path = %path.display(), count = items.len(), "loaded items");
        Ok(items)
    }

    /// Load items indexed by id.
    pub fn load_catalog(path: &Path) -> LoadResult<ItemCatalog> {
        Ok(Self::load(path)?.into_iter().collect())
    }
}
