//! Character dataset loader.

use std::path::Path;

use planner_core::{Character, CharacterId};

use crate::loaders::{LoadResult, load_dataset};

/// Loader for character lists from JSON or RON files.
pub struct CharacterLoader;

impl CharacterLoader {
    /// Load every character from a `.json` or `.ron` file holding a list.
    pub fn load(path: &Path) -> LoadResult<Vec<Character>> {
        let characters: Vec<Character> = load_dataset(path, "character dataset")?;
        tracing::debug!(path = %path.display(), count = characters.len(), "loaded characters");
        Ok(characters)
    }

    /// Load one character by id.
    pub fn load_one(path: &Path, id: &CharacterId) -> LoadResult<Character> {
        Self::load(path)?
            .into_iter()
            .find(|character| &character.id == id)
            .ok_or_else(|| anyhow::anyhow!("Character '{}' not found in {}", id, path.display()))
    }
}
