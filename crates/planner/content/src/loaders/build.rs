//! Saved build loader.

use std::path::Path;

use planner_core::{BuildData, CharacterId, SavedBuild};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Contents of a build file: a whole saved session or bare slot data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BuildFile {
    Saved(SavedBuild),
    Bare(BuildData),
}

impl BuildFile {
    pub fn character(&self) -> Option<&CharacterId> {
        match self {
            BuildFile::Saved(saved) => Some(&saved.character),
            BuildFile::Bare(_) => None,
        }
    }

    /// Attaches `character` to bare slot data.
    pub fn into_saved(self, character: CharacterId) -> SavedBuild {
        match self {
            BuildFile::Saved(saved) => saved,
            BuildFile::Bare(slots) => SavedBuild {
                character,
                slots,
                upgrades: Default::default(),
            },
        }
    }
}

/// Loader for saved builds from JSON files.
pub struct BuildLoader;

impl BuildLoader {
    pub fn load(path: &Path) -> LoadResult<BuildFile> {
        let content = read_file(path)?;
        serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse build JSON {}: {}", path.display(), e))
    }

    /// Write `saved` as pretty JSON, replacing any existing file.
    pub fn save(path: &Path, saved: &SavedBuild) -> LoadResult<()> {
        let json = serde_json::to_string_pretty(saved)
            .map_err(|e| anyhow::anyhow!("Failed to encode build: {}", e))?;
        std::fs::write(path, json)
            .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))
    }
}
