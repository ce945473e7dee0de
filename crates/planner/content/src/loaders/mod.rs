//! Content loaders for reading planner data from files.
//!
//! Character and item datasets are JSON (the format the game data ships in)
//! or RON, picked by file extension. Balance tables and planner config are
//! TOML. Saved builds are JSON.

pub mod build;
pub mod character;
pub mod config;
pub mod factory;
pub mod item;
pub mod tables;

pub use build::{BuildFile, BuildLoader};
pub use character::CharacterLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::ItemLoader;
pub use tables::TablesLoader;

use std::path::Path;

use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Dataset encodings accepted for characters and items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Ron,
}

impl DataFormat {
    /// Format named by the file extension; `None` for anything else.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(DataFormat::Json),
            "ron" => Some(DataFormat::Ron),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DataFormat::Json => "json",
            DataFormat::Ron => "ron",
        }
    }

    pub(crate) fn parse<T: DeserializeOwned>(&self, content: &str, what: &str) -> LoadResult<T> {
        match self {
            DataFormat::Json => serde_json::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {} JSON: {}", what, e)),
            DataFormat::Ron => ron::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {} RON: {}", what, e)),
        }
    }
}

/// Reads a JSON or RON dataset, choosing the parser from the extension.
pub(crate) fn load_dataset<T: DeserializeOwned>(path: &Path, what: &str) -> LoadResult<T> {
    let format = DataFormat::from_path(path).ok_or_else(|| {
        anyhow::anyhow!(
            "Unsupported {} file {}: expected .json or .ron",
            what,
            path.display()
        )
    })?;
    let content = read_file(path)?;
    format.parse(&content, what)
}
