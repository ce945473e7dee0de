//! Platform-specific directory utilities

use anyhow::Result;
use std::path::PathBuf;

/// Get the platform-specific content directory for the planner
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/planner`
/// - Linux: `~/.local/share/planner` (or `$XDG_DATA_HOME/planner`)
/// - Windows: `%APPDATA%\planner`
/// - Fallback: `./data`
pub fn data_dir() -> Result<PathBuf> {
    let dir = directories::ProjectDirs::from("", "", "planner")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"));

    Ok(dir)
}
