//! CLI configuration from the environment.
use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;
use planner_content::{ConfigLoader, ContentFactory};
use planner_core::PlannerConfig;

/// Settings read from the environment (and `.env`), overridden by flags.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Directory holding `characters.*`, `items.*` and optional TOML overrides.
    pub data_dir: Option<PathBuf>,
    /// Planner config file used instead of `<data_dir>/config.toml`.
    pub config_path: Option<PathBuf>,
    /// Forces point budget enforcement on or off.
    pub enforce_point_budget: Option<bool>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PLANNER_DATA_DIR` - content directory (default: platform data dir)
    /// - `PLANNER_CONFIG` - planner config TOML
    /// - `PLANNER_ENFORCE_POINT_BUDGET` - `true`/`false`
    pub fn from_env() -> Self {
        Self {
            data_dir: read_env::<PathBuf>("PLANNER_DATA_DIR"),
            config_path: read_env::<PathBuf>("PLANNER_CONFIG"),
            enforce_point_budget: read_env_bool("PLANNER_ENFORCE_POINT_BUDGET"),
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, config_path: Option<PathBuf>) -> Self {
        if data_dir.is_some() {
            self.data_dir = data_dir;
        }
        if config_path.is_some() {
            self.config_path = config_path;
        }
        self
    }

    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => crate::dirs::data_dir(),
        }
    }

    pub fn factory(&self) -> Result<ContentFactory> {
        let data_dir = self.resolve_data_dir()?;
        tracing::debug!(data_dir = %data_dir.display(), "using content directory");
        Ok(ContentFactory::new(data_dir))
    }

    /// Planner config: explicit file if set, else the data directory's files.
    pub fn planner_config(&self, factory: &ContentFactory) -> Result<PlannerConfig> {
        let mut config = match &self.config_path {
            Some(path) => load_explicit(path)?,
            None => factory.load_config()?,
        };
        if let Some(enforce) = self.enforce_point_budget {
            config.enforce_point_budget = enforce;
        }
        Ok(config)
    }
}

fn load_explicit(path: &Path) -> Result<PlannerConfig> {
    if !path.is_file() {
        anyhow::bail!("Config file not found: {}", path.display());
    }
    ConfigLoader::load(path)
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_environment() {
        let config = CliConfig {
            data_dir: Some(PathBuf::from("/env/data")),
            config_path: Some(PathBuf::from("/env/config.toml")),
            enforce_point_budget: None,
        }
        .with_overrides(Some(PathBuf::from("/flag/data")), None);

        assert_eq!(config.data_dir, Some(PathBuf::from("/flag/data")));
        assert_eq!(config.config_path, Some(PathBuf::from("/env/config.toml")));
        assert_eq!(config.resolve_data_dir().unwrap(), PathBuf::from("/flag/data"));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let config = CliConfig {
            config_path: Some(PathBuf::from("/nonexistent/planner.toml")),
            ..CliConfig::default()
        };
        let factory = ContentFactory::new("/nonexistent");
        assert!(config.planner_config(&factory).is_err());
    }

    #[test]
    fn budget_flag_applies_over_defaults() {
        let config = CliConfig {
            enforce_point_budget: Some(true),
            ..CliConfig::default()
        };
        let factory = ContentFactory::new("/nonexistent");
        assert!(config.planner_config(&factory).unwrap().enforce_point_budget);
    }
}
