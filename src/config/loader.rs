//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading schedule rule
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::ScheduleConfig;

/// Name of the rules file inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "schedule.yaml";

/// Loads and provides access to schedule configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── schedule.yaml   # Night, early-morning and maintenance windows, minimum durations
/// ```
///
/// # Example
///
/// ```no_run
/// use schedule_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Night window: {}", loader.config().night_window);
/// # Ok::<(), schedule_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ScheduleConfig,
}

impl ConfigLoader {
    /// Loads configuration from `<path>/schedule.yaml`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or malformed times
    /// - The rules are unusable (no maintenance windows, zero minimum shift)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let file = path.as_ref().join(CONFIG_FILE_NAME);
        let path_str = file.display().to_string();

        let content = fs::read_to_string(&file).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: ScheduleConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        Self::check(&config, &path_str)?;
        info!(path = %path_str, "Loaded schedule configuration");

        Ok(Self { config })
    }

    /// A loader holding the built-in defaults.
    pub fn defaults() -> Self {
        Self {
            config: ScheduleConfig::default(),
        }
    }

    fn check(config: &ScheduleConfig, path: &str) -> EngineResult<()> {
        let reject = |message: &str| EngineError::ConfigParseError {
            path: path.to_string(),
            message: message.to_string(),
        };

        if config.maintenance.windows.is_empty() {
            return Err(reject("maintenance.windows must not be empty"));
        }
        if config.min_shift_minutes == 0 {
            return Err(reject("min_shift_minutes must be greater than zero"));
        }
        Ok(())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ScheduleConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_config(dir: &Path, content: &str) {
        fs::write(dir.join(CONFIG_FILE_NAME), content).unwrap();
    }

    #[test]
    fn test_load_shipped_config() {
        let loader = ConfigLoader::load("./config").expect("Failed to load config");
        assert_eq!(loader.config(), &ScheduleConfig::default());
    }

    #[test]
    fn test_load_overrides() {
        let dir = tempdir().unwrap();
        write_config(
            dir.path(),
            "min_split_total_minutes: 240\nmaintenance:\n  min_duration_minutes: 300\n",
        );

        let config = ConfigLoader::load(dir.path()).unwrap().into_config();
        assert_eq!(config.min_split_total_minutes, 240);
        assert_eq!(config.maintenance.min_duration_minutes, 300);
        assert_eq!(config.maintenance.windows.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigNotFound { path }) => assert!(path.ends_with(CONFIG_FILE_NAME)),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = tempdir().unwrap();
        write_config(dir.path(), "min_shift_minutes: [not a number\n");
        assert!(matches!(
            ConfigLoader::load(dir.path()),
            Err(EngineError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_empty_maintenance_windows_rejected() {
        let dir = tempdir().unwrap();
        write_config(dir.path(), "maintenance:\n  windows: []\n");
        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("maintenance.windows"))
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_zero_minimum_rejected() {
        let dir = tempdir().unwrap();
        write_config(dir.path(), "min_shift_minutes: 0\n");
        assert!(matches!(
            ConfigLoader::load(dir.path()),
            Err(EngineError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_defaults_loader() {
        assert_eq!(ConfigLoader::defaults().config(), &ScheduleConfig::default());
    }
}
