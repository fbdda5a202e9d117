//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use sweeplog_engine::ReportConfig;

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Input files
    #[serde(default)]
    pub data: DataConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Report settings
    #[serde(default)]
    pub report: ReportConfig,
}

/// Default input files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Room file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rooms_file: Option<PathBuf>,

    /// Cleaning log file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Command history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Canonical report text
    Text,
    /// JSON format
    Json,
    /// Table format
    Table,
}

/// Resolved pair of input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    /// Room file
    pub rooms: PathBuf,
    /// Cleaning log file
    pub log: PathBuf,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".sweeplog").join("config.toml"))
    }

    /// Load configuration from `path`, or the defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config
            .report
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))?;
        Ok(config)
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Pick the input files, preferring command-line values over configured ones.
    pub fn resolve_data(&self, rooms: Option<&Path>, log: Option<&Path>) -> Result<DataPaths> {
        let rooms = rooms
            .map(Path::to_path_buf)
            .or_else(|| self.data.rooms_file.clone())
            .ok_or(CliError::MissingData("room file", "rooms"))?;
        let log = log
            .map(Path::to_path_buf)
            .or_else(|| self.data.log_file.clone())
            .ok_or(CliError::MissingData("cleaning log file", "log"))?;
        Ok(DataPaths { rooms, log })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
            history_size: 1000,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

fn default_history_size() -> usize {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Text);
        assert_eq!(config.report.bag_capacity_sq_ft, 5280);
        assert!(config.data.rooms_file.is_none());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.data.rooms_file = Some(PathBuf::from("input/rooms.csv"));
        config.settings.format = OutputFormat::Json;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\ncolor = false\n\n[report]\nbag_capacity_sq_ft = 4000\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.settings.color);
        assert_eq!(config.settings.history_size, 1000);
        assert_eq!(config.report.bag_capacity_sq_ft, 4000);
    }

    #[test]
    fn test_invalid_capacity_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[report]\nbag_capacity_sq_ft = 0\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(CliError::Config(_))));
    }

    #[test]
    fn test_resolve_data_prefers_flags() {
        let mut config = Config::default();
        config.data.rooms_file = Some(PathBuf::from("config-rooms.csv"));
        config.data.log_file = Some(PathBuf::from("config-log.csv"));

        let paths = config
            .resolve_data(Some(Path::new("flag-rooms.csv")), None)
            .unwrap();
        assert_eq!(paths.rooms, PathBuf::from("flag-rooms.csv"));
        assert_eq!(paths.log, PathBuf::from("config-log.csv"));
    }

    #[test]
    fn test_resolve_data_missing() {
        let config = Config::default();
        let err = config.resolve_data(None, Some(Path::new("log.csv"))).unwrap_err();
        assert!(matches!(err, CliError::MissingData("room file", "rooms")));
    }
}
