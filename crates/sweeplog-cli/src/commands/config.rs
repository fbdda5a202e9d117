//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
///
/// `rooms` and `log` are the global `--rooms` and `--log` values.
pub fn execute_config(
    args: ConfigArgs,
    config: &mut Config,
    config_path: &Path,
    rooms: Option<&Path>,
    log: Option<&Path>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(config, config_path, formatter),
        ConfigAction::SetData => set_data(config, config_path, rooms, log, formatter),
        ConfigAction::Reset => reset_config(config, config_path, formatter),
    }
}

/// Show the active configuration.
fn show_config(config: &Config, config_path: &Path, formatter: &Formatter) -> Result<()> {
    println!("Configuration: {}", formatter.success(&config_path.display().to_string()));
    let contents = toml::to_string_pretty(config)
        .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
    print!("{}", contents);
    Ok(())
}

/// Remember the input files for later runs.
fn set_data(
    config: &mut Config,
    config_path: &Path,
    rooms: Option<&Path>,
    log: Option<&Path>,
    formatter: &Formatter,
) -> Result<()> {
    if rooms.is_none() && log.is_none() {
        return Err(CliError::InvalidInput(
            "Pass --rooms and/or --log to remember".to_string(),
        ));
    }

    if let Some(rooms) = rooms {
        config.data.rooms_file = Some(rooms.to_path_buf());
    }
    if let Some(log) = log {
        config.data.log_file = Some(log.to_path_buf());
    }
    config.save_to(config_path)?;

    println!("{}", formatter.success("Saved input files"));
    Ok(())
}

/// Restore the default configuration.
fn reset_config(config: &mut Config, config_path: &Path, formatter: &Formatter) -> Result<()> {
    *config = Config::default();
    config.save_to(config_path)?;
    println!("{}", formatter.success("Configuration reset to defaults"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn formatter() -> Formatter {
        Formatter::new(OutputFormat::Text, false)
    }

    #[test]
    fn test_set_data_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();

        execute_config(
            ConfigArgs { action: ConfigAction::SetData },
            &mut config,
            &path,
            Some(Path::new("rooms.csv")),
            None,
            &formatter(),
        )
        .unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.data.rooms_file, Some(PathBuf::from("rooms.csv")));
        assert_eq!(loaded.data.log_file, None);
    }

    #[test]
    fn test_set_data_requires_a_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();

        let result = execute_config(
            ConfigArgs { action: ConfigAction::SetData },
            &mut config,
            &path,
            None,
            None,
            &formatter(),
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_reset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.data.log_file = Some(PathBuf::from("log.csv"));
        config.report.bag_capacity_sq_ft = 100;

        execute_config(
            ConfigArgs { action: ConfigAction::Reset },
            &mut config,
            &path,
            None,
            None,
            &formatter(),
        )
        .unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}
