//! Config command implementation.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::HabitflowError;
use crate::output::to_json;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or written, or a
/// key or value is invalid.
pub fn config(cmd: ConfigCommands, format: OutputFormat) -> Result<String, HabitflowError> {
    run(&Paths::new()?, cmd, format)
}

fn run(paths: &Paths, cmd: ConfigCommands, format: OutputFormat) -> Result<String, HabitflowError> {
    match cmd {
        ConfigCommands::Show => {
            let config = Config::load_from_path(&paths.config_file)?;
            match format {
                OutputFormat::Json => to_json(&config),
                OutputFormat::Pretty => serde_yaml::to_string(&config)
                    .map(|yaml| yaml.trim_end().to_string())
                    .map_err(|e| HabitflowError::Config(format!("Failed to serialize config: {e}"))),
            }
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load_from_path(&paths.config_file)?;
            config.set(&key, &value)?;
            paths.ensure_dirs()?;
            config.save_to_path(&paths.config_file)?;
            tracing::info!(%key, %value, "config updated");

            match format {
                OutputFormat::Json => to_json(&config),
                OutputFormat::Pretty => Ok(format!("{} {key} = {value}", "✓".green())),
            }
        }
        ConfigCommands::Path => match format {
            OutputFormat::Json => to_json(&serde_json::json!({
                "config_file": paths.config_file,
                "database": paths.database,
                "log_file": paths.log_file,
            })),
            OutputFormat::Pretty => Ok(paths.config_file.display().to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_paths() -> (TempDir, Paths) {
        let dir = TempDir::new().unwrap();
        let paths = Paths::with_root(dir.path().join("habitflow"));
        (dir, paths)
    }

    #[test]
    fn test_show_defaults_without_file() {
        let (_dir, paths) = temp_paths();
        let out = run(&paths, ConfigCommands::Show, OutputFormat::Pretty).unwrap();
        assert!(out.contains("focus_minutes: 10"));
        assert!(!paths.config_file.exists());
    }

    #[test]
    fn test_set_persists() {
        let (_dir, paths) = temp_paths();
        run(
            &paths,
            ConfigCommands::Set {
                key: "focus.focus_minutes".to_string(),
                value: "25".to_string(),
            },
            OutputFormat::Pretty,
        )
        .unwrap();

        let config = Config::load_from_path(&paths.config_file).unwrap();
        assert_eq!(config.focus.focus_minutes, 25);
    }

    #[test]
    fn test_set_rejects_out_of_range() {
        let (_dir, paths) = temp_paths();
        let result = run(
            &paths,
            ConfigCommands::Set {
                key: "focus.break_minutes".to_string(),
                value: "90".to_string(),
            },
            OutputFormat::Pretty,
        );
        assert!(matches!(result, Err(HabitflowError::Config(_))));
        assert!(!paths.config_file.exists());
    }

    #[test]
    fn test_path() {
        let (_dir, paths) = temp_paths();
        let out = run(&paths, ConfigCommands::Path, OutputFormat::Pretty).unwrap();
        assert!(out.ends_with("config.yaml"));
    }
}
