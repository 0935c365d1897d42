//! Path resolution for habitflow configuration and data files.
//!
//! All habitflow data is stored in `~/.habitflow/` unless `HABITFLOW_HOME`
//! points somewhere else:
//! - `config.yaml` - Main configuration file
//! - `habitflow.db` - SQLite database for habits and focus sessions
//! - `habitflow.log` - Log output while the interactive timer owns the terminal

use std::path::PathBuf;

use crate::error::HabitflowError;

/// Environment variable that overrides the data root.
pub const HOME_ENV: &str = "HABITFLOW_HOME";

/// Paths to habitflow configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.habitflow/`
    pub root: PathBuf,
    /// Config file: `~/.habitflow/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.habitflow/habitflow.db`
    pub database: PathBuf,
    /// Log file: `~/.habitflow/habitflow.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Resolve paths from `HABITFLOW_HOME`, falling back to the home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if neither `HABITFLOW_HOME` nor `HOME` is set.
    pub fn new() -> Result<Self, HabitflowError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME").map_err(|_| {
            HabitflowError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".habitflow")))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("habitflow.db"),
            log_file: root.join("habitflow.log"),
            root,
        }
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), HabitflowError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                HabitflowError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-habitflow");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.database, root.join("habitflow.db"));
        assert_eq!(paths.log_file, root.join("habitflow.log"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join("root"));

        paths.ensure_dirs().unwrap();
        assert!(paths.root.exists());

        // second call is a no-op
        paths.ensure_dirs().unwrap();
    }
}
