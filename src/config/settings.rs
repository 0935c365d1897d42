//! Configuration settings for habitflow.
//!
//! Settings are loaded from `~/.habitflow/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::HabitflowError;
use crate::features::habits::validate_color;

/// Shortest focus or break phase, in minutes.
pub const MIN_PHASE_MINUTES: u32 = 1;
/// Longest focus or break phase, in minutes.
pub const MAX_PHASE_MINUTES: u32 = 60;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Focus timer settings.
    pub focus: FocusConfig,
    /// Habit tracking settings.
    pub habits: HabitsConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to the global `colored` override.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Focus timer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    /// Focus phase length in minutes.
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
    /// Break phase length in minutes.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
    /// Ring the terminal bell when a phase ends.
    #[serde(default = "default_true")]
    pub bell: bool,
}

/// Habit tracking settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HabitsConfig {
    /// Color given to new habits when none is specified.
    #[serde(default = "default_habit_color")]
    pub default_color: String,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_focus_minutes() -> u32 {
    10
}

const fn default_break_minutes() -> u32 {
    5
}

const fn default_true() -> bool {
    true
}

fn default_habit_color() -> String {
    "#3b82f6".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            break_minutes: default_break_minutes(),
            bell: default_true(),
        }
    }
}

impl Default for HabitsConfig {
    fn default() -> Self {
        Self {
            default_color: default_habit_color(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, HabitflowError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or
    /// holds out-of-range values.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, HabitflowError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            HabitflowError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            HabitflowError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), HabitflowError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), HabitflowError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| HabitflowError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            HabitflowError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Check every value against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns `HabitflowError::Config` naming the first offending key.
    pub fn validate(&self) -> Result<(), HabitflowError> {
        check_phase_minutes("focus.focus_minutes", self.focus.focus_minutes)?;
        check_phase_minutes("focus.break_minutes", self.focus.break_minutes)?;
        validate_color(&self.habits.default_color)
            .map_err(|e| HabitflowError::Config(format!("habits.default_color: {e}")))?;
        Ok(())
    }

    /// Set a single value by its dotted key, e.g. `focus.focus_minutes`.
    ///
    /// # Errors
    ///
    /// Returns `HabitflowError::Config` for unknown keys or invalid values.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), HabitflowError> {
        let value = value.trim();
        match key {
            "general.default_output" => {
                self.general.default_output = match value.to_lowercase().as_str() {
                    "pretty" => OutputFormat::Pretty,
                    "json" => OutputFormat::Json,
                    other => return Err(invalid_value(key, other)),
                };
            }
            "general.color" => {
                self.general.color = match value.to_lowercase().as_str() {
                    "auto" => ColorSetting::Auto,
                    "always" => ColorSetting::Always,
                    "never" => ColorSetting::Never,
                    other => return Err(invalid_value(key, other)),
                };
            }
            "focus.focus_minutes" => self.focus.focus_minutes = parse_minutes(key, value)?,
            "focus.break_minutes" => self.focus.break_minutes = parse_minutes(key, value)?,
            "focus.bell" => {
                self.focus.bell = value.parse().map_err(|_| invalid_value(key, value))?;
            }
            "habits.default_color" => {
                self.habits.default_color =
                    validate_color(value).map_err(|_| invalid_value(key, value))?;
            }
            _ => {
                return Err(HabitflowError::Config(format!("Unknown config key: {key}")));
            }
        }
        Ok(())
    }
}

fn parse_minutes(key: &str, value: &str) -> Result<u32, HabitflowError> {
    let minutes: u32 = value.parse().map_err(|_| invalid_value(key, value))?;
    check_phase_minutes(key, minutes)?;
    Ok(minutes)
}

fn check_phase_minutes(key: &str, minutes: u32) -> Result<(), HabitflowError> {
    if (MIN_PHASE_MINUTES..=MAX_PHASE_MINUTES).contains(&minutes) {
        Ok(())
    } else {
        Err(HabitflowError::Config(format!(
            "{key} must be between {MIN_PHASE_MINUTES} and {MAX_PHASE_MINUTES}, got {minutes}"
        )))
    }
}

fn invalid_value(key: &str, value: &str) -> HabitflowError {
    HabitflowError::Config(format!("Invalid value for {key}: {value}"))
}
