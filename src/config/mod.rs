//! Configuration management for habitflow.
//!
//! This module handles loading and saving configuration from `~/.habitflow/`.

mod paths;
mod settings;

pub use paths::{Paths, HOME_ENV};
pub use settings::{
    ColorSetting, Config, FocusConfig, GeneralConfig, HabitsConfig, MAX_PHASE_MINUTES,
    MIN_PHASE_MINUTES,
};
