//! Habit and habit entry types.

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::HabitflowError;

/// Database ID of a habit.
pub type HabitId = i64;

/// Color given to habits created without one.
pub const DEFAULT_HABIT_COLOR: &str = "#3b82f6";

const MAX_NAME_LEN: usize = 100;

static COLOR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap_or_else(|e| panic!("Invalid color regex: {e}"))
});

/// A tracked daily habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `#rrggbb`
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Completion record for one habit on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitEntry {
    pub habit_id: HabitId,
    pub date: NaiveDate,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Changes to apply to a habit. `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitPatch {
    pub name: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    pub color: Option<String>,
}

impl HabitPatch {
    /// Whether the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.color.is_none()
    }
}

/// Trim and check a habit name.
///
/// # Errors
///
/// Returns `HabitflowError::InvalidInput` if the name is blank or too long.
pub fn validate_name(name: &str) -> Result<String, HabitflowError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(HabitflowError::InvalidInput(
            "Habit name cannot be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(HabitflowError::InvalidInput(format!(
            "Habit name cannot be longer than {MAX_NAME_LEN} characters"
        )));
    }
    Ok(name.to_string())
}

/// Check a `#rrggbb` color and return it lowercased.
///
/// # Errors
///
/// Returns `HabitflowError::InvalidInput` if the color is not six hex digits.
pub fn validate_color(color: &str) -> Result<String, HabitflowError> {
    let color = color.trim();
    if COLOR_PATTERN.is_match(color) {
        Ok(color.to_lowercase())
    } else {
        Err(HabitflowError::InvalidInput(format!(
            "Invalid color '{color}', expected #RRGGBB"
        )))
    }
}

/// Blank descriptions are stored as none.
#[must_use]
pub fn normalize_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(ToString::to_string)
}
