//! Output helpers shared by the commands.

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::error::HabitflowError;

/// Serialize any value as pretty JSON.
///
/// # Errors
///
/// Returns `HabitflowError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, HabitflowError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// A `●` dot in a habit's `#rrggbb` color. Falls back to plain text.
#[must_use]
pub fn color_swatch(hex: &str) -> ColoredString {
    match parse_hex(hex) {
        Some((r, g, b)) => "●".truecolor(r, g, b),
        None => "●".normal(),
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// A horizontal rule for pretty output.
#[must_use]
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
