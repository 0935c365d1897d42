//! Daily habit tracking.
//!
//! Habits are marked done at most once per day; stats report streaks and
//! completion rates over a trailing window.

pub mod habit;
pub mod stats;
pub mod storage;

pub use habit::{
    validate_color, validate_name, Habit, HabitEntry, HabitId, HabitPatch, DEFAULT_HABIT_COLOR,
};
pub use stats::{window_start, HabitStats, HabitSummary, StreakInfo};
pub use storage::HabitStorage;
