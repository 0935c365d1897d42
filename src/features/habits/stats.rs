//! Habit statistics: streaks and completion rates.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::habit::{Habit, HabitEntry};
use crate::error::HabitflowError;

/// Streak information for one habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakInfo {
    /// Consecutive completed days ending today, or yesterday if today is not done yet
    pub current: usize,
    /// Longest run of consecutive completed days
    pub longest: usize,
    pub last_completion: Option<NaiveDate>,
}

impl StreakInfo {
    /// Calculate streaks from completed days.
    #[must_use]
    pub fn calculate(completed: &[NaiveDate], today: NaiveDate) -> Self {
        let mut dates = completed.to_vec();
        dates.sort_unstable();
        dates.dedup();

        let last_completion = dates.last().copied();

        let mut check = if dates.binary_search(&today).is_ok() {
            today
        } else {
            today - Duration::days(1)
        };
        let mut current = 0;
        while dates.binary_search(&check).is_ok() {
            current += 1;
            check -= Duration::days(1);
        }

        let mut longest = 0;
        let mut run = 0;
        let mut prev: Option<NaiveDate> = None;
        for date in &dates {
            run = match prev {
                Some(p) if *date - p == Duration::days(1) => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            prev = Some(*date);
        }

        Self {
            current,
            longest,
            last_completion,
        }
    }
}

/// Statistics for one habit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitStats {
    pub habit: Habit,
    pub streak: StreakInfo,
    pub done_today: bool,
    /// Length of the trailing window, ending today
    pub window_days: u32,
    /// Completed days inside the window
    pub completed_in_window: usize,
    /// Percentage of window days completed (0-100)
    pub completion_rate: f64,
}

impl HabitStats {
    /// Compute stats for a habit from its entries.
    ///
    /// # Errors
    ///
    /// Returns `HabitflowError::InvalidInput` if the window reaches past the
    /// earliest representable date.
    pub fn compute(
        habit: Habit,
        entries: &[HabitEntry],
        today: NaiveDate,
        window_days: u32,
    ) -> Result<Self, HabitflowError> {
        let completed: Vec<NaiveDate> = entries
            .iter()
            .filter(|e| e.completed && e.habit_id == habit.id)
            .map(|e| e.date)
            .collect();

        let window_days = window_days.max(1);
        let start = window_start(today, window_days)?;
        let completed_in_window = completed
            .iter()
            .filter(|d| **d >= start && **d <= today)
            .count();

        #[allow(clippy::cast_precision_loss)]
        let completion_rate = completed_in_window as f64 / f64::from(window_days) * 100.0;

        Ok(Self {
            done_today: completed.contains(&today),
            streak: StreakInfo::calculate(&completed, today),
            habit,
            window_days,
            completed_in_window,
            completion_rate,
        })
    }
}

/// First day of a trailing window of `days` days ending on `today`.
///
/// # Errors
///
/// Returns `HabitflowError::InvalidInput` if the start date would underflow.
pub fn window_start(today: NaiveDate, days: u32) -> Result<NaiveDate, HabitflowError> {
    let back = Duration::days(i64::from(days.max(1)) - 1);
    today.checked_sub_signed(back).ok_or_else(|| {
        HabitflowError::InvalidInput(format!("a {days}-day window ending {today} is out of range"))
    })
}

/// Statistics across all habits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitSummary {
    pub date: NaiveDate,
    pub total_habits: usize,
    pub done_today: usize,
    pub habits: Vec<HabitStats>,
}

impl HabitSummary {
    #[must_use]
    pub fn new(date: NaiveDate, habits: Vec<HabitStats>) -> Self {
        Self {
            date,
            total_habits: habits.len(),
            done_today: habits.iter().filter(|h| h.done_today).count(),
            habits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn habit(id: i64) -> Habit {
        let t = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        Habit {
            id,
            name: format!("habit {id}"),
            description: None,
            color: "#3b82f6".to_string(),
            created_at: t,
            updated_at: t,
        }
    }

    fn entry(habit_id: i64, d: u32, completed: bool) -> HabitEntry {
        HabitEntry {
            habit_id,
            date: day(d),
            completed,
            created_at: Utc.with_ymd_and_hms(2024, 5, d, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_streak_empty() {
        let streak = StreakInfo::calculate(&[], day(10));
        assert_eq!(streak.current, 0);
        assert_eq!(streak.longest, 0);
        assert_eq!(streak.last_completion, None);
    }

    #[test]
    fn test_streak_ending_today() {
        let streak = StreakInfo::calculate(&[day(8), day(9), day(10)], day(10));
        assert_eq!(streak.current, 3);
        assert_eq!(streak.longest, 3);
    }

    #[test]
    fn test_streak_counts_from_yesterday() {
        let streak = StreakInfo::calculate(&[day(8), day(9)], day(10));
        assert_eq!(streak.current, 2);
    }

    #[test]
    fn test_streak_broken() {
        let dates = [day(1), day(2), day(3), day(4), day(7)];
        let streak = StreakInfo::calculate(&dates, day(10));
        assert_eq!(streak.current, 0);
        assert_eq!(streak.longest, 4);
        assert_eq!(streak.last_completion, Some(day(7)));
    }

    #[test]
    fn test_stats_ignore_uncompleted_entries() {
        let entries = [
            entry(1, 8, true),
            entry(1, 9, false),
            entry(1, 10, true),
            entry(2, 9, true),
        ];
        let stats = HabitStats::compute(habit(1), &entries, day(10), 7).unwrap();

        assert!(stats.done_today);
        assert_eq!(stats.streak.current, 1);
        assert_eq!(stats.completed_in_window, 2);
        assert!((stats.completion_rate - 200.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_stats_window_excludes_old_days() {
        let entries = [entry(1, 1, true), entry(1, 9, true)];
        let stats = HabitStats::compute(habit(1), &entries, day(10), 7).unwrap();
        assert_eq!(stats.completed_in_window, 1);
        assert!(!stats.done_today);
    }

    #[test]
    fn test_summary_counts_done_today() {
        let entries = [entry(1, 10, true), entry(2, 9, true)];
        let summary = HabitSummary::new(
            day(10),
            vec![
                HabitStats::compute(habit(1), &entries, day(10), 30).unwrap(),
                HabitStats::compute(habit(2), &entries, day(10), 30).unwrap(),
            ],
        );
        assert_eq!(summary.total_habits, 2);
        assert_eq!(summary.done_today, 1);
    }

    #[test]
    fn test_window_start() {
        assert_eq!(window_start(day(10), 7).unwrap(), day(4));
        assert_eq!(window_start(day(10), 1).unwrap(), day(10));
        assert_eq!(window_start(day(10), 0).unwrap(), day(10));
    }

    #[test]
    fn test_stats_reject_huge_window() {
        let err = HabitStats::compute(habit(1), &[], day(10), u32::MAX).unwrap_err();
        assert!(matches!(err, HabitflowError::InvalidInput(_)));
        assert!(window_start(day(10), u32::MAX).is_err());
    }
}
