//! Monthly focus metrics.
//!
//! Aggregates finalized sessions from the calendar month containing a
//! reference date. Days are bucketed by the UTC date a session started.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::session::Session;
use crate::error::HabitflowError;

/// Totals for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMetric {
    /// Date (`YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Total focus minutes
    pub total_duration: i64,
    /// Session count
    pub sessions_count: i64,
    /// Longest session in minutes
    pub longest_session: i64,
    /// Shortest session in minutes
    pub shortest_session: i64,
}

/// Totals for the whole month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyMetric {
    /// Total focus minutes in the month
    pub total_month_duration: i64,
    /// Number of finalized sessions
    pub total_sessions: i64,
    /// Mean session length in minutes, 0 without sessions
    pub average_session_duration: f64,
}

/// Metrics for the month around a reference date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusMetrics {
    /// First day of the covered month
    pub month: NaiveDate,
    /// Per-day totals, oldest first, only days with sessions
    pub daily_metrics: Vec<DailyMetric>,
    /// Month totals
    pub monthly_metrics: MonthlyMetric,
}

impl FocusMetrics {
    /// Aggregate `sessions` falling in the month of `reference_date`.
    ///
    /// Open sessions and sessions outside the month are ignored.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_sessions(sessions: &[Session], reference_date: NaiveDate) -> Self {
        let month = first_of_month(reference_date);

        let mut by_day: BTreeMap<NaiveDate, Vec<i64>> = BTreeMap::new();
        for session in sessions {
            let Some(minutes) = session.duration_minutes else {
                continue;
            };
            let date = session.started_at.date_naive();
            if first_of_month(date) != month {
                continue;
            }
            by_day.entry(date).or_default().push(minutes);
        }

        let daily_metrics: Vec<DailyMetric> = by_day
            .into_iter()
            .map(|(date, minutes)| DailyMetric {
                date,
                total_duration: minutes.iter().sum(),
                sessions_count: minutes.len() as i64,
                longest_session: minutes.iter().copied().max().unwrap_or(0),
                shortest_session: minutes.iter().copied().min().unwrap_or(0),
            })
            .collect();

        let total_month_duration: i64 = daily_metrics.iter().map(|d| d.total_duration).sum();
        let total_sessions: i64 = daily_metrics.iter().map(|d| d.sessions_count).sum();
        let average_session_duration = if total_sessions > 0 {
            total_month_duration as f64 / total_sessions as f64
        } else {
            0.0
        };

        Self {
            month,
            daily_metrics,
            monthly_metrics: MonthlyMetric {
                total_month_duration,
                total_sessions,
                average_session_duration,
            },
        }
    }
}

/// First day of the month containing `date`.
#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// UTC bounds `[start, end)` of the month containing `date`.
///
/// # Errors
///
/// Returns `HabitflowError::InvalidInput` if the month lies outside chrono's range.
pub fn month_bounds(date: NaiveDate) -> Result<(DateTime<Utc>, DateTime<Utc>), HabitflowError> {
    let start = first_of_month(date);
    let next = if start.month() == 12 {
        NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)
    };
    let next = next
        .ok_or_else(|| HabitflowError::InvalidInput(format!("Date out of range: {date}")))?;

    Ok((
        start.and_time(chrono::NaiveTime::MIN).and_utc(),
        next.and_time(chrono::NaiveTime::MIN).and_utc(),
    ))
}
