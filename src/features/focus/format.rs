//! Display helpers for countdowns and session lengths.

use chrono::Duration;

/// Format a duration as `MM:SS`. Minutes are not wrapped into hours.
#[must_use]
pub fn format_duration_mmss(d: Duration) -> String {
    let total = d.num_seconds().max(0);
    format!("{:02}:{:02}", total / 60, total % 60)
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Format a whole number of minutes as e.g. `1 hour, 30 minutes`.
#[must_use]
pub fn format_minutes(total_minutes: i64) -> String {
    let total_minutes = total_minutes.max(0);
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    match (hours, minutes) {
        (0, m) => plural(m, "minute"),
        (h, 0) => plural(h, "hour"),
        (h, m) => format!("{}, {}", plural(h, "hour"), plural(m, "minute")),
    }
}

/// Render a text progress bar, `progress` clamped to `0.0..=1.0`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_mmss() {
        assert_eq!(format_duration_mmss(Duration::minutes(25)), "25:00");
        assert_eq!(format_duration_mmss(Duration::seconds(90)), "01:30");
        assert_eq!(format_duration_mmss(Duration::seconds(0)), "00:00");
        assert_eq!(format_duration_mmss(Duration::minutes(60)), "60:00");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "0 minutes");
        assert_eq!(format_minutes(1), "1 minute");
        assert_eq!(format_minutes(25), "25 minutes");
        assert_eq!(format_minutes(120), "2 hours");
        assert_eq!(format_minutes(90), "1 hour, 30 minutes");
        assert_eq!(format_minutes(61), "1 hour, 1 minute");
    }

    #[test]
    fn test_render_progress_bar() {
        let bar = render_progress_bar(0.5, 10);
        assert_eq!(bar, "[█████░░░░░]");
        assert_eq!(render_progress_bar(1.5, 4), "[████]");
        assert_eq!(render_progress_bar(-1.0, 2), "[░░]");
    }
}
