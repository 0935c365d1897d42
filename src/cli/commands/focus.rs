//! Focus command implementation.
//!
//! Runs the interactive timer and reports on recorded sessions.

use chrono::{NaiveDate, Utc};
use colored::Colorize;

use crate::cli::args::{FocusCommands, OutputFormat};
use crate::config::Config;
use crate::error::HabitflowError;
use crate::features::focus::{
    format_minutes, FocusController, FocusMetrics, FocusStorage, SessionRecorder, TimerSettings,
};
use crate::output::{separator, to_json};
use crate::tui::{self, RunSummary};

/// Execute focus subcommands.
///
/// # Errors
///
/// Returns an error if storage cannot be opened, a query fails, or the
/// terminal cannot be driven.
pub fn focus(
    cmd: FocusCommands,
    config: &Config,
    format: OutputFormat,
) -> Result<String, HabitflowError> {
    match cmd {
        FocusCommands::Run {
            focus_minutes,
            break_minutes,
        } => {
            let settings = TimerSettings::new(
                focus_minutes.unwrap_or(config.focus.focus_minutes),
                break_minutes.unwrap_or(config.focus.break_minutes),
            )?;
            let storage = FocusStorage::new()?;
            let controller = FocusController::with_system_clock(settings, Box::new(storage));
            let summary = tui::run(controller, config.focus.bell)?;
            format_run_summary(&summary, format)
        }
        FocusCommands::History { limit } => show_history(&FocusStorage::new()?, limit, format),
        FocusCommands::Metrics { date } => {
            let date = date.unwrap_or_else(|| Utc::now().date_naive());
            show_metrics(&FocusStorage::new()?, date, format)
        }
    }
}

fn format_run_summary(summary: &RunSummary, format: OutputFormat) -> Result<String, HabitflowError> {
    match format {
        OutputFormat::Json => to_json(summary),
        OutputFormat::Pretty => {
            if summary.sessions.is_empty() && summary.unrecorded == 0 {
                return Ok("No focus sessions this run.".dimmed().to_string());
            }

            let minutes: i64 = summary
                .sessions
                .iter()
                .filter_map(|s| s.duration_minutes)
                .sum();
            let mut output = vec![format!(
                "✅ Recorded {} session{} ({})",
                summary.sessions.len(),
                if summary.sessions.len() == 1 { "" } else { "s" },
                format_minutes(minutes)
            )
            .green()
            .to_string()];

            if summary.unrecorded > 0 {
                output.push(
                    format!(
                        "⚠ {} session{} could not be saved",
                        summary.unrecorded,
                        if summary.unrecorded == 1 { "" } else { "s" }
                    )
                    .yellow()
                    .to_string(),
                );
            }
            Ok(output.join("\n"))
        }
    }
}

/// Show the most recent sessions.
fn show_history(
    storage: &FocusStorage,
    limit: usize,
    format: OutputFormat,
) -> Result<String, HabitflowError> {
    let sessions = storage.get_recent(limit)?;

    match format {
        OutputFormat::Json => to_json(&sessions),
        OutputFormat::Pretty => {
            if sessions.is_empty() {
                return Ok(
                    "No focus sessions found.\n\nStart one with: habitflow focus run".to_string(),
                );
            }

            let mut output = Vec::new();
            output.push("📋 Focus Session History".bold().to_string());
            output.push("═".repeat(44));
            output.push(format!(
                "{:<12} {:<7} {:<7} {:>8}",
                "Date", "Start", "End", "Minutes"
            ));
            output.push(separator(44));

            for session in &sessions {
                let start = session.started_at_local();
                let end = session
                    .ended_at_local()
                    .map_or_else(|| "…".to_string(), |t| t.format("%H:%M").to_string());
                let minutes = session
                    .duration_minutes
                    .map_or_else(|| "open".yellow().to_string(), |m| m.to_string());

                output.push(format!(
                    "{:<12} {:<7} {:<7} {:>8}",
                    start.format("%Y-%m-%d"),
                    start.format("%H:%M"),
                    end,
                    minutes
                ));
            }

            Ok(output.join("\n"))
        }
    }
}

/// Show daily and monthly totals for the month containing `date`.
fn show_metrics(
    recorder: &dyn SessionRecorder,
    date: NaiveDate,
    format: OutputFormat,
) -> Result<String, HabitflowError> {
    let metrics = recorder.get_metrics(date)?;

    match format {
        OutputFormat::Json => to_json(&metrics),
        OutputFormat::Pretty => Ok(format_metrics_pretty(&metrics)),
    }
}

fn format_metrics_pretty(metrics: &FocusMetrics) -> String {
    let monthly = &metrics.monthly_metrics;
    let mut output = Vec::new();

    output.push(
        format!("📊 Focus Metrics: {}", metrics.month.format("%B %Y"))
            .bold()
            .to_string(),
    );
    output.push("═".repeat(52));
    output.push(format!(
        "Total:    {}",
        format_minutes(monthly.total_month_duration).cyan()
    ));
    output.push(format!("Sessions: {}", monthly.total_sessions));
    output.push(format!(
        "Average:  {:.1} minutes",
        monthly.average_session_duration
    ));

    if metrics.daily_metrics.is_empty() {
        output.push(String::new());
        output.push("No finished sessions this month.".dimmed().to_string());
        return output.join("\n");
    }

    output.push(String::new());
    output.push(format!(
        "{:<12} {:>8} {:>8} {:>8} {:>8}",
        "Date", "Total", "Count", "Longest", "Shortest"
    ));
    output.push(separator(52));
    for day in &metrics.daily_metrics {
        output.push(format!(
            "{:<12} {:>8} {:>8} {:>8} {:>8}",
            day.date.format("%Y-%m-%d"),
            day.total_duration,
            day.sessions_count,
            day.longest_session,
            day.shortest_session
        ));
    }

    output.join("\n")
}
