//! Habit command implementation.

use chrono::{Duration, Local, NaiveDate};
use colored::Colorize;
use serde::Serialize;

use crate::cli::args::{HabitCommands, OutputFormat};
use crate::config::Config;
use crate::error::HabitflowError;
use crate::features::habits::{
    window_start, Habit, HabitEntry, HabitPatch, HabitStats, HabitStorage, HabitSummary,
};
use crate::output::{color_swatch, separator, to_json};

/// Execute habit subcommands.
///
/// # Errors
///
/// Returns an error if the habit cannot be found, input is invalid, or a
/// storage operation fails.
pub fn habit(
    cmd: HabitCommands,
    config: &Config,
    format: OutputFormat,
) -> Result<String, HabitflowError> {
    let storage = HabitStorage::new()?;
    run(&storage, cmd, config, Local::now().date_naive(), format)
}

fn run(
    storage: &HabitStorage,
    cmd: HabitCommands,
    config: &Config,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, HabitflowError> {
    match cmd {
        HabitCommands::Add {
            name,
            description,
            color,
        } => {
            let color = color.as_deref().unwrap_or(&config.habits.default_color);
            let habit = storage.create(&name, description.as_deref(), color)?;
            match format {
                OutputFormat::Json => to_json(&habit),
                OutputFormat::Pretty => Ok(format!(
                    "{} Created habit {} {}",
                    "✓".green(),
                    color_swatch(&habit.color),
                    habit.name.bold()
                )),
            }
        }

        HabitCommands::List => list_habits(storage, format),

        HabitCommands::Edit {
            habit,
            name,
            description,
            clear_description,
            color,
        } => {
            let target = resolve_habit(storage, &habit)?;
            let patch = HabitPatch {
                name,
                description: if clear_description {
                    Some(None)
                } else {
                    description.map(Some)
                },
                color,
            };
            if patch.is_empty() {
                return Err(HabitflowError::InvalidInput(
                    "Nothing to change. Use --name, --description, --clear-description or --color"
                        .to_string(),
                ));
            }
            let updated = storage.update(target.id, &patch)?;
            match format {
                OutputFormat::Json => to_json(&updated),
                OutputFormat::Pretty => Ok(format!(
                    "{} Updated habit {} {}",
                    "✓".green(),
                    color_swatch(&updated.color),
                    updated.name.bold()
                )),
            }
        }

        HabitCommands::Rm { habit } => {
            let target = resolve_habit(storage, &habit)?;
            let deleted = storage.delete(target.id)?;
            match format {
                OutputFormat::Json => to_json(&serde_json::json!({
                    "id": target.id,
                    "deleted": deleted,
                })),
                OutputFormat::Pretty => Ok(format!("Deleted habit: {}", target.name)),
            }
        }

        HabitCommands::Done { habit, date } => {
            let target = resolve_habit(storage, &habit)?;
            let day = date.unwrap_or(today);
            let entry = storage.toggle(target.id, day)?;
            match format {
                OutputFormat::Json => to_json(&entry),
                OutputFormat::Pretty => {
                    let when = if day == today {
                        "today".to_string()
                    } else {
                        day.format("%Y-%m-%d").to_string()
                    };
                    if entry.completed {
                        Ok(format!("{} {} done {when}", "✓".green(), target.name.bold()))
                    } else {
                        Ok(format!("{} {} unchecked {when}", "○".dimmed(), target.name.bold()))
                    }
                }
            }
        }

        HabitCommands::Today => show_today(storage, today, format),

        HabitCommands::Log { habit, days } => {
            let target = resolve_habit(storage, &habit)?;
            show_log(storage, target, today, days, format)
        }

        HabitCommands::Stats { days } => show_stats(storage, today, days, format),
    }
}

/// Find a habit by numeric ID, falling back to a case-insensitive name match.
fn resolve_habit(storage: &HabitStorage, reference: &str) -> Result<Habit, HabitflowError> {
    if let Ok(id) = reference.trim().parse::<i64>() {
        if let Some(habit) = storage.get(id)? {
            return Ok(habit);
        }
    }
    storage
        .find_by_name(reference)?
        .ok_or_else(|| HabitflowError::NotFound(format!("Habit '{reference}'")))
}

fn list_habits(storage: &HabitStorage, format: OutputFormat) -> Result<String, HabitflowError> {
    let habits = storage.list()?;

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "count": habits.len(),
            "items": habits,
        })),
        OutputFormat::Pretty => {
            if habits.is_empty() {
                return Ok("Habits (0 items)\n  No habits yet. Add one with: habitflow habit add <name>"
                    .to_string());
            }

            let mut output = format!("Habits ({} items)\n", habits.len());
            output.push_str(&separator(50));
            output.push('\n');
            for habit in &habits {
                let mut line = format!(
                    "{:>4} {} {}",
                    habit.id.to_string().dimmed(),
                    color_swatch(&habit.color),
                    habit.name.bold()
                );
                if let Some(description) = &habit.description {
                    line.push_str(&format!("  {}", description.dimmed()));
                }
                output.push_str(&line);
                output.push('\n');
            }
            Ok(output)
        }
    }
}

#[derive(Serialize)]
struct TodayItem {
    #[serde(flatten)]
    habit: Habit,
    done: bool,
}

fn show_today(
    storage: &HabitStorage,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, HabitflowError> {
    let habits = storage.list()?;
    let entries = storage.entries_in_range(today, today)?;
    let is_done = |habit: &Habit| {
        entries
            .iter()
            .any(|e| e.habit_id == habit.id && e.completed)
    };

    let items: Vec<TodayItem> = habits
        .into_iter()
        .map(|habit| TodayItem {
            done: is_done(&habit),
            habit,
        })
        .collect();
    let done = items.iter().filter(|i| i.done).count();

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "date": today,
            "done": done,
            "total": items.len(),
            "items": items,
        })),
        OutputFormat::Pretty => {
            let mut output = Vec::new();
            output.push(
                format!("Today, {} ({done}/{})", today.format("%a %b %-d"), items.len())
                    .bold()
                    .to_string(),
            );
            output.push(separator(40));
            if items.is_empty() {
                output.push("  No habits yet.".dimmed().to_string());
            }
            for item in &items {
                let check = if item.done {
                    "[x]".green()
                } else {
                    "[ ]".white()
                };
                output.push(format!(
                    "{check} {} {}",
                    color_swatch(&item.habit.color),
                    item.habit.name
                ));
            }
            Ok(output.join("\n"))
        }
    }
}

fn show_log(
    storage: &HabitStorage,
    habit: Habit,
    today: NaiveDate,
    days: u32,
    format: OutputFormat,
) -> Result<String, HabitflowError> {
    let days = days.max(1);
    let start = window_start(today, days)?;
    let entries: Vec<HabitEntry> = storage
        .entries_for_habit(habit.id)?
        .into_iter()
        .filter(|e| e.date >= start && e.date <= today)
        .collect();

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "habit": habit,
            "from": start,
            "to": today,
            "entries": entries,
        })),
        OutputFormat::Pretty => {
            let mut output = Vec::new();
            output.push(format!("{} {}", color_swatch(&habit.color), habit.name.bold()));

            let mut strip = String::new();
            let mut day = start;
            while day <= today {
                let done = entries.iter().any(|e| e.date == day && e.completed);
                strip.push_str(&if done {
                    "■".green().to_string()
                } else {
                    "·".dimmed().to_string()
                });
                day += Duration::days(1);
            }
            output.push(format!(
                "{} {strip} {}",
                start.format("%m-%d").to_string().dimmed(),
                today.format("%m-%d").to_string().dimmed()
            ));

            let done = entries.iter().filter(|e| e.completed).count();
            output.push(format!("{done}/{days} days done"));
            Ok(output.join("\n"))
        }
    }
}

fn show_stats(
    storage: &HabitStorage,
    today: NaiveDate,
    window_days: u32,
    format: OutputFormat,
) -> Result<String, HabitflowError> {
    let mut stats = Vec::new();
    for habit in storage.list()? {
        let entries = storage.entries_for_habit(habit.id)?;
        stats.push(HabitStats::compute(habit, &entries, today, window_days)?);
    }
    let summary = HabitSummary::new(today, stats);

    match format {
        OutputFormat::Json => to_json(&summary),
        OutputFormat::Pretty => Ok(format_stats_pretty(&summary)),
    }
}

fn format_stats_pretty(summary: &HabitSummary) -> String {
    let mut output = Vec::new();
    output.push("📈 Habit Stats".bold().to_string());
    output.push("═".repeat(56));
    output.push(format!(
        "Done today: {}/{}",
        summary.done_today.to_string().green(),
        summary.total_habits
    ));

    if summary.habits.is_empty() {
        return output.join("\n");
    }

    let window = summary.habits.first().map_or(0, |h| h.window_days);
    output.push(String::new());
    output.push(format!(
        "  {:<24} {:>7} {:>7} {:>10}",
        "Habit",
        "Streak",
        "Best",
        format!("{window}d rate")
    ));
    output.push(separator(56));
    for stats in &summary.habits {
        let name: String = stats.habit.name.chars().take(24).collect();
        let streak = if stats.streak.current > 0 {
            format!("🔥{}", stats.streak.current)
        } else {
            "0".to_string()
        };
        output.push(format!(
            "{} {:<24} {:>7} {:>7} {:>9.0}%",
            color_swatch(&stats.habit.color),
            name,
            streak,
            stats.streak.longest,
            stats.completion_rate
        ));
    }

    output.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;

    fn setup() -> (HabitStorage, Config) {
        let storage = HabitStorage::with_database(Database::open_in_memory().unwrap());
        (storage, Config::default())
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, d).unwrap()
    }

    fn exec(storage: &HabitStorage, config: &Config, cmd: HabitCommands) -> String {
        run(storage, cmd, config, day(10), OutputFormat::Json).unwrap()
    }

    fn add(storage: &HabitStorage, config: &Config, name: &str) -> Habit {
        let json = exec(
            storage,
            config,
            HabitCommands::Add {
                name: name.to_string(),
                description: None,
                color: None,
            },
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_add_uses_config_color() {
        let (storage, mut config) = setup();
        config.habits.default_color = "#22c55e".to_string();

        let habit = add(&storage, &config, "Read");
        assert_eq!(habit.color, "#22c55e");
    }

    #[test]
    fn test_resolve_by_id_or_name() {
        let (storage, config) = setup();
        let habit = add(&storage, &config, "Stretch");

        assert_eq!(resolve_habit(&storage, &habit.id.to_string()).unwrap().id, habit.id);
        assert_eq!(resolve_habit(&storage, "stretch").unwrap().id, habit.id);
        assert!(matches!(
            resolve_habit(&storage, "Swim"),
            Err(HabitflowError::NotFound(_))
        ));
    }

    #[test]
    fn test_numeric_name_resolves_when_not_an_id() {
        let (storage, config) = setup();
        let habit = add(&storage, &config, "1000");
        assert_eq!(resolve_habit(&storage, "1000").unwrap().id, habit.id);
    }

    #[test]
    fn test_done_toggles_today() {
        let (storage, config) = setup();
        add(&storage, &config, "Walk");

        let json = exec(
            &storage,
            &config,
            HabitCommands::Done {
                habit: "walk".to_string(),
                date: None,
            },
        );
        let entry: HabitEntry = serde_json::from_str(&json).unwrap();
        assert!(entry.completed);
        assert_eq!(entry.date, day(10));

        let today = exec(&storage, &config, HabitCommands::Today);
        let value: serde_json::Value = serde_json::from_str(&today).unwrap();
        assert_eq!(value["done"], 1);
        assert_eq!(value["items"][0]["done"], true);
    }

    #[test]
    fn test_edit_requires_a_change() {
        let (storage, config) = setup();
        add(&storage, &config, "Water");

        let result = run(
            &storage,
            HabitCommands::Edit {
                habit: "Water".to_string(),
                name: None,
                description: None,
                clear_description: false,
                color: None,
            },
            &config,
            day(10),
            OutputFormat::Pretty,
        );
        assert!(matches!(result, Err(HabitflowError::InvalidInput(_))));
    }

    #[test]
    fn test_rm_deletes() {
        let (storage, config) = setup();
        add(&storage, &config, "Floss");

        let json = exec(
            &storage,
            &config,
            HabitCommands::Rm {
                habit: "Floss".to_string(),
            },
        );
        assert!(json.contains("\"deleted\": true"));
        assert!(storage.list().unwrap().is_empty());
    }

    #[test]
    fn test_stats_report_streaks() {
        let (storage, config) = setup();
        let habit = add(&storage, &config, "Run");
        for d in [8, 9, 10] {
            storage.toggle(habit.id, day(d)).unwrap();
        }

        let json = exec(&storage, &config, HabitCommands::Stats { days: 10 });
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["done_today"], 1);
        assert_eq!(value["habits"][0]["streak"]["current"], 3);
        assert_eq!(value["habits"][0]["completed_in_window"], 3);
    }

    #[test]
    fn test_log_pretty_strip() {
        let (storage, config) = setup();
        let habit = add(&storage, &config, "Journal");
        storage.toggle(habit.id, day(9)).unwrap();

        let out = run(
            &storage,
            HabitCommands::Log {
                habit: "Journal".to_string(),
                days: 3,
            },
            &config,
            day(10),
            OutputFormat::Pretty,
        )
        .unwrap();
        assert!(out.contains("1/3 days done"));
    }

    #[test]
    fn test_windows_past_the_calendar_are_rejected() {
        let (storage, config) = setup();
        add(&storage, &config, "Sleep");

        for cmd in [
            HabitCommands::Log {
                habit: "Sleep".to_string(),
                days: u32::MAX,
            },
            HabitCommands::Stats { days: u32::MAX },
        ] {
            let result = run(&storage, cmd, &config, day(10), OutputFormat::Pretty);
            assert!(matches!(result, Err(HabitflowError::InvalidInput(_))));
        }
    }

    #[test]
    fn test_list_pretty_empty() {
        let (storage, config) = setup();
        let out = run(&storage, HabitCommands::List, &config, day(10), OutputFormat::Pretty)
            .unwrap();
        assert!(out.contains("No habits yet"));
    }
}
