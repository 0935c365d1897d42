use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "habitflow")]
#[command(about = "Track daily habits and run Pomodoro-style focus sessions")]
#[command(long_about = "habitflow - habits and focus sessions in your terminal

Mark habits done each day, watch your streaks grow, and run focus/break
cycles with a countdown timer. Everything is stored locally in
~/.habitflow (override with HABITFLOW_HOME).

QUICK START:
  habitflow habit add \"Read\"     Track a new habit
  habitflow habit done Read       Mark it done today
  habitflow habit today           See today's checklist
  habitflow focus run             Start the focus timer

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  habitflow <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to general.default_output from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Enable debug logging (same as HABITFLOW_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Focus timer and session history
    ///
    /// Run Pomodoro-style focus/break cycles and review past sessions.
    ///
    /// # Examples
    ///
    ///   habitflow focus run                     Start the timer
    ///   habitflow focus run --focus 25          25 minute focus phases
    ///   habitflow focus history -n 5            Last five sessions
    ///   habitflow focus metrics                 This month's totals
    #[command(alias = "f")]
    Focus(FocusArgs),

    /// Manage habits and daily check-ins
    ///
    /// # Examples
    ///
    ///   habitflow habit add "Meditate" -c "#22c55e"
    ///   habitflow habit done Meditate
    ///   habitflow habit stats --days 7
    #[command(alias = "h")]
    Habit(HabitArgs),

    /// Show or change settings
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Example: habitflow completions zsh > ~/.zsh/completions/_habitflow
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for focus commands.
#[derive(Args)]
pub struct FocusArgs {
    #[command(subcommand)]
    pub command: FocusCommands,
}

/// Focus subcommands.
#[derive(Subcommand)]
pub enum FocusCommands {
    /// Run the interactive focus timer
    ///
    /// Keys: s start, p pause/resume, n skip phase, x stop,
    /// +/- focus length, ]/[ break length, q quit.
    /// Phase lengths can only change while the timer is idle.
    Run {
        /// Focus length in minutes (1-60)
        #[arg(long = "focus", short = 'f', value_parser = clap::value_parser!(u32).range(1..=60))]
        focus_minutes: Option<u32>,

        /// Break length in minutes (1-60)
        #[arg(long = "break", short = 'b', value_parser = clap::value_parser!(u32).range(1..=60))]
        break_minutes: Option<u32>,
    },

    /// Show recent focus sessions
    History {
        /// Number of sessions to show
        #[arg(long, short = 'n', default_value = "10")]
        limit: usize,
    },

    /// Show daily and monthly focus totals
    ///
    /// Covers the calendar month containing --date (default: today).
    Metrics {
        /// Any day in the month to report (YYYY-MM-DD)
        #[arg(long, short = 'd')]
        date: Option<NaiveDate>,
    },
}

/// Arguments for habit commands.
#[derive(Args)]
pub struct HabitArgs {
    #[command(subcommand)]
    pub command: HabitCommands,
}

/// Habit subcommands.
///
/// A `<HABIT>` argument is either a numeric ID or a habit name.
#[derive(Subcommand)]
pub enum HabitCommands {
    /// Create a habit
    Add {
        /// Habit name
        name: String,

        /// Optional description
        #[arg(long, short = 'd')]
        description: Option<String>,

        /// Display color as #RRGGBB (default: habits.default_color)
        #[arg(long, short = 'c')]
        color: Option<String>,
    },

    /// List habits
    #[command(alias = "ls")]
    List,

    /// Edit a habit
    Edit {
        /// Habit ID or name
        habit: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(long, short = 'd', conflicts_with = "clear_description")]
        description: Option<String>,

        /// Remove the description
        #[arg(long)]
        clear_description: bool,

        /// New color as #RRGGBB
        #[arg(long, short = 'c')]
        color: Option<String>,
    },

    /// Delete a habit and its history
    #[command(alias = "remove")]
    Rm {
        /// Habit ID or name
        habit: String,
    },

    /// Toggle a habit's completion for a day
    ///
    /// Marks the habit done, or undoes it if it was already done.
    Done {
        /// Habit ID or name
        habit: String,

        /// Day to toggle (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show today's checklist
    Today,

    /// Show a habit's completion history
    Log {
        /// Habit ID or name
        habit: String,

        /// Number of days to show, ending today
        #[arg(long, short = 'n', default_value = "14", value_parser = clap::value_parser!(u32).range(1..=3650))]
        days: u32,
    },

    /// Show streaks and completion rates
    Stats {
        /// Trailing window in days for completion rates
        #[arg(long, default_value = "30", value_parser = clap::value_parser!(u32).range(1..=3650))]
        days: u32,
    },
}

/// Arguments for config commands.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the current configuration
    Show,

    /// Set a configuration value
    ///
    /// Keys: general.default_output, general.color, focus.focus_minutes,
    /// focus.break_minutes, focus.bell, habits.default_color
    Set {
        /// Dotted key, e.g. focus.focus_minutes
        key: String,
        /// New value
        value: String,
    },

    /// Print the config file location
    Path,
}
