//! Command implementations for habitflow.
//!
//! Each command returns the text to print, already formatted for the
//! requested output format.

mod config;
mod focus;
mod habit;

pub use config::config;
pub use focus::focus;
pub use habit::habit;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::HabitflowError;

/// Generate a shell completion script.
///
/// # Errors
///
/// Returns `HabitflowError::Parse` if the generated script is not UTF-8.
pub fn completions(shell: Shell) -> Result<String, HabitflowError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "habitflow", &mut buf);
    String::from_utf8(buf).map_err(|e| HabitflowError::Parse(format!("UTF-8 error: {e}")))
}
