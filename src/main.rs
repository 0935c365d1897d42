use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use habitflow::cli::args::{Cli, Commands, FocusArgs, FocusCommands};
use habitflow::cli::commands;
use habitflow::config::{Config, Paths};

/// Log filter variable, e.g. `HABITFLOW_LOG=habitflow=trace`.
const LOG_ENV: &str = "HABITFLOW_LOG";

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::new()?;

    // the timer owns the terminal, so its logs go to a file
    let to_file = matches!(
        cli.command,
        Commands::Focus(FocusArgs {
            command: FocusCommands::Run { .. }
        })
    );
    init_logging(cli.verbose, to_file.then_some(&paths))?;

    let config = Config::load_from_path(&paths.config_file)?;
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Focus(args) => commands::focus(args.command, &config, format)?,
        Commands::Habit(args) => commands::habit(args.command, &config, format)?,
        Commands::Config(args) => commands::config(args.command, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn init_logging(verbose: bool, log_to: Option<&Paths>) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    match log_to {
        Some(paths) => {
            paths.ensure_dirs()?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&paths.log_file)
                .with_context(|| format!("failed to open {}", paths.log_file.display()))?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .with(filter)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    }
    Ok(())
}
