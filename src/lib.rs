//! habitflow - habits and focus sessions in the terminal
//!
//! This crate provides a local habit tracker and a Pomodoro-style focus
//! timer, persisted to SQLite.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod output;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::HabitflowError;
pub use features::focus::{FocusController, Mode, SessionRecorder, Transition};
