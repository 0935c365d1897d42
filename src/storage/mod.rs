//! Storage layer for habitflow.
//!
//! This module provides SQLite-based persistence for:
//! - Focus sessions (recorded by the focus timer)
//! - Habits and their daily completion entries

pub(crate) mod columns;
mod database;
mod migrations;

pub use database::Database;
