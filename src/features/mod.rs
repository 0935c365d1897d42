//! Feature implementations for habitflow.
//!
//! - Focus timer and session history
//! - Habit tracking

pub mod focus;
pub mod habits;
