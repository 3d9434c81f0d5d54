/// Domain module containing core business logic and data types
///
/// This module defines the core entities (Habit, Store, ReminderTime) and the
/// streak/statistics engine. These types represent the fundamental concepts
/// in our habit tracking system and know nothing about files or terminals.

pub mod habit;
pub mod streak;
pub mod stats;
pub mod reminder;
pub mod store;

// Re-export public types for easy access
pub use habit::*;
pub use streak::*;
pub use stats::*;
pub use reminder::*;
pub use store::*;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur during domain operations
///
/// All of these are recoverable and local to a single command: the caller
/// reports them to the user and the store is left unchanged.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("habit '{0}' already exists")]
    AlreadyExists(String),

    #[error("habit '{0}' not found")]
    NotFound(String),

    #[error("habit '{name}' is already marked as done for {date}")]
    AlreadyMarked { name: String, date: NaiveDate },

    #[error("habit '{name}' was not marked as done for {date}")]
    NotMarked { name: String, date: NaiveDate },

    #[error("invalid time format: '{0}'. Use HH:MM (e.g. 09:00)")]
    InvalidTimeFormat(String),

    #[error("invalid habit name: {0}")]
    InvalidName(String),
}
