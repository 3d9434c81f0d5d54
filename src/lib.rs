/// Public library interface for the habit tracker
///
/// This module exports the tracker type that binds the in-memory store to a
/// storage backend, plus the public domain and storage types used by the
/// CLI and by tests.

use chrono::{NaiveDate, Utc};
use thiserror::Error;

// Internal modules
mod domain;
mod storage;
pub mod cli;

// Re-export public modules and types
pub use domain::*;
pub use storage::{JsonStorage, SnapshotStorage, StorageError};

/// Errors that can occur while running a tracker operation
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("{0}")]
    Domain(#[from] domain::DomainError),

    #[error("storage error: {0}")]
    Storage(#[from] storage::StorageError),
}

/// The habit tracker: one loaded store bound to its storage backend
///
/// Constructed once per invocation. Every mutating operation that succeeds
/// rewrites the full snapshot before returning; queries never touch storage.
pub struct HabitTracker<S: SnapshotStorage> {
    storage: S,
    store: Store,
}

impl<S: SnapshotStorage> HabitTracker<S> {
    /// Load the store from the given storage backend
    ///
    /// A backend with no prior snapshot yields an empty tracker; a corrupt
    /// snapshot is an error, not an empty tracker.
    pub fn load(storage: S) -> Result<Self, TrackerError> {
        let store = storage.load()?;
        tracing::debug!("tracker loaded with {} habits", store.habits.len());
        Ok(Self { storage, store })
    }

    /// Add a new habit
    pub fn add_habit(&mut self, name: &str, description: String) -> Result<(), TrackerError> {
        self.store.add_habit(name, description, Utc::now())?;
        self.persist()
    }

    /// Remove a habit and its reminder
    pub fn remove_habit(&mut self, name: &str) -> Result<(), TrackerError> {
        self.store.remove_habit(name)?;
        self.persist()
    }

    /// Mark a habit done for `date`, defaulting to today
    ///
    /// Returns the updated current streak.
    pub fn mark_done(&mut self, name: &str, date: Option<NaiveDate>) -> Result<u32, TrackerError> {
        let today = Self::today();
        let streak = self.store.mark_done(name, date.unwrap_or(today), today)?;
        self.persist()?;
        Ok(streak)
    }

    /// Unmark a habit for `date`, defaulting to today
    pub fn unmark_done(&mut self, name: &str, date: Option<NaiveDate>) -> Result<(), TrackerError> {
        let today = Self::today();
        self.store.unmark_done(name, date.unwrap_or(today), today)?;
        self.persist()
    }

    /// Statistics for one habit
    pub fn stats(&self, name: &str) -> Result<HabitStats, TrackerError> {
        Ok(self.store.stats(name, Self::today())?)
    }

    /// Set or overwrite a reminder time given as "HH:MM"
    pub fn set_reminder(&mut self, name: &str, time_str: &str) -> Result<ReminderTime, TrackerError> {
        let time = self.store.set_reminder(name, time_str)?;
        self.persist()?;
        Ok(time)
    }

    /// Look up one habit
    pub fn habit(&self, name: &str) -> Result<&Habit, TrackerError> {
        Ok(self.store.habit(name)?)
    }

    /// The loaded store (useful for read-only views and tests)
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Today's date in UTC, the reference point for all streak arithmetic
    pub fn today() -> NaiveDate {
        Utc::now().naive_utc().date()
    }

    fn persist(&self) -> Result<(), TrackerError> {
        self.storage.save(&self.store)?;
        Ok(())
    }
}
