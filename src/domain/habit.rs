/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a single habit
/// the user tracks, along with name validation. Habits are keyed by name in
/// the store, so the name itself is not part of the serialized record.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{streak, DomainError};

/// A habit the user wants to perform regularly
///
/// `completions` is the source of truth; both streak fields are derived from
/// it and recomputed after every mutation, never edited directly. The set is
/// ordered, which keeps the serialized completion list ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Optional free-text description
    #[serde(default)]
    pub description: String,
    /// When this habit was created
    pub created_at: DateTime<Utc>,
    /// Calendar dates on which the habit was performed (no time of day)
    pub completions: BTreeSet<NaiveDate>,
    /// Consecutive days completed, ending today or yesterday (derived)
    pub current_streak: u32,
    /// Longest run of consecutive completed days ever (derived)
    pub longest_streak: u32,
}

impl Habit {
    /// Create a new habit with no completions
    pub fn new(description: String, created_at: DateTime<Utc>) -> Self {
        Self {
            description,
            created_at,
            completions: BTreeSet::new(),
            current_streak: 0,
            longest_streak: 0,
        }
    }

    /// Check whether the habit was completed on the given date
    pub fn done_on(&self, date: NaiveDate) -> bool {
        self.completions.contains(&date)
    }

    /// The most recent completion date, if any
    pub fn last_completed(&self) -> Option<NaiveDate> {
        self.completions.iter().next_back().copied()
    }

    /// Recompute both streak fields from the completions set
    ///
    /// Must be called after every change to `completions`. `today` is passed
    /// in explicitly so the calculation is deterministic under test.
    pub fn recompute_streaks(&mut self, today: NaiveDate) {
        let (current, longest) = streak::recompute(&self.completions, today);
        self.current_streak = current;
        self.longest_streak = longest;
    }

    /// Validate a habit name according to business rules
    ///
    /// Names are case-sensitive and stored verbatim; only blank names are
    /// rejected.
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidName(
                "habit name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
