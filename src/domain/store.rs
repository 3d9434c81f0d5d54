/// Store aggregate root
///
/// This module defines the Store: the full in-memory state of the tracker
/// (all habits plus all reminders) and every operation that mutates or
/// queries it. Operations are pure with respect to time: `today` and `now`
/// are passed in by the caller, which keeps the date arithmetic
/// deterministic under test.
///
/// The Store is also the serialized snapshot. BTreeMaps keep both the
/// in-memory iteration order and the snapshot key order stable, and the
/// completion sets serialize as ascending date lists.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Habit, HabitStats, ReminderTime};

/// All tracked habits and reminders
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Store {
    /// Habits keyed by their unique, case-sensitive name
    pub habits: BTreeMap<String, Habit>,
    /// Reminder times keyed by habit name
    pub reminders: BTreeMap<String, ReminderTime>,
}

impl Store {
    /// Add a new habit with no completions
    pub fn add_habit(
        &mut self,
        name: &str,
        description: String,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        Habit::validate_name(name)?;
        if self.habits.contains_key(name) {
            return Err(DomainError::AlreadyExists(name.to_string()));
        }

        self.habits
            .insert(name.to_string(), Habit::new(description, now));
        Ok(())
    }

    /// Remove a habit and, if present, its reminder
    pub fn remove_habit(&mut self, name: &str) -> Result<(), DomainError> {
        if self.habits.remove(name).is_none() {
            return Err(DomainError::NotFound(name.to_string()));
        }
        // Cascading delete keeps reminders from outliving their habit
        self.reminders.remove(name);
        Ok(())
    }

    /// Record a completion for the given date and recompute streaks
    ///
    /// Returns the habit's updated current streak.
    pub fn mark_done(
        &mut self,
        name: &str,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<u32, DomainError> {
        let habit = Self::habit_mut(&mut self.habits, name)?;
        if !habit.completions.insert(date) {
            return Err(DomainError::AlreadyMarked {
                name: name.to_string(),
                date,
            });
        }

        habit.recompute_streaks(today);
        Ok(habit.current_streak)
    }

    /// Revoke a completion for the given date and recompute streaks
    pub fn unmark_done(
        &mut self,
        name: &str,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<(), DomainError> {
        let habit = Self::habit_mut(&mut self.habits, name)?;
        if !habit.completions.remove(&date) {
            return Err(DomainError::NotMarked {
                name: name.to_string(),
                date,
            });
        }

        habit.recompute_streaks(today);
        Ok(())
    }

    /// Compute statistics for a habit
    pub fn stats(&self, name: &str, today: NaiveDate) -> Result<HabitStats, DomainError> {
        let habit = self.habit(name)?;
        Ok(HabitStats::compute(name, habit, today))
    }

    /// Set or overwrite the reminder time for a habit
    pub fn set_reminder(&mut self, name: &str, time_str: &str) -> Result<ReminderTime, DomainError> {
        if !self.habits.contains_key(name) {
            return Err(DomainError::NotFound(name.to_string()));
        }

        let time: ReminderTime = time_str.parse()?;
        self.reminders.insert(name.to_string(), time);
        Ok(time)
    }

    /// Look up a habit by name
    pub fn habit(&self, name: &str) -> Result<&Habit, DomainError> {
        self.habits
            .get(name)
            .ok_or_else(|| DomainError::NotFound(name.to_string()))
    }

    /// Reminder time for a habit, if one is set
    pub fn reminder(&self, name: &str) -> Option<ReminderTime> {
        self.reminders.get(name).copied()
    }

    /// All habits in name order
    pub fn habits(&self) -> impl Iterator<Item = (&str, &Habit)> {
        self.habits.iter().map(|(name, habit)| (name.as_str(), habit))
    }

    /// All reminders in habit-name order
    pub fn reminders(&self) -> impl Iterator<Item = (&str, ReminderTime)> {
        self.reminders
            .iter()
            .map(|(name, time)| (name.as_str(), *time))
    }

    fn habit_mut<'a>(
        habits: &'a mut BTreeMap<String, Habit>,
        name: &str,
    ) -> Result<&'a mut Habit, DomainError> {
        habits
            .get_mut(name)
            .ok_or_else(|| DomainError::NotFound(name.to_string()))
    }
}
