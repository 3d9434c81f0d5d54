/// Rolling-window statistics for a habit
///
/// This module defines the HabitStats struct returned by the stats query.
/// All values are derived on demand from the habit's completion history.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::domain::Habit;

/// Statistics for a single habit at a point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitStats {
    /// Habit name (the store key)
    pub name: String,
    /// Description copied from the habit
    pub description: String,
    /// Total number of completions ever recorded
    pub total_completions: u32,
    /// Consecutive days completed, ending today or yesterday
    pub current_streak: u32,
    /// Longest run of consecutive completed days
    pub longest_streak: u32,
    /// Percentage of the last 7 calendar days (including today) completed
    pub success_rate_7d: f64,
    /// Percentage of the last 30 calendar days (including today) completed
    pub success_rate_30d: f64,
    /// Most recent completion date, None if never completed
    pub last_completed: Option<NaiveDate>,
}

impl HabitStats {
    /// Compute statistics for a habit
    ///
    /// A habit with no completions short-circuits to all zeros and no last
    /// completion; the windowed counting is skipped entirely.
    pub fn compute(name: &str, habit: &Habit, today: NaiveDate) -> Self {
        if habit.completions.is_empty() {
            return Self {
                name: name.to_string(),
                description: habit.description.clone(),
                total_completions: 0,
                current_streak: 0,
                longest_streak: 0,
                success_rate_7d: 0.0,
                success_rate_30d: 0.0,
                last_completed: None,
            };
        }

        Self {
            name: name.to_string(),
            description: habit.description.clone(),
            total_completions: habit.completions.len() as u32,
            current_streak: habit.current_streak,
            longest_streak: habit.longest_streak,
            success_rate_7d: success_rate(habit, today, 7),
            success_rate_30d: success_rate(habit, today, 30),
            last_completed: habit.last_completed(),
        }
    }
}

/// Completion rate over the last `window` calendar days including today
///
/// Returned as a percentage rounded to one decimal place.
fn success_rate(habit: &Habit, today: NaiveDate, window: u32) -> f64 {
    let completed = (0..window)
        .filter(|&i| habit.done_on(today - Duration::days(i as i64)))
        .count();

    let rate = completed as f64 / window as f64 * 100.0;
    (rate * 10.0).round() / 10.0
}
