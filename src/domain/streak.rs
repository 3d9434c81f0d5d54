/// Streak calculation over a habit's completion dates
///
/// This module implements the streak engine: the current streak walks
/// backwards from today over the completion set, and the longest streak
/// scans the whole history for the longest run of consecutive days.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

/// Recompute both streaks from a completions set
///
/// Returns `(current_streak, longest_streak)`. Both are 0 when the set is
/// empty; otherwise `longest >= current` holds because the current streak is
/// itself a run of consecutive completed days.
pub fn recompute(completions: &BTreeSet<NaiveDate>, today: NaiveDate) -> (u32, u32) {
    if completions.is_empty() {
        return (0, 0);
    }
    (
        current_streak(completions, today),
        longest_streak(completions),
    )
}

/// Count consecutive completed days ending today or yesterday
///
/// Walks the completion dates newest first, expecting each to be exactly one
/// day before the previous. The first comparison tolerates the run ending
/// yesterday instead of today, so an otherwise intact streak survives until
/// the day is actually over. Any gap of two or more days from the most
/// recent completion, or any break inside the run, ends the count there.
pub fn current_streak(completions: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut expected = today;

    for &date in completions.iter().rev() {
        if date == expected {
            streak += 1;
        } else if streak == 0 && date == expected - Duration::days(1) {
            // Today isn't logged yet: let the run end yesterday
            streak += 1;
            expected = date;
        } else {
            break;
        }
        expected -= Duration::days(1);
    }

    streak
}

/// Find the longest run of consecutive completed days in the history
///
/// Scans the dates in ascending order; a gap of exactly one day extends the
/// running count, anything else resets it to 1. A single completion counts
/// as a streak of 1.
pub fn longest_streak(completions: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0;
    let mut run = 1;
    let mut prev: Option<NaiveDate> = None;

    for &date in completions {
        if let Some(prev) = prev {
            if (date - prev).num_days() == 1 {
                run += 1;
            } else {
                run = 1;
            }
        }
        longest = longest.max(run);
        prev = Some(date);
    }

    longest
}
