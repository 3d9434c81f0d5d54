/// Terminal rendering for query results
///
/// All output formatting lives here; the core returns plain data and never
/// prints. Output is deliberately plain text so it pipes cleanly.

use chrono::{Duration, NaiveDate};

use crate::domain::{Habit, HabitStats, Store};

/// Print the habit overview table plus any reminders
pub fn list(store: &Store, today: NaiveDate) {
    if store.habits.is_empty() {
        println!("No habits tracked yet. Add one with 'habit-tracker add <name>'");
        return;
    }

    let name_width = store
        .habits()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0)
        .max("Habit".len());

    println!(
        "{:<name_width$}  {:^5}  {:>6}  {:>6}  Description",
        "Habit", "Today", "Streak", "Best"
    );
    for (name, habit) in store.habits() {
        let status = if habit.done_on(today) { "+" } else { "o" };
        println!(
            "{:<name_width$}  {:^5}  {:>5}d  {:>5}d  {}",
            name, status, habit.current_streak, habit.longest_streak, habit.description
        );
    }

    if store.reminders.is_empty() {
        return;
    }
    println!("\nReminders:");
    for (name, time) in store.reminders() {
        println!("  - {name}: {time}");
    }
}

/// Print the detailed statistics block for one habit
pub fn stats(stats: &HabitStats) {
    println!("{}", stats.name);
    if !stats.description.is_empty() {
        println!("{}", stats.description);
    }
    println!();
    println!("Total Completions: {}", stats.total_completions);
    println!("Current Streak:    {} days", stats.current_streak);
    println!("Longest Streak:    {} days", stats.longest_streak);
    println!();
    println!("Success Rates:");
    println!("  Last 7 days:  {}%", stats.success_rate_7d);
    println!("  Last 30 days: {}%", stats.success_rate_30d);
    println!();
    match stats.last_completed {
        Some(date) => println!("Last Completed: {date}"),
        None => println!("Last Completed: Never"),
    }
}

/// Print the per-day completion log, most recent day first
pub fn history(name: &str, habit: &Habit, days: u32, today: NaiveDate) {
    println!("History for '{name}' (last {days} days)\n");

    for i in 0..days {
        let date = today - Duration::days(i as i64);
        let symbol = if habit.done_on(date) { "+" } else { "x" };
        println!("{symbol} {date} ({})", date.format("%A"));
    }
}

/// Print today's progress summary and the habits still to do
pub fn today_summary(store: &Store, today: NaiveDate) {
    if store.habits.is_empty() {
        println!("No habits tracked yet.");
        return;
    }

    let total = store.habits.len();
    let completed = store.habits().filter(|(_, h)| h.done_on(today)).count();
    let percentage = completed as f64 / total as f64 * 100.0;

    let message = if percentage >= 100.0 {
        "Perfect day!"
    } else if percentage >= 75.0 {
        "Great job!"
    } else if percentage >= 50.0 {
        "Keep going!"
    } else {
        "You can do it!"
    };

    println!("Today - {}", today.format("%B %d, %Y"));
    println!(
        "{completed}/{total} habits completed ({percentage:.0}%) - {message}"
    );

    let incomplete: Vec<&str> = store
        .habits()
        .filter(|(_, h)| !h.done_on(today))
        .map(|(name, _)| name)
        .collect();
    if !incomplete.is_empty() {
        println!("\nStill to do:");
        for name in incomplete {
            println!("  - {name}");
        }
    }
}
