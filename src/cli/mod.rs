/// Command-line surface
///
/// This module defines the clap command tree and dispatches each command to
/// the core, turning its results into terminal output. One command runs per
/// invocation; the tracker is constructed by main and passed in.

pub mod render;

use chrono::NaiveDate;
use clap::Subcommand;

use crate::{HabitTracker, SnapshotStorage, TrackerError};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new habit to track
    Add {
        /// Habit name (unique, case-sensitive)
        name: String,

        /// Description of the habit
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Remove a habit (and its reminder, if any)
    Remove {
        /// Habit name
        name: String,
    },

    /// Mark a habit as done
    Done {
        /// Habit name
        name: String,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Unmark a habit
    Undone {
        /// Habit name
        name: String,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// List all habits with today's status
    List,

    /// Show detailed statistics for a habit
    Stats {
        /// Habit name
        name: String,
    },

    /// Show completion history for a habit
    History {
        /// Habit name
        name: String,

        /// Number of days to show
        #[arg(short = 'n', long, default_value_t = 30)]
        days: u32,
    },

    /// Set a reminder for a habit (time in HH:MM format, e.g. 09:00)
    Remind {
        /// Habit name
        name: String,

        /// Time of day, 24-hour HH:MM
        time: String,
    },

    /// Show quick summary for today
    Today,
}

/// Run one command against the tracker
pub fn run<S: SnapshotStorage>(
    command: Commands,
    tracker: &mut HabitTracker<S>,
) -> Result<(), TrackerError> {
    match command {
        Commands::Add { name, description } => {
            tracker.add_habit(&name, description)?;
            println!("Habit '{name}' added successfully");
        }
        Commands::Remove { name } => {
            tracker.remove_habit(&name)?;
            println!("Habit '{name}' removed successfully");
        }
        Commands::Done { name, date } => {
            let marked = date.unwrap_or_else(HabitTracker::<S>::today);
            let streak = tracker.mark_done(&name, date)?;
            println!("Habit '{name}' marked as done for {marked}");
            if streak > 0 {
                println!(">> Current streak: {streak} days!");
            }
        }
        Commands::Undone { name, date } => {
            let unmarked = date.unwrap_or_else(HabitTracker::<S>::today);
            tracker.unmark_done(&name, date)?;
            println!("Habit '{name}' unmarked for {unmarked}");
        }
        Commands::List => {
            render::list(tracker.store(), HabitTracker::<S>::today());
        }
        Commands::Stats { name } => {
            let stats = tracker.stats(&name)?;
            render::stats(&stats);
        }
        Commands::History { name, days } => {
            let habit = tracker.habit(&name)?;
            render::history(&name, habit, days, HabitTracker::<S>::today());
        }
        Commands::Remind { name, time } => {
            let time = tracker.set_reminder(&name, &time)?;
            println!("Reminder set for '{name}' at {time}");
            println!("Note: reminders are shown when you run the 'list' command");
        }
        Commands::Today => {
            render::today_summary(tracker.store(), HabitTracker::<S>::today());
        }
    }

    Ok(())
}
