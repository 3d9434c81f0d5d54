/// Integration tests for snapshot persistence across invocations
use chrono::{Duration, NaiveDate, Utc};
use habit_tracker::*;
use tempfile::tempdir;

fn today() -> NaiveDate {
    Utc::now().naive_utc().date()
}

#[test]
fn test_state_persists_across_tracker_instances() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("habits.json");

    // First invocation: create a habit, mark two days, set a reminder
    {
        let mut tracker = HabitTracker::load(JsonStorage::new(&path)).unwrap();
        tracker.add_habit("Exercise", "Daily workout".to_string()).unwrap();
        tracker.mark_done("Exercise", Some(today() - Duration::days(1))).unwrap();
        tracker.mark_done("Exercise", None).unwrap();
        tracker.set_reminder("Exercise", "07:00").unwrap();
    }

    // Second invocation: everything is still there
    let tracker = HabitTracker::load(JsonStorage::new(&path)).unwrap();
    let stats = tracker.stats("Exercise").unwrap();
    assert_eq!(stats.total_completions, 2);
    assert_eq!(stats.current_streak, 2);
    assert_eq!(stats.longest_streak, 2);
    assert_eq!(tracker.store().reminder("Exercise").unwrap().to_string(), "07:00");
    assert_eq!(tracker.habit("Exercise").unwrap().description, "Daily workout");
}

#[test]
fn test_fresh_path_starts_empty() {
    let dir = tempdir().unwrap();
    let tracker = HabitTracker::load(JsonStorage::new(dir.path().join("habits.json"))).unwrap();

    assert!(tracker.store().habits.is_empty());
    assert!(tracker.store().reminders.is_empty());
}

#[test]
fn test_corrupt_snapshot_fails_to_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("habits.json");
    std::fs::write(&path, "definitely not json").unwrap();

    let result = HabitTracker::load(JsonStorage::new(path));
    assert!(matches!(result, Err(TrackerError::Storage(_))));
}

#[test]
fn test_failed_mutation_does_not_change_snapshot() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("habits.json");

    {
        let mut tracker = HabitTracker::load(JsonStorage::new(&path)).unwrap();
        tracker.add_habit("Read", String::new()).unwrap();
        tracker.mark_done("Read", None).unwrap();
    }
    let before = std::fs::read_to_string(&path).unwrap();

    {
        let mut tracker = HabitTracker::load(JsonStorage::new(&path)).unwrap();
        assert!(tracker.mark_done("Read", None).is_err());
        assert!(tracker.unmark_done("Read", Some(today() - Duration::days(5))).is_err());
        assert!(tracker.set_reminder("Read", "nope").is_err());
    }

    let after = std::fs::read_to_string(&path).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_removal_is_persisted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("habits.json");

    {
        let mut tracker = HabitTracker::load(JsonStorage::new(&path)).unwrap();
        tracker.add_habit("X", String::new()).unwrap();
        tracker.set_reminder("X", "08:30").unwrap();
        tracker.remove_habit("X").unwrap();
    }

    let tracker = HabitTracker::load(JsonStorage::new(&path)).unwrap();
    assert!(tracker.store().habits.is_empty());
    assert!(tracker.store().reminders.is_empty());
}

#[test]
fn test_streaks_reload_consistent_with_completions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("habits.json");

    {
        let mut tracker = HabitTracker::load(JsonStorage::new(&path)).unwrap();
        tracker.add_habit("Exercise", String::new()).unwrap();
        // Only yesterday marked: grace keeps the streak alive
        tracker.mark_done("Exercise", Some(today() - Duration::days(1))).unwrap();
    }

    let tracker = HabitTracker::load(JsonStorage::new(&path)).unwrap();
    let habit = tracker.habit("Exercise").unwrap();
    assert_eq!(habit.current_streak, 1);
    assert_eq!(habit.longest_streak, 1);
    assert!(habit.longest_streak >= habit.current_streak);
}
