/// Basic unit tests exercising the public tracker API
use chrono::{Duration, NaiveDate, Utc};
use habit_tracker::*;
use tempfile::tempdir;

fn today() -> NaiveDate {
    Utc::now().naive_utc().date()
}

fn tracker_in(dir: &tempfile::TempDir) -> HabitTracker<JsonStorage> {
    let storage = JsonStorage::new(dir.path().join("habits.json"));
    HabitTracker::load(storage).expect("Failed to load tracker")
}

#[test]
fn test_add_and_mark_exercise_two_day_streak() {
    let dir = tempdir().unwrap();
    let mut tracker = tracker_in(&dir);

    tracker.add_habit("Exercise", "Daily workout".to_string()).unwrap();
    tracker.mark_done("Exercise", Some(today() - Duration::days(1))).unwrap();
    let streak = tracker.mark_done("Exercise", None).unwrap();

    assert_eq!(streak, 2);
    let stats = tracker.stats("Exercise").unwrap();
    assert_eq!(stats.current_streak, 2);
    assert_eq!(stats.longest_streak, 2);
    assert_eq!(stats.total_completions, 2);
    assert_eq!(stats.last_completed, Some(today()));
}

#[test]
fn test_streak_survives_older_gap() {
    let dir = tempdir().unwrap();
    let mut tracker = tracker_in(&dir);

    tracker.add_habit("Exercise", String::new()).unwrap();
    tracker.mark_done("Exercise", Some(today() - Duration::days(3))).unwrap();
    tracker.mark_done("Exercise", Some(today() - Duration::days(1))).unwrap();
    tracker.mark_done("Exercise", None).unwrap();

    let stats = tracker.stats("Exercise").unwrap();
    assert_eq!(stats.current_streak, 2);
    assert_eq!(stats.longest_streak, 2);
}

#[test]
fn test_duplicate_add_is_rejected() {
    let dir = tempdir().unwrap();
    let mut tracker = tracker_in(&dir);

    tracker.add_habit("Read", String::new()).unwrap();
    let result = tracker.add_habit("Read", "again".to_string());

    assert!(matches!(
        result,
        Err(TrackerError::Domain(DomainError::AlreadyExists(_)))
    ));
}

#[test]
fn test_double_mark_is_rejected() {
    let dir = tempdir().unwrap();
    let mut tracker = tracker_in(&dir);

    tracker.add_habit("Read", String::new()).unwrap();
    tracker.mark_done("Read", None).unwrap();
    let result = tracker.mark_done("Read", None);

    assert!(matches!(
        result,
        Err(TrackerError::Domain(DomainError::AlreadyMarked { .. }))
    ));
    assert_eq!(tracker.stats("Read").unwrap().total_completions, 1);
}

#[test]
fn test_unmark_without_mark_is_rejected() {
    let dir = tempdir().unwrap();
    let mut tracker = tracker_in(&dir);

    tracker.add_habit("Read", String::new()).unwrap();
    let result = tracker.unmark_done("Read", None);

    assert!(matches!(
        result,
        Err(TrackerError::Domain(DomainError::NotMarked { .. }))
    ));
}

#[test]
fn test_unknown_habit_is_not_found_everywhere() {
    let dir = tempdir().unwrap();
    let mut tracker = tracker_in(&dir);

    assert!(matches!(
        tracker.mark_done("Ghost", None),
        Err(TrackerError::Domain(DomainError::NotFound(_)))
    ));
    assert!(matches!(
        tracker.remove_habit("Ghost"),
        Err(TrackerError::Domain(DomainError::NotFound(_)))
    ));
    assert!(matches!(
        tracker.stats("Ghost"),
        Err(TrackerError::Domain(DomainError::NotFound(_)))
    ));
    assert!(matches!(
        tracker.set_reminder("Ghost", "08:30"),
        Err(TrackerError::Domain(DomainError::NotFound(_)))
    ));
}

#[test]
fn test_reminder_validation_and_cascade_removal() {
    let dir = tempdir().unwrap();
    let mut tracker = tracker_in(&dir);

    tracker.add_habit("X", String::new()).unwrap();

    assert!(matches!(
        tracker.set_reminder("X", "25:00"),
        Err(TrackerError::Domain(DomainError::InvalidTimeFormat(_)))
    ));

    tracker.set_reminder("X", "08:30").unwrap();
    assert_eq!(tracker.store().reminder("X").unwrap().to_string(), "08:30");

    tracker.remove_habit("X").unwrap();
    assert!(tracker.store().reminder("X").is_none());
    assert!(tracker.habit("X").is_err());
}

#[test]
fn test_success_rates_over_full_and_empty_windows() {
    let dir = tempdir().unwrap();
    let mut tracker = tracker_in(&dir);

    tracker.add_habit("Full", String::new()).unwrap();
    for i in 0..7 {
        tracker.mark_done("Full", Some(today() - Duration::days(i))).unwrap();
    }

    tracker.add_habit("Empty", String::new()).unwrap();

    let full = tracker.stats("Full").unwrap();
    assert_eq!(full.success_rate_7d, 100.0);

    let empty = tracker.stats("Empty").unwrap();
    assert_eq!(empty.success_rate_7d, 0.0);
    assert_eq!(empty.success_rate_30d, 0.0);
    assert_eq!(empty.last_completed, None);
}
