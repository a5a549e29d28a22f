/// End-to-end store workflows driven through the public API
///
/// These tests pin the store to a fixed clock so streak math and the derived
/// windows are deterministic regardless of when the suite runs.
use habit_tracker_core::*;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

/// Clock pinned to a fixed instant
struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn store_at(y: i32, m: u32, d: u32) -> (HabitStore, NaiveDate) {
    // Capture the store's debug events when RUST_LOG is set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let now = Utc.with_ymd_and_hms(y, m, d, 9, 30, 0).unwrap();
    (HabitStore::with_clock(FixedClock(now)), now.date_naive())
}

#[cfg(test)]
mod store_workflow_tests {
    use super::*;

    #[test]
    fn test_dashboard_workflow() {
        let (mut store, today) = store_at(2024, 3, 7);

        let read = store.add("Read for 30 minutes", "#3B82F6").unwrap();
        let run = store.add("Exercise", "#10B981").unwrap();
        let meditate = store.add("Meditate", "#8B5CF6").unwrap();
        assert_eq!(store.len(), 3);

        // A few days of activity, including retroactive marks.
        store.toggle_completion(read);
        store.toggle_completion_on(read, today - Duration::days(1));
        store.toggle_completion_on(read, today - Duration::days(2));
        store.toggle_completion(run);
        store.toggle_completion_on(meditate, today - Duration::days(1));

        assert_eq!(store.get(read).unwrap().streak, 3);
        assert_eq!(store.get(run).unwrap().streak, 1);
        // Meditate skipped today, so its chain is broken at day zero.
        assert_eq!(store.get(meditate).unwrap().streak, 0);

        let agg = store.aggregates();
        assert_eq!(agg.total_completions, 5);
        assert_eq!(agg.average_streak, 1); // round(4/3)

        let progress = store.weekly_progress();
        assert_eq!(progress.len(), 7);
        assert_eq!(progress.last().unwrap().date, today);
        assert_eq!(progress.last().unwrap().completed, 2);
        assert_eq!(progress.last().unwrap().percentage, 67);
        assert_eq!(progress[5].completed, 2); // read + meditate yesterday

        // Windows are contiguous and oldest-first.
        for pair in progress.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    #[test]
    fn test_streak_scenario_from_toggles() {
        let (mut store, today) = store_at(2024, 3, 7);
        let id = store.add("Read", DEFAULT_COLOR).unwrap();

        // Mark today complete.
        store.toggle_completion(id);
        assert_eq!(store.get(id).unwrap().streak, 1);

        // Mark yesterday, out of order; streak walks back from today.
        store.toggle_completion_on(id, today - Duration::days(1));
        assert_eq!(store.get(id).unwrap().streak, 2);

        // Unmark today; yesterday alone no longer counts.
        store.toggle_completion(id);
        assert_eq!(store.get(id).unwrap().streak, 0);
        assert!(!store.is_completed_today(id));
    }

    #[test]
    fn test_habit_history_and_overview() {
        let (mut store, today) = store_at(2024, 3, 31);
        let id = store.add("Read", DEFAULT_COLOR).unwrap();

        for i in 0..10 {
            store.toggle_completion_on(id, today - Duration::days(i));
        }
        // One completion outside the 30-day window still counts toward
        // totals but not toward the history view.
        store.toggle_completion_on(id, today - Duration::days(40));

        let history = store.habit_history(id).unwrap();
        assert_eq!(history.len(), 30);
        assert_eq!(history[0].date, today - Duration::days(29));
        assert_eq!(history[29].date, today);
        assert_eq!(history.iter().filter(|d| d.completed).count(), 10);

        let overview = store.habit_overview(id).unwrap();
        assert_eq!(overview.streak, 10);
        assert_eq!(overview.total_completions, 11);
        assert_eq!(overview.success_rate_30, 37); // round(1100/30)
    }

    #[test]
    fn test_noop_inputs_leave_store_unchanged() {
        let (mut store, today) = store_at(2024, 3, 7);
        store.add("Read", DEFAULT_COLOR).unwrap();

        assert!(store.add("   ", DEFAULT_COLOR).is_none());
        store.delete(HabitId::new());
        store.toggle_completion_on(HabitId::new(), today);

        assert_eq!(store.len(), 1);
        assert_eq!(store.aggregates().total_completions, 0);
        assert!(store.habit_overview(HabitId::new()).is_none());
    }

    #[test]
    fn test_delete_removes_from_derived_views() {
        let (mut store, _) = store_at(2024, 3, 7);
        let a = store.add("A", DEFAULT_COLOR).unwrap();
        let b = store.add("B", DEFAULT_COLOR).unwrap();
        store.toggle_completion(a);
        store.toggle_completion(b);

        store.delete(a);

        assert_eq!(store.len(), 1);
        assert!(store.get(a).is_none());
        let agg = store.aggregates();
        assert_eq!(agg.total_completions, 1);
        assert_eq!(store.weekly_progress().last().unwrap().total_habits, 1);
    }

    #[test]
    fn test_fixed_clock_is_wall_time_independent() {
        let (mut early, _) = store_at(2020, 1, 1);
        let (mut late, _) = store_at(2030, 6, 15);

        for store in [&mut early, &mut late] {
            let id = store.add("Read", DEFAULT_COLOR).unwrap();
            let today = store.today();
            store.toggle_completion_on(id, today);
            store.toggle_completion_on(id, today - Duration::days(1));
            assert_eq!(store.get(id).unwrap().streak, 2);
        }
    }
}
