/// The Habit Store: owner of the habit collection
///
/// This module implements the store that holds every habit and exposes the
/// four mutation/derivation operations the presentation layer is allowed to
/// call. The store is built around an injectable clock so that streak math
/// and date windows are deterministic under test.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use crate::analytics::{self, Aggregates, DayStatus, DaySummary, HabitOverview};
use crate::domain::{current_streak, Habit, HabitId};

/// Source of the current date and time
///
/// The store never reads the wall clock directly; everything date-dependent
/// goes through this trait. Production code uses [`SystemClock`]; tests
/// supply a fixed implementation.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// The current calendar day, in the clock's (UTC) convention
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Clock backed by the system's UTC time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// In-memory store owning the ordered habit collection
///
/// The store has exclusive ownership of every habit's mutable state. Callers
/// mutate only through [`add`](HabitStore::add),
/// [`delete`](HabitStore::delete) and the toggle methods; all other access
/// is read-only. Invalid input (empty name, unknown id) degrades to a no-op
/// rather than an error.
///
/// Single-threaded by design: none of the operations are safe for concurrent
/// mutation (toggle-then-recompute is not atomic), so a multi-writer caller
/// must wrap the store in its own mutual exclusion.
pub struct HabitStore {
    habits: Vec<Habit>,
    clock: Box<dyn Clock>,
}

impl HabitStore {
    /// Create an empty store using the system UTC clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create an empty store with a supplied clock
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            habits: Vec::new(),
            clock: Box::new(clock),
        }
    }

    /// Add a habit to the end of the collection
    ///
    /// The name is trimmed first; when it is empty after trimming the store
    /// is left unchanged and `None` is returned. On success the new habit
    /// starts with no completions and a zero streak.
    pub fn add(&mut self, name: &str, color: &str) -> Option<HabitId> {
        match Habit::new(name, color, self.clock.now()) {
            Ok(habit) => {
                let id = habit.id;
                debug!(%id, name = %habit.name, "habit added");
                self.habits.push(habit);
                Some(id)
            }
            Err(err) => {
                debug!(%err, "add rejected");
                None
            }
        }
    }

    /// Remove the habit with the given id; no-op when absent
    pub fn delete(&mut self, id: HabitId) {
        let before = self.habits.len();
        self.habits.retain(|h| h.id != id);
        if self.habits.len() < before {
            debug!(%id, "habit deleted");
        } else {
            debug!(%id, "delete ignored, unknown id");
        }
    }

    /// Toggle today's completion for a habit; no-op for an unknown id
    pub fn toggle_completion(&mut self, id: HabitId) {
        let today = self.clock.today();
        self.toggle_completion_on(id, today);
    }

    /// Toggle a specific day's completion for a habit
    ///
    /// Flips the day's membership in the habit's completion set, then
    /// recomputes the cached streak by walking backward from today (not from
    /// `day`). Toggling the same day twice restores both the set and the
    /// streak. Unknown ids are ignored.
    pub fn toggle_completion_on(&mut self, id: HabitId, day: NaiveDate) {
        let today = self.clock.today();

        let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) else {
            debug!(%id, "toggle ignored, unknown id");
            return;
        };

        if !habit.completions.remove(&day) {
            habit.completions.insert(day);
        }
        habit.streak = current_streak(&habit.completions, today);
        debug!(%id, %day, streak = habit.streak, "completion toggled");
    }

    /// Collection-wide progress for the 7 days ending today, oldest first
    pub fn weekly_progress(&self) -> Vec<DaySummary> {
        analytics::weekly_progress(&self.habits, self.clock.today())
    }

    /// Per-day completion flags for a habit over the 30 days ending today
    ///
    /// `None` when no habit has the given id.
    pub fn habit_history(&self, id: HabitId) -> Option<Vec<DayStatus>> {
        self.get(id)
            .map(|habit| analytics::habit_history(habit, self.clock.today()))
    }

    /// Dashboard totals: total completions and rounded average streak
    pub fn aggregates(&self) -> Aggregates {
        analytics::aggregates(&self.habits)
    }

    /// Headline numbers for a single habit's analytics view
    pub fn habit_overview(&self, id: HabitId) -> Option<HabitOverview> {
        self.get(id).map(analytics::habit_overview)
    }

    /// The habit collection in insertion order
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Look up a habit by id
    pub fn get(&self, id: HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// Whether the habit is marked complete on the clock's current day
    pub fn is_completed_today(&self, id: HabitId) -> bool {
        let today = self.clock.today();
        self.get(id).is_some_and(|h| h.is_completed_on(today))
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    /// The clock's current calendar day
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}

impl Default for HabitStore {
    fn default() -> Self {
        Self::new()
    }
}
