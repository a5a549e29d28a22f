/// Public library interface for the habit tracker core
///
/// This crate implements the in-memory Habit Store: an ordered collection of
/// habits with completion histories, cached streaks, and the derived views
/// (weekly progress, 30-day history, aggregates) a presentation layer
/// renders. The presentation layer itself is out of scope; it interacts with
/// this crate only through [`HabitStore`]'s operations and read accessors.

// Internal modules
mod analytics;
mod domain;
mod store;

// Re-export public modules and types
pub use analytics::{
    Aggregates, DayStatus, DaySummary, HabitOverview, HISTORY_WINDOW_DAYS, WEEK_WINDOW_DAYS,
};
pub use domain::{
    current_streak, day_key, DomainError, Habit, HabitId, DEFAULT_COLOR, DEFAULT_PALETTE,
    STREAK_LOOKBACK_DAYS,
};
pub use store::{Clock, HabitStore, SystemClock};
