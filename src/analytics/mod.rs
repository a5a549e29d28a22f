/// Analytics over the habit collection
///
/// This module derives the read-only views the presentation layer renders:
/// the weekly progress chart, the 30-day per-habit history, and the
/// dashboard aggregates. Everything here is a pure function of the habit
/// collection and a supplied "today"; no ambient clock access.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::Habit;

/// Number of days covered by the weekly progress view
pub const WEEK_WINDOW_DAYS: u32 = 7;

/// Number of days covered by the per-habit history view
pub const HISTORY_WINDOW_DAYS: u32 = 30;

/// One day of collection-wide progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    /// Which calendar day this summarizes
    pub date: NaiveDate,
    /// Short weekday label for chart axes (e.g., "Mon")
    pub weekday: String,
    /// How many habits were completed on this day
    pub completed: usize,
    /// Size of the habit collection
    pub total_habits: usize,
    /// round(100 * completed / total_habits); 0 when there are no habits
    pub percentage: u32,
}

/// Completion flag for a single habit on a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStatus {
    pub date: NaiveDate,
    pub completed: bool,
}

/// Dashboard totals across the whole collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregates {
    /// Sum of completion-set sizes across all habits
    pub total_completions: usize,
    /// Rounded mean of all habits' streaks; 0 for an empty collection
    pub average_streak: u32,
}

/// Headline numbers for a single habit's analytics view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitOverview {
    /// Current consecutive-day streak ending today
    pub streak: u32,
    /// Total days ever marked complete
    pub total_completions: usize,
    /// round(100 * total_completions / 30), the 30-day success rate
    pub success_rate_30: u32,
}

/// Collection-wide progress for the 7 days ending today, oldest first
pub fn weekly_progress(habits: &[Habit], today: NaiveDate) -> Vec<DaySummary> {
    window_ending(today, WEEK_WINDOW_DAYS)
        .map(|date| {
            let completed = habits.iter().filter(|h| h.is_completed_on(date)).count();
            let total_habits = habits.len();
            DaySummary {
                date,
                weekday: date.format("%a").to_string(),
                completed,
                total_habits,
                percentage: rounded_percentage(completed, total_habits),
            }
        })
        .collect()
}

/// Per-day completion flags for the 30 days ending today, oldest first
pub fn habit_history(habit: &Habit, today: NaiveDate) -> Vec<DayStatus> {
    window_ending(today, HISTORY_WINDOW_DAYS)
        .map(|date| DayStatus {
            date,
            completed: habit.is_completed_on(date),
        })
        .collect()
}

/// Dashboard totals across the collection
pub fn aggregates(habits: &[Habit]) -> Aggregates {
    let total_completions = habits.iter().map(Habit::total_completions).sum();

    let average_streak = if habits.is_empty() {
        0
    } else {
        let sum: u32 = habits.iter().map(|h| h.streak).sum();
        (f64::from(sum) / habits.len() as f64).round() as u32
    };

    Aggregates {
        total_completions,
        average_streak,
    }
}

/// Headline numbers for a single habit
pub fn habit_overview(habit: &Habit) -> HabitOverview {
    let total_completions = habit.total_completions();
    HabitOverview {
        streak: habit.streak,
        total_completions,
        success_rate_30: rounded_percentage(total_completions, HISTORY_WINDOW_DAYS as usize),
    }
}

/// Iterate the `len` calendar days ending at `today`, oldest first
fn window_ending(today: NaiveDate, len: u32) -> impl Iterator<Item = NaiveDate> {
    (0..i64::from(len))
        .rev()
        .map(move |offset| today - Duration::days(offset))
}

fn rounded_percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        0
    } else {
        (part as f64 * 100.0 / whole as f64).round() as u32
    }
}
