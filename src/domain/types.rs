/// Core types used throughout the domain layer
///
/// This module defines the fundamental types like HabitId, the calendar day
/// key, and the default color palette used by Habit and the store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a habit
///
/// This is a wrapper around UUID to provide type safety - you can't
/// accidentally pass some other string where a habit ID is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitId(pub Uuid);

impl HabitId {
    /// Generate a new random habit ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a habit ID from a string representation
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for HabitId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for HabitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Render a calendar day as its canonical `YYYY-MM-DD` key
///
/// Completion sets are keyed by `NaiveDate`, whose textual form is already
/// the date-only ISO string. This helper exists so the presentation contract
/// has one named place producing the key format.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Default color palette offered when creating habits
///
/// Colors are opaque display tokens; the store never interprets them.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#3B82F6", "#10B981", "#8B5CF6", "#F59E0B", "#EF4444", "#EC4899", "#14B8A6", "#F97316",
];

/// First palette entry, used when a caller has no color preference
pub const DEFAULT_COLOR: &str = DEFAULT_PALETTE[0];
