/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a recurring
/// activity being tracked, along with its completion history and validation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::{DomainError, HabitId};

/// A habit represents something the user wants to do every day
///
/// Each habit carries its full completion history as a set of calendar days
/// and a cached streak value. The streak is always derivable from the
/// completion set plus the current date; it is recomputed by the store after
/// every toggle and never mutated independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name (e.g., "Morning Run", "Read for 30min")
    pub name: String,
    /// Display color token, not interpreted by the store
    pub color: String,
    /// Calendar days on which this habit was marked done
    pub completions: BTreeSet<NaiveDate>,
    /// Cached count of consecutive completed days ending today
    pub streak: u32,
    /// When this habit was created
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create a new habit with validation
    ///
    /// The name is trimmed before storing; an empty trimmed name is rejected.
    /// New habits start with an empty completion history and a zero streak.
    pub fn new(name: &str, color: &str, created_at: DateTime<Utc>) -> Result<Self, DomainError> {
        let name = Self::validate_name(name)?;

        Ok(Self {
            id: HabitId::new(),
            name,
            color: color.to_string(),
            completions: BTreeSet::new(),
            streak: 0,
            created_at,
        })
    }

    /// Check whether a given calendar day is marked complete
    pub fn is_completed_on(&self, day: NaiveDate) -> bool {
        self.completions.contains(&day)
    }

    /// Total number of days ever marked complete
    pub fn total_completions(&self) -> usize {
        self.completions.len()
    }

    /// Validate and normalize a habit name
    fn validate_name(name: &str) -> Result<String, DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string(),
            ));
        }

        Ok(trimmed.to_string())
    }
}
