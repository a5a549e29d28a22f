/// Domain module containing core business logic and data types
///
/// This module defines the core entities (Habit, HabitId) and the streak
/// calculation. These types represent the fundamental concepts in the
/// habit tracking system.

pub mod habit;
pub mod streak;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use streak::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
///
/// The store surface degrades invalid input to no-ops, so these never escape
/// the crate's public mutation API; they exist so the entity constructors
/// can signal exactly what was rejected.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),
}
