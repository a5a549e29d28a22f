/// Streak calculation over a habit's completion history
///
/// This module implements the bounded backward scan that turns a completion
/// set and the current date into the cached streak value.

use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

/// Maximum number of days the streak scan walks into the past
pub const STREAK_LOOKBACK_DAYS: u32 = 365;

/// Count consecutive completed days walking backward from `today`
///
/// The scan starts at `today` itself and stops at the first absent day, so an
/// unbroken run of past completions contributes nothing unless today is also
/// complete. Capped at [`STREAK_LOOKBACK_DAYS`] iterations. The walk always
/// anchors on today, never on whichever day was last toggled: marking a past
/// day only changes the result when that day sits on the unbroken chain
/// immediately preceding today.
pub fn current_streak(completions: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut checking_date = today;

    for _ in 0..STREAK_LOOKBACK_DAYS {
        if completions.contains(&checking_date) {
            streak += 1;
            checking_date = checking_date - Duration::days(1);
        } else {
            break;
        }
    }

    streak
}
