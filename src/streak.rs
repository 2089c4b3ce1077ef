//! Daily solve streaks
//!
//! A streak counts consecutive days with at least one solve. The current
//! streak stays alive while the last solve was today or yesterday.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStreak {
    pub current: u32,
    pub longest: u32,
}

impl DayStreak {
    /// Streaks over the given solve days (any order, duplicates allowed)
    pub fn from_days(days: impl IntoIterator<Item = NaiveDate>, today: NaiveDate) -> Self {
        let days: BTreeSet<NaiveDate> = days.into_iter().filter(|d| *d <= today).collect();
        let Some(&last) = days.last() else {
            return Self::default();
        };

        let mut longest = 0;
        let mut run = 0;
        let mut prev: Option<NaiveDate> = None;
        for &day in &days {
            run = match prev {
                Some(p) if (day - p).num_days() == 1 => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            prev = Some(day);
        }

        // `run` is now the run ending on the last solve day
        let current = if (today - last).num_days() <= 1 { run } else { 0 };
        Self { current, longest }
    }
}
