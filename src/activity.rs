//! Recent activity feed shown on the profile page

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Default number of entries kept
pub const DEFAULT_MAX_ENTRIES: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    ChallengeSolved,
    LevelUp,
    Achievement,
    LeaguePromotion,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub title: String,
    /// Points earned by this event (0 for non-scoring events)
    pub points: u32,
    pub at: DateTime<Utc>,
}

/// Bounded log, oldest entries are dropped first
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    max_entries: usize,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_ENTRIES)
    }
}

impl ActivityLog {
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: max_entries.max(1),
        }
    }

    pub fn record(
        &mut self,
        kind: ActivityKind,
        title: impl Into<String>,
        points: u32,
        at: DateTime<Utc>,
    ) {
        if self.entries.len() == self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(ActivityEntry {
            kind,
            title: title.into(),
            points,
            at,
        });
    }

    /// Up to `n` entries, newest first
    pub fn recent(&self, n: usize) -> Vec<&ActivityEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Format relative time (e.g., "just now", "2m ago", "1h ago", "3d ago")
pub fn format_relative(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - at).num_seconds().max(0);
    if secs < 60 {
        "just now".to_string()
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86400 {
        format!("{}h ago", secs / 3600)
    } else {
        format!("{}d ago", secs / 86400)
    }
}
