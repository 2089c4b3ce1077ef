//! Player progress data model

use std::collections::BTreeMap;

use serde::Serialize;

/// Login state of a progress record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

/// Everything the tracker knows about one player.
///
/// Fields are only mutated through [`super::ProgressTracker`]; readers get
/// accessors. Serializes with camelCase keys for display snapshots; there is
/// no way back in, so a record can only be built by the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProgress {
    pub(super) current_level: u32,
    pub(super) score: u64,
    pub(super) is_authenticated: bool,
    pub(super) username: String,
    /// Set semantics, kept in completion order
    pub(super) completed_levels: Vec<u32>,
    pub(super) hints: BTreeMap<u32, Vec<String>>,
}

impl Default for PlayerProgress {
    fn default() -> Self {
        Self {
            current_level: 1,
            score: 0,
            is_authenticated: false,
            username: String::new(),
            completed_levels: Vec::new(),
            hints: BTreeMap::new(),
        }
    }
}

impl PlayerProgress {
    /// Highest level unlocked by completion bookkeeping
    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn session_state(&self) -> SessionState {
        if self.is_authenticated {
            SessionState::LoggedIn
        } else {
            SessionState::LoggedOut
        }
    }

    /// Display name, empty when logged out
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Completed levels in the order they were first completed
    pub fn completed_levels(&self) -> &[u32] {
        &self.completed_levels
    }

    pub fn has_completed(&self, level: u32) -> bool {
        self.completed_levels.contains(&level)
    }

    pub fn solved_count(&self) -> usize {
        self.completed_levels.len()
    }

    /// Revealed hints for a level, in reveal order
    pub fn hints_for(&self, level: u32) -> &[String] {
        self.hints.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn hints(&self) -> &BTreeMap<u32, Vec<String>> {
        &self.hints
    }
}
