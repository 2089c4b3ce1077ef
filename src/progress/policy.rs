//! Level gating policy

use serde::{Deserialize, Serialize};

use super::state::PlayerProgress;

/// Points required per level above the first under the point-gate.
pub const DEFAULT_POINTS_PER_LEVEL: u64 = 100;

/// The one rule deciding whether a player may attempt a level.
///
/// Catalog status and answer submission both go through the tracker's policy,
/// so switching it here switches it everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AccessPolicy {
    /// Level `n > 1` opens once `score >= (n - 1) * points_per_level`.
    /// Completed levels are not consulted.
    PointGate {
        #[serde(default = "default_points_per_level")]
        points_per_level: u64,
    },
    /// Level `n` opens once `n <= current_level`, i.e. after level `n - 1`
    /// has been completed.
    Sequential,
}

fn default_points_per_level() -> u64 {
    DEFAULT_POINTS_PER_LEVEL
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::PointGate {
            points_per_level: DEFAULT_POINTS_PER_LEVEL,
        }
    }
}

impl AccessPolicy {
    /// Evaluate the policy against a progress snapshot
    pub fn allows(&self, progress: &PlayerProgress, level: u32) -> bool {
        match level {
            0 => false,
            1 => true,
            n => match self {
                Self::PointGate { points_per_level } => {
                    let required = u64::from(n - 1).saturating_mul(*points_per_level);
                    progress.score() >= required
                }
                Self::Sequential => n <= progress.current_level(),
            },
        }
    }

    /// Score needed for `level` under the point-gate (None for `Sequential`)
    pub fn required_score(&self, level: u32) -> Option<u64> {
        match self {
            Self::PointGate { points_per_level } => {
                Some(u64::from(level.saturating_sub(1)).saturating_mul(*points_per_level))
            }
            Self::Sequential => None,
        }
    }
}
