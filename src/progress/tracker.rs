//! Progression tracker - the only writer of [`PlayerProgress`]

use tracing::{debug, info};

use super::error::ProgressError;
use super::league::LeaguePromotion;
use super::policy::AccessPolicy;
use super::state::PlayerProgress;

/// A completion that raised the current level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUnlock {
    pub old_level: u32,
    pub new_level: u32,
}

/// Owns one player's progression and answers access queries.
///
/// Every session or test holds its own tracker; there is no shared instance.
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    progress: PlayerProgress,
    policy: AccessPolicy,
}

impl ProgressTracker {
    /// Fresh tracker with the default point-gate policy
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: AccessPolicy) -> Self {
        Self {
            progress: PlayerProgress::default(),
            policy,
        }
    }

    pub fn progress(&self) -> &PlayerProgress {
        &self.progress
    }

    pub fn policy(&self) -> AccessPolicy {
        self.policy
    }

    /// Start a session. Score and level are left as they are.
    pub fn login(&mut self, username: &str) -> Result<(), ProgressError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ProgressError::EmptyUsername);
        }

        self.progress.is_authenticated = true;
        self.progress.username = username.to_string();
        info!("Player '{}' logged in", username);
        Ok(())
    }

    /// Reset everything to the initial state
    pub fn logout(&mut self) {
        if self.progress.is_authenticated {
            info!("Player '{}' logged out", self.progress.username);
        }
        self.progress = PlayerProgress::default();
    }

    /// Add points to the score.
    ///
    /// Returns the league promotion if the new score crosses a league threshold.
    pub fn update_score(&mut self, points: i64) -> Result<Option<LeaguePromotion>, ProgressError> {
        let delta = u64::try_from(points).map_err(|_| ProgressError::NegativePoints(points))?;
        let old_score = self.progress.score;
        let new_score = old_score
            .checked_add(delta)
            .ok_or(ProgressError::ScoreOverflow { points })?;

        self.note_if_logged_out("update_score");
        self.progress.score = new_score;

        let promotion = LeaguePromotion::between(old_score, new_score);
        if let Some(promo) = &promotion {
            info!(
                "League promotion: {} -> {} at {} points",
                promo.from.name, promo.to.name, new_score
            );
        }
        Ok(promotion)
    }

    /// Mark a level as solved and unlock the one after it.
    ///
    /// Completing a level twice is a no-op; the current level never goes down.
    pub fn complete_level(&mut self, level: u32) -> Result<Option<LevelUnlock>, ProgressError> {
        if level == 0 {
            return Err(ProgressError::InvalidLevel(level));
        }

        self.note_if_logged_out("complete_level");
        if !self.progress.has_completed(level) {
            self.progress.completed_levels.push(level);
        }

        let old_level = self.progress.current_level;
        let new_level = old_level.max(level.saturating_add(1));
        self.progress.current_level = new_level;

        if new_level > old_level {
            info!("Level {} completed, level {} unlocked", level, new_level);
            Ok(Some(LevelUnlock {
                old_level,
                new_level,
            }))
        } else {
            debug!("Level {} completed, current level stays {}", level, old_level);
            Ok(None)
        }
    }

    /// Append a revealed hint for a level
    pub fn add_hint(&mut self, level: u32, hint: &str) -> Result<(), ProgressError> {
        if level == 0 {
            return Err(ProgressError::InvalidLevel(level));
        }
        if hint.trim().is_empty() {
            return Err(ProgressError::EmptyHint(level));
        }

        self.note_if_logged_out("add_hint");
        self.progress
            .hints
            .entry(level)
            .or_default()
            .push(hint.to_string());
        Ok(())
    }

    /// Whether the player may attempt `level` under the configured policy
    pub fn can_access_level(&self, level: u32) -> bool {
        self.policy.allows(&self.progress, level)
    }

    // Mutations while logged out are allowed, just noted.
    fn note_if_logged_out(&self, operation: &str) {
        if !self.progress.is_authenticated {
            debug!("{} called while logged out", operation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::SessionState;

    #[test]
    fn test_login_trims_and_keeps_score() {
        let mut tracker = ProgressTracker::new();
        tracker.update_score(150).unwrap();
        tracker.login("  neo ").unwrap();

        let progress = tracker.progress();
        assert_eq!(progress.username(), "neo");
        assert_eq!(progress.session_state(), SessionState::LoggedIn);
        assert_eq!(progress.score(), 150);
    }

    #[test]
    fn test_login_rejects_blank_name() {
        let mut tracker = ProgressTracker::new();
        assert_eq!(tracker.login("   "), Err(ProgressError::EmptyUsername));
        assert!(!tracker.progress().is_authenticated());
    }

    #[test]
    fn test_negative_points_rejected() {
        let mut tracker = ProgressTracker::new();
        tracker.update_score(50).unwrap();
        assert_eq!(
            tracker.update_score(-10),
            Err(ProgressError::NegativePoints(-10))
        );
        assert_eq!(tracker.progress().score(), 50);
    }

    #[test]
    fn test_score_overflow_rejected() {
        let mut tracker = ProgressTracker::new();
        tracker.update_score(i64::MAX).unwrap();
        tracker.update_score(i64::MAX).unwrap();
        assert!(matches!(
            tracker.update_score(i64::MAX),
            Err(ProgressError::ScoreOverflow { .. })
        ));
        assert_eq!(tracker.progress().score(), (i64::MAX as u64) * 2);
    }

    #[test]
    fn test_update_score_reports_promotion() {
        let mut tracker = ProgressTracker::new();
        assert!(tracker.update_score(400).unwrap().is_none());
        let promo = tracker.update_score(100).unwrap().unwrap();
        assert_eq!(promo.to.name, "Script Kiddie");
    }

    #[test]
    fn test_complete_level_out_of_order() {
        let mut tracker = ProgressTracker::new();
        let unlock = tracker.complete_level(5).unwrap();
        assert_eq!(
            unlock,
            Some(LevelUnlock {
                old_level: 1,
                new_level: 6
            })
        );
        // Completing an earlier level never locks anything again
        assert_eq!(tracker.complete_level(2).unwrap(), None);
        assert_eq!(tracker.progress().current_level(), 6);
        assert_eq!(tracker.progress().completed_levels(), &[5, 2]);
    }

    #[test]
    fn test_complete_level_zero_rejected() {
        let mut tracker = ProgressTracker::new();
        assert_eq!(
            tracker.complete_level(0),
            Err(ProgressError::InvalidLevel(0))
        );
        assert_eq!(tracker.progress().current_level(), 1);
    }

    #[test]
    fn test_complete_max_level_saturates() {
        let mut tracker = ProgressTracker::new();
        tracker.complete_level(u32::MAX).unwrap();
        assert_eq!(tracker.progress().current_level(), u32::MAX);
    }

    #[test]
    fn test_add_hint_validation() {
        let mut tracker = ProgressTracker::new();
        assert_eq!(tracker.add_hint(0, "x"), Err(ProgressError::InvalidLevel(0)));
        assert_eq!(tracker.add_hint(2, "  "), Err(ProgressError::EmptyHint(2)));
        assert!(tracker.progress().hints().is_empty());
    }

    #[test]
    fn test_sequential_policy_follows_completion() {
        let mut tracker = ProgressTracker::with_policy(AccessPolicy::Sequential);
        tracker.update_score(1000).unwrap();
        assert!(tracker.can_access_level(1));
        assert!(!tracker.can_access_level(2));

        tracker.complete_level(1).unwrap();
        assert!(tracker.can_access_level(2));
        assert!(!tracker.can_access_level(3));
    }

    #[test]
    fn test_logout_keeps_policy() {
        let mut tracker = ProgressTracker::with_policy(AccessPolicy::Sequential);
        tracker.login("trinity").unwrap();
        tracker.logout();
        assert_eq!(tracker.policy(), AccessPolicy::Sequential);
        assert_eq!(tracker.progress(), &PlayerProgress::default());
    }
}
