//! Game session - ties the tracker to the challenge backend
//!
//! The session is the caller the tracker expects: it fetches challenges,
//! submits answers, and on an accepted answer awards the points it already
//! knows client-side before completing the level. Backend failures never touch
//! the tracker.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use crate::activity::{ActivityKind, ActivityLog};
use crate::backend::{BackendError, ChallengeBackend, ChallengeDetail};
use crate::catalog::{BoardSummary, Catalog, Challenge, ChallengeStatus};
use crate::progress::{
    check_achievements, Achievement, AchievementId, AchievementInput, LeaguePromotion,
    LevelUnlock, PlayerProgress, ProgressError, ProgressTracker,
};

const NOT_FOUND_MESSAGE: &str = "Neural pathway not found. Challenge does not exist.";
const VERIFY_FAILED_MESSAGE: &str = "Verification failed. Unable to reach the neural network.";
const LOCKED_MESSAGE: &str = "Access restricted. Earn more credits to unlock this challenge.";
const EMPTY_ANSWER_MESSAGE: &str = "Enter an answer before submitting.";
const NOT_OPENED_MESSAGE: &str = "Open the challenge before requesting a hint.";

/// Errors from session operations
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Progress(#[from] ProgressError),

    #[error("Failed to load challenge {id}: {source}")]
    Fetch {
        id: u32,
        #[source]
        source: BackendError,
    },

    #[error("Failed to verify answer for challenge {id}: {source}")]
    Verify {
        id: u32,
        #[source]
        source: BackendError,
    },

    #[error("Challenge {0} is locked")]
    Locked(u32),

    #[error("Answer must not be empty")]
    EmptyAnswer,

    #[error("Challenge {0} is unknown")]
    UnknownChallenge(u32),

    #[error("Challenge {0} has not been opened")]
    NotOpened(u32),
}

impl SessionError {
    /// Static text for the player; detail stays in the error chain and logs
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Fetch { .. } | Self::UnknownChallenge(_) => NOT_FOUND_MESSAGE,
            Self::Verify { .. } => VERIFY_FAILED_MESSAGE,
            Self::Locked(_) => LOCKED_MESSAGE,
            Self::EmptyAnswer => EMPTY_ANSWER_MESSAGE,
            Self::NotOpened(_) => NOT_OPENED_MESSAGE,
            Self::Progress(ProgressError::EmptyUsername) => "Enter a username to continue.",
            Self::Progress(_) => "Invalid input.",
        }
    }
}

/// Result of an answer submission the backend responded to
#[derive(Debug, Clone)]
pub struct AttemptOutcome {
    pub accepted: bool,
    /// Message from the backend
    pub message: String,
    pub points_awarded: u32,
    /// Accepted, but the challenge had been solved before
    pub already_solved: bool,
    pub level_unlock: Option<LevelUnlock>,
    pub promotion: Option<LeaguePromotion>,
    pub achievements: Vec<AchievementId>,
}

/// A challenge solved during this session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveRecord {
    pub id: u32,
    /// Catalog category, if the challenge is in the catalog
    pub category: Option<String>,
    /// Time from opening to solving; None if it was solved without opening
    pub took: Option<Duration>,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct OpenedChallenge {
    detail: ChallengeDetail,
    opened_at: DateTime<Utc>,
}

/// One player's session against one backend
pub struct GameSession {
    tracker: ProgressTracker,
    backend: Box<dyn ChallengeBackend>,
    catalog: Catalog,
    activity: ActivityLog,
    achievements: Vec<AchievementId>,
    opened: HashMap<u32, OpenedChallenge>,
    solves: Vec<SolveRecord>,
}

impl GameSession {
    pub fn new(
        tracker: ProgressTracker,
        backend: Box<dyn ChallengeBackend>,
        catalog: Catalog,
    ) -> Self {
        Self {
            tracker,
            backend,
            catalog,
            activity: ActivityLog::default(),
            achievements: Vec::new(),
            opened: HashMap::new(),
            solves: Vec::new(),
        }
    }

    /// Replace the activity log (e.g. with a configured capacity)
    pub fn with_activity_log(mut self, activity: ActivityLog) -> Self {
        self.activity = activity;
        self
    }

    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    pub fn progress(&self) -> &PlayerProgress {
        self.tracker.progress()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Achievements unlocked this session, in unlock order
    pub fn achievements(&self) -> &[AchievementId] {
        &self.achievements
    }

    /// Challenges solved this session, in solve order
    pub fn solves(&self) -> &[SolveRecord] {
        &self.solves
    }

    fn fastest_solve(&self) -> Option<Duration> {
        self.solves.iter().filter_map(|s| s.took).min()
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    pub fn board(&self) -> Vec<(&Challenge, ChallengeStatus)> {
        self.catalog.board(&self.tracker)
    }

    pub fn summary(&self) -> BoardSummary {
        self.catalog.summary(&self.tracker)
    }

    pub fn login(&mut self, username: &str) -> Result<(), SessionError> {
        self.tracker.login(username)?;
        Ok(())
    }

    /// Log out and forget everything this session collected
    pub fn logout(&mut self) {
        self.tracker.logout();
        self.activity.clear();
        self.achievements.clear();
        self.opened.clear();
        self.solves.clear();
    }

    /// Fetch a challenge and remember when it was opened
    pub fn open_challenge(&mut self, id: u32) -> Result<ChallengeDetail, SessionError> {
        let detail = self
            .backend
            .fetch_challenge(id)
            .map_err(|source| SessionError::Fetch { id, source })?;

        debug!("Opened challenge {} via {} backend", id, self.backend.name());
        self.opened.insert(
            id,
            OpenedChallenge {
                detail: detail.clone(),
                opened_at: Utc::now(),
            },
        );
        Ok(detail)
    }

    /// Record the clue of an opened challenge as a revealed hint
    pub fn reveal_hint(&mut self, id: u32) -> Result<String, SessionError> {
        let clue = self
            .opened
            .get(&id)
            .map(|o| o.detail.clue.clone())
            .ok_or(SessionError::NotOpened(id))?;

        if !self.tracker.progress().hints_for(id).contains(&clue) {
            self.tracker.add_hint(id, &clue)?;
        }
        Ok(clue)
    }

    /// Level checked against the access policy for a challenge id
    fn gate_level(&self, id: u32) -> u32 {
        self.catalog.get(id).map(|c| c.level).unwrap_or(id)
    }

    /// Points for a challenge as known on this side of the wire
    fn known_points(&self, id: u32) -> Option<u32> {
        self.opened
            .get(&id)
            .map(|o| o.detail.points)
            .or_else(|| self.catalog.get(id).map(|c| c.points))
    }

    fn title_for(&self, id: u32) -> String {
        self.opened
            .get(&id)
            .map(|o| o.detail.title.clone())
            .or_else(|| self.catalog.get(id).map(|c| c.title.clone()))
            .unwrap_or_else(|| format!("Challenge #{}", id))
    }

    /// Submit an answer and apply the verdict to the tracker
    pub fn submit_answer(&mut self, id: u32, answer: &str) -> Result<AttemptOutcome, SessionError> {
        if id == 0 {
            return Err(SessionError::UnknownChallenge(id));
        }
        let answer = answer.trim();
        if answer.is_empty() {
            return Err(SessionError::EmptyAnswer);
        }
        if !self.tracker.can_access_level(self.gate_level(id)) {
            return Err(SessionError::Locked(id));
        }
        let points = self
            .known_points(id)
            .ok_or(SessionError::UnknownChallenge(id))?;

        let verdict = self
            .backend
            .submit_answer(id, answer)
            .map_err(|source| SessionError::Verify { id, source })?;

        let mut outcome = AttemptOutcome {
            accepted: verdict.success,
            message: verdict.message,
            points_awarded: 0,
            already_solved: false,
            level_unlock: None,
            promotion: None,
            achievements: Vec::new(),
        };

        if !verdict.success {
            debug!("Answer for challenge {} rejected", id);
            return Ok(outcome);
        }
        if self.tracker.progress().has_completed(id) {
            outcome.already_solved = true;
            return Ok(outcome);
        }

        let now = Utc::now();
        outcome.promotion = self.tracker.update_score(i64::from(points))?;
        outcome.level_unlock = self.tracker.complete_level(id)?;
        outcome.points_awarded = points;
        info!("Challenge {} solved for {} points", id, points);

        self.solves.push(SolveRecord {
            id,
            category: self.catalog.get(id).map(|c| c.category.clone()),
            took: self.opened.get(&id).map(|o| now - o.opened_at),
            at: now,
        });

        let title = self.title_for(id);
        self.activity
            .record(ActivityKind::ChallengeSolved, title, points, now);
        if let Some(unlock) = outcome.level_unlock {
            self.activity.record(
                ActivityKind::LevelUp,
                format!("Reached Level {}", unlock.new_level),
                0,
                now,
            );
        }
        if let Some(promo) = &outcome.promotion {
            self.activity.record(
                ActivityKind::LeaguePromotion,
                format!("Joined {}", promo.to.name),
                0,
                now,
            );
        }

        outcome.achievements = self.check_achievements(now);
        Ok(outcome)
    }

    fn check_achievements(&mut self, now: DateTime<Utc>) -> Vec<AchievementId> {
        let input = AchievementInput {
            progress: self.tracker.progress(),
            catalog: &self.catalog,
            fastest_solve: self.fastest_solve(),
        };
        let newly = check_achievements(&input, &self.achievements);

        for id in &newly {
            if let Some(achievement) = Achievement::get(*id) {
                info!("Achievement unlocked: {}", achievement.name);
                self.activity.record(
                    ActivityKind::Achievement,
                    format!("{} Achievement", achievement.name),
                    0,
                    now,
                );
            }
        }
        self.achievements.extend(newly.iter().copied());
        newly
    }
}
