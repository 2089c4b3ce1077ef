//! Player profile view

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::activity::{format_relative, ActivityKind};
use crate::leaderboard::Leaderboard;
use crate::progress::{Achievement, LeagueStanding, ACHIEVEMENTS};
use crate::session::{GameSession, SolveRecord};
use crate::streak::DayStreak;

/// Name shown when nobody is logged in
pub const GUEST_NAME: &str = "CyberAgent";

const RECENT_ACTIVITY_LIMIT: usize = 10;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementStatus {
    pub achievement: &'static Achievement,
    pub unlocked: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLine {
    pub kind: ActivityKind,
    pub title: String,
    pub points: u32,
    /// e.g. "2h ago"
    pub when: String,
}

/// Everything the profile page shows, computed from a session
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub username: String,
    pub total_score: u64,
    pub rank: usize,
    pub challenges_solved: usize,
    pub total_challenges: usize,
    pub current_level: u32,
    pub standing: LeagueStanding,
    /// Mean open-to-solve time, e.g. "12m 34s"
    pub average_time: Option<String>,
    pub favorite_category: Option<String>,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Age of the newest activity entry, e.g. "2h ago"
    pub last_active: Option<String>,
    pub achievements: Vec<AchievementStatus>,
    pub recent_activity: Vec<ActivityLine>,
}

impl Profile {
    pub fn build(session: &GameSession, leaderboard: &Leaderboard, now: DateTime<Utc>) -> Self {
        let progress = session.progress();
        let username = if progress.is_authenticated() {
            progress.username().to_string()
        } else {
            GUEST_NAME.to_string()
        };

        let achievements = ACHIEVEMENTS
            .iter()
            .map(|a| AchievementStatus {
                achievement: a,
                unlocked: session.achievements().contains(&a.id),
            })
            .collect();

        let recent = session.activity().recent(RECENT_ACTIVITY_LIMIT);
        let last_active = recent.first().map(|e| format_relative(e.at, now));
        let recent_activity = recent
            .into_iter()
            .map(|e| ActivityLine {
                kind: e.kind,
                title: e.title.clone(),
                points: e.points,
                when: format_relative(e.at, now),
            })
            .collect();

        let solves = session.solves();
        let streak = DayStreak::from_days(
            solves.iter().map(|s| s.at.date_naive()),
            now.date_naive(),
        );

        Self {
            username,
            total_score: progress.score(),
            rank: leaderboard.rank_for(progress.score()),
            challenges_solved: progress.solved_count(),
            total_challenges: session.catalog().len(),
            current_level: progress.current_level(),
            standing: LeagueStanding::new(progress.score()),
            average_time: average_solve_time(solves).map(format_duration),
            favorite_category: favorite_category(solves),
            current_streak: streak.current,
            longest_streak: streak.longest,
            last_active,
            achievements,
            recent_activity,
        }
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }
}

/// Mean of the timed solves
fn average_solve_time(solves: &[SolveRecord]) -> Option<Duration> {
    let timed: Vec<Duration> = solves.iter().filter_map(|s| s.took).collect();
    if timed.is_empty() {
        return None;
    }
    let total = timed.iter().fold(Duration::zero(), |acc, d| acc + *d);
    Some(total / timed.len() as i32)
}

/// Category with the most solves; ties go to the one solved first
fn favorite_category(solves: &[SolveRecord]) -> Option<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for category in solves.iter().filter_map(|s| s.category.as_deref()) {
        match counts.iter_mut().find(|(c, _)| *c == category) {
            Some((_, n)) => *n += 1,
            None => counts.push((category, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (category, n) in counts {
        if best.is_none_or(|(_, top)| n > top) {
            best = Some((category, n));
        }
    }
    best.map(|(category, _)| category.to_string())
}

/// "45s", "12m 34s" or "2h 5m"
fn format_duration(d: Duration) -> String {
    let secs = d.num_seconds().max(0);
    if secs >= 3600 {
        format!("{}h {}m", secs / 3600, secs % 3600 / 60)
    } else if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}s", secs)
    }
}
