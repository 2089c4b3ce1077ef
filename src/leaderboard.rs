//! Leaderboard ranking

use serde::Serialize;

use crate::progress::PlayerProgress;

/// One player on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: u64,
    pub challenges_solved: usize,
    pub avatar: String,
    pub is_online: bool,
}

impl LeaderboardEntry {
    pub fn new(username: impl Into<String>, score: u64, challenges_solved: usize) -> Self {
        Self {
            username: username.into(),
            score,
            challenges_solved,
            avatar: String::new(),
            is_online: false,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    pub fn online(mut self, is_online: bool) -> Self {
        self.is_online = is_online;
        self
    }
}

/// An entry with its 1-based position
#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
}

#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new(entries: Vec<LeaderboardEntry>) -> Self {
        Self { entries }
    }

    /// Demo board with eight players
    pub fn demo() -> Self {
        Self::new(vec![
            LeaderboardEntry::new("CyberNinja", 2850, 12).with_avatar("🥷").online(true),
            LeaderboardEntry::new("QuantumHacker", 2750, 11).with_avatar("⚡").online(true),
            LeaderboardEntry::new("NeuralGhost", 2650, 10).with_avatar("👻"),
            LeaderboardEntry::new("CodeBreaker", 2400, 9).with_avatar("🔥").online(true),
            LeaderboardEntry::new("CryptoLord", 2200, 8).with_avatar("💎"),
            LeaderboardEntry::new("BinaryMaster", 2000, 7).with_avatar("🤖").online(true),
            LeaderboardEntry::new("DigitalPhantom", 1850, 6).with_avatar("💀"),
            LeaderboardEntry::new("SystemBreacher", 1700, 6).with_avatar("🛡️").online(true),
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted by score, then challenges solved, then username
    pub fn ranked(&self) -> Vec<RankedEntry> {
        rank(self.entries.clone())
    }

    /// Rank a player with `score` would take (ties share the better rank)
    pub fn rank_for(&self, score: u64) -> usize {
        1 + self.entries.iter().filter(|e| e.score > score).count()
    }

    /// Ranked board including the logged-in player
    pub fn with_player(&self, progress: &PlayerProgress) -> Vec<RankedEntry> {
        let mut entries = self.entries.clone();
        if progress.is_authenticated() {
            entries.push(
                LeaderboardEntry::new(
                    progress.username(),
                    progress.score(),
                    progress.solved_count(),
                )
                .online(true),
            );
        }
        rank(entries)
    }
}

fn rank(mut entries: Vec<LeaderboardEntry>) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.challenges_solved.cmp(&a.challenges_solved))
            .then_with(|| a.username.cmp(&b.username))
    });
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| RankedEntry { rank: i + 1, entry })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::ProgressTracker;

    #[test]
    fn test_demo_ranking() {
        let ranked = Leaderboard::demo().ranked();
        assert_eq!(ranked.len(), 8);
        assert_eq!(ranked[0].entry.username, "CyberNinja");
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[7].entry.username, "SystemBreacher");
    }

    #[test]
    fn test_tie_break() {
        let board = Leaderboard::new(vec![
            LeaderboardEntry::new("b", 100, 1),
            LeaderboardEntry::new("a", 100, 1),
            LeaderboardEntry::new("c", 100, 2),
        ]);
        let names: Vec<_> = board
            .ranked()
            .into_iter()
            .map(|r| r.entry.username)
            .collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_rank_for_score() {
        let board = Leaderboard::demo();
        assert_eq!(board.rank_for(0), 9);
        assert_eq!(board.rank_for(2850), 1);
        assert_eq!(board.rank_for(2700), 3);
    }

    #[test]
    fn test_with_player() {
        let board = Leaderboard::demo();
        let mut tracker = ProgressTracker::new();
        assert_eq!(board.with_player(tracker.progress()).len(), 8);

        tracker.login("neo").unwrap();
        tracker.update_score(2500).unwrap();
        let ranked = board.with_player(tracker.progress());
        let me = ranked.iter().find(|r| r.entry.username == "neo").unwrap();
        assert_eq!(me.rank, 4);
        assert!(me.entry.is_online);
    }
}
