//! Challenge catalog
//!
//! The list of known challenges and how each one looks to a given player:
//! locked, open, or already solved.

mod builtin;
mod challenge;

pub use challenge::{Challenge, ChallengeStatus, Difficulty};

use serde::Serialize;

use crate::progress::{PlayerProgress, ProgressTracker};

/// Headline numbers for the challenge board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardSummary {
    pub completed: usize,
    pub score: u64,
    /// Challenges that are not locked (open or solved)
    pub available: usize,
}

/// Ordered set of challenges
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    challenges: Vec<Challenge>,
}

impl Catalog {
    pub fn new(challenges: Vec<Challenge>) -> Self {
        Self { challenges }
    }

    /// The six stock challenges
    pub fn builtin() -> Self {
        Self::new(builtin::challenges())
    }

    pub fn get(&self, id: u32) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Challenge> {
        self.challenges.iter()
    }

    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for c in &self.challenges {
            if !seen.contains(&c.category.as_str()) {
                seen.push(&c.category);
            }
        }
        seen
    }

    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Challenge> {
        self.challenges.iter().filter(move |c| c.category == category)
    }

    /// True when the category has challenges and all of them are solved
    pub fn category_cleared(&self, category: &str, progress: &PlayerProgress) -> bool {
        let mut any = false;
        for c in self.in_category(category) {
            if !progress.has_completed(c.id) {
                return false;
            }
            any = true;
        }
        any
    }

    /// Status of one challenge for the tracker's player
    pub fn status(&self, challenge: &Challenge, tracker: &ProgressTracker) -> ChallengeStatus {
        if tracker.progress().has_completed(challenge.id) {
            ChallengeStatus::Solved
        } else if tracker.can_access_level(challenge.level) {
            ChallengeStatus::Unlocked
        } else {
            ChallengeStatus::Locked
        }
    }

    /// Every challenge with its status, in catalog order
    pub fn board<'a>(&'a self, tracker: &ProgressTracker) -> Vec<(&'a Challenge, ChallengeStatus)> {
        self.challenges
            .iter()
            .map(|c| (c, self.status(c, tracker)))
            .collect()
    }

    pub fn summary(&self, tracker: &ProgressTracker) -> BoardSummary {
        let available = self
            .challenges
            .iter()
            .filter(|c| self.status(c, tracker) != ChallengeStatus::Locked)
            .count();

        BoardSummary {
            completed: tracker.progress().solved_count(),
            score: tracker.progress().score(),
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::AccessPolicy;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.get(3).unwrap().title, "Binary Neural Override");
        assert_eq!(
            catalog.categories(),
            vec!["Web", "Pwn", "Crypto", "Forensics"]
        );
        assert_eq!(catalog.in_category("Web").count(), 3);
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn test_status_follows_point_gate() {
        let catalog = Catalog::builtin();
        let mut tracker = ProgressTracker::new();
        let binary = catalog.get(3).unwrap(); // level 2

        assert_eq!(catalog.status(binary, &tracker), ChallengeStatus::Locked);
        tracker.update_score(100).unwrap();
        assert_eq!(catalog.status(binary, &tracker), ChallengeStatus::Unlocked);
        tracker.complete_level(3).unwrap();
        assert_eq!(catalog.status(binary, &tracker), ChallengeStatus::Solved);
    }

    #[test]
    fn test_summary_counts() {
        let catalog = Catalog::builtin();
        let mut tracker = ProgressTracker::new();
        // Level 1 challenges: 1, 2, 5
        assert_eq!(catalog.summary(&tracker).available, 3);

        tracker.update_score(200).unwrap();
        tracker.complete_level(1).unwrap();
        let summary = catalog.summary(&tracker);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.score, 200);
        assert_eq!(summary.available, 6);
    }

    #[test]
    fn test_sequential_board() {
        let catalog = Catalog::builtin();
        let mut tracker = ProgressTracker::with_policy(AccessPolicy::Sequential);
        tracker.update_score(10_000).unwrap();
        let locked = catalog
            .board(&tracker)
            .iter()
            .filter(|(_, s)| *s == ChallengeStatus::Locked)
            .count();
        assert_eq!(locked, 3);
    }

    #[test]
    fn test_category_cleared_requires_challenges() {
        let catalog = Catalog::builtin();
        let mut tracker = ProgressTracker::new();
        assert!(!catalog.category_cleared("Stego", tracker.progress()));
        assert!(!catalog.category_cleared("Forensics", tracker.progress()));
        tracker.complete_level(5).unwrap();
        assert!(catalog.category_cleared("Forensics", tracker.progress()));
    }
}
