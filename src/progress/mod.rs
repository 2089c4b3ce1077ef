//! Player progression: level, score, completed challenges and hints
//!
//! The [`ProgressTracker`] is the single source of truth the rest of the crate
//! reads from. Leagues and achievements are derived views on top of it.
//!
//! # Usage
//!
//! ```ignore
//! let mut tracker = ProgressTracker::new();
//! tracker.login("neo")?;
//! tracker.update_score(100)?;
//! assert!(tracker.can_access_level(2));
//! tracker.complete_level(1)?;
//! ```

mod achievements;
mod error;
mod league;
mod policy;
mod state;
mod tracker;

pub use achievements::{
    check_achievements, Achievement, AchievementId, AchievementInput, Rarity, ACHIEVEMENTS,
};
pub use error::ProgressError;
pub use league::{League, LeaguePromotion, LeagueStanding, LEAGUES};
pub use policy::{AccessPolicy, DEFAULT_POINTS_PER_LEVEL};
pub use state::{PlayerProgress, SessionState};
pub use tracker::{LevelUnlock, ProgressTracker};
