//! CyberForge - capture-the-flag progression core
//!
//! Tracks a player's level, score, solved challenges and revealed hints, and
//! talks to the puzzle backend that serves challenges and checks answers.
//!
//! ## Pieces
//!
//! 1. **Progress**: [`progress::ProgressTracker`] owns the player state and
//!    decides which levels are open under the configured
//!    [`progress::AccessPolicy`].
//!
//! 2. **Backend**: [`backend::ChallengeBackend`] with an HTTP client for the
//!    puzzle API and an offline demo backend.
//!
//! 3. **Session**: [`session::GameSession`] submits answers and applies
//!    accepted ones to the tracker. Catalog, leaderboard and profile views
//!    read from it.

pub mod activity;
pub mod backend;
pub mod catalog;
pub mod config;
pub mod leaderboard;
pub mod profile;
pub mod progress;
pub mod session;
pub mod streak;
pub mod telemetry;

pub use config::Config;
pub use progress::{PlayerProgress, ProgressError, ProgressTracker};
pub use session::{AttemptOutcome, GameSession, SessionError};
