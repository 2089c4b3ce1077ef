//! Challenge backend clients
//!
//! The backend serves challenge details and checks answers. Two
//! implementations exist:
//!
//! - [`HttpBackend`]: JSON over HTTP against the puzzle API
//!   (`GET /challenge/{id}`, `POST /level{id}`)
//! - [`LocalBackend`]: in-process demo puzzles, no network

mod error;
mod http;
mod local;
mod types;

pub use error::BackendError;
pub use http::{HttpBackend, DEFAULT_BACKEND_URL};
pub use local::{LocalBackend, LocalPuzzle};
pub use types::{AnswerSubmission, ChallengeDetail, Verdict};

/// Source of challenge details and answer verdicts
pub trait ChallengeBackend: Send + Sync {
    /// Fetch a challenge by id
    fn fetch_challenge(&self, id: u32) -> Result<ChallengeDetail, BackendError>;

    /// Submit an answer for a challenge
    fn submit_answer(&self, id: u32, answer: &str) -> Result<Verdict, BackendError>;

    /// Short name for logs
    fn name(&self) -> &str;
}
