//! In-process demo backend

use std::collections::BTreeMap;

use tracing::debug;

use super::error::BackendError;
use super::types::{ChallengeDetail, Verdict};
use super::ChallengeBackend;

const ACCEPTED_MESSAGE: &str = "Neural pathway secured! Quantum credits transferred...";
const REJECTED_MESSAGE: &str = "Access denied. Neural pattern mismatch detected.";

/// A puzzle served by [`LocalBackend`]
#[derive(Debug, Clone)]
pub struct LocalPuzzle {
    pub detail: ChallengeDetail,
    pub answer: String,
}

impl LocalPuzzle {
    /// Submissions are accepted when they contain the answer, ignoring case
    pub fn accepts(&self, submission: &str) -> bool {
        submission
            .to_lowercase()
            .contains(&self.answer.to_lowercase())
    }
}

/// Backend that answers from a fixed puzzle table.
///
/// Served details never include the answer.
#[derive(Debug, Clone, Default)]
pub struct LocalBackend {
    puzzles: BTreeMap<u32, LocalPuzzle>,
}

impl LocalBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_puzzle(mut self, id: u32, puzzle: LocalPuzzle) -> Self {
        self.puzzles.insert(id, puzzle);
        self
    }

    /// The three demo puzzles, keyed by builtin catalog id
    pub fn demo() -> Self {
        Self::new()
            .with_puzzle(
                1,
                demo_puzzle(
                    "Neural SQL Injection",
                    "Infiltrate the database through quantum SQL vulnerabilities",
                    "Easy",
                    100,
                    "The login form accepts any input. Try bypassing authentication with SQL injection. Hint: ' OR '1'='1",
                    "code",
                    "admin' OR '1'='1' --",
                ),
            )
            .with_puzzle(
                2,
                demo_puzzle(
                    "XSS Quantum Bypass",
                    "Breach dimensional XSS protection protocols",
                    "Medium",
                    200,
                    "Find a way to execute JavaScript in the comment field. The filter blocks <script> tags.",
                    "shield",
                    "<img src=x onerror=alert('XSS')>",
                ),
            )
            .with_puzzle(
                5,
                demo_puzzle(
                    "Digital Forensics Matrix",
                    "Trace data fragments through the cyber-matrix",
                    "Easy",
                    150,
                    "Examine the network traffic logs. Look for suspicious base64 encoded data.",
                    "eye",
                    "dGVzdF9mbGFn",
                ),
            )
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }
}

fn demo_puzzle(
    title: &str,
    description: &str,
    difficulty: &str,
    points: u32,
    clue: &str,
    icon_key: &str,
    answer: &str,
) -> LocalPuzzle {
    LocalPuzzle {
        detail: ChallengeDetail {
            title: title.to_string(),
            description: description.to_string(),
            difficulty: difficulty.to_string(),
            points,
            clue: clue.to_string(),
            answer: None,
            icon_key: Some(icon_key.to_string()),
        },
        answer: answer.to_string(),
    }
}

impl ChallengeBackend for LocalBackend {
    fn fetch_challenge(&self, id: u32) -> Result<ChallengeDetail, BackendError> {
        self.puzzles
            .get(&id)
            .map(|p| p.detail.clone())
            .ok_or(BackendError::NotFound(id))
    }

    fn submit_answer(&self, id: u32, answer: &str) -> Result<Verdict, BackendError> {
        let puzzle = self.puzzles.get(&id).ok_or(BackendError::NotFound(id))?;
        let success = puzzle.accepts(answer);
        debug!("Local verdict for challenge {}: {}", id, success);

        Ok(Verdict {
            success,
            message: if success {
                ACCEPTED_MESSAGE.to_string()
            } else {
                REJECTED_MESSAGE.to_string()
            },
        })
    }

    fn name(&self) -> &str {
        "local"
    }
}
