//! HTTP client for the puzzle API.

use std::time::Duration;

use tracing::{debug, warn};

use super::error::BackendError;
use super::types::{AnswerSubmission, ChallengeDetail, Verdict};
use super::ChallengeBackend;

/// Default puzzle API base URL
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5248/api/puzzle";

const MAX_ERROR_BODY_CHARS: usize = 512;

/// Blocking JSON client for the puzzle API.
///
/// Requests are made once; failures are returned to the caller, never retried.
#[derive(Clone)]
pub struct HttpBackend {
    base_url: String,
    client: ureq::Agent,
}

impl HttpBackend {
    /// Client for the default URL with default timeouts
    pub fn new() -> Self {
        Self::with_url(DEFAULT_BACKEND_URL)
    }

    /// Client for a custom URL with default timeouts
    pub fn with_url(base_url: impl Into<String>) -> Self {
        Self::with_timeouts(base_url, Duration::from_secs(5), Duration::from_secs(30))
    }

    pub fn with_timeouts(
        base_url: impl Into<String>,
        connect_timeout: Duration,
        read_timeout: Duration,
    ) -> Self {
        let client = ureq::AgentBuilder::new()
            .timeout_connect(connect_timeout)
            .timeout_read(read_timeout)
            .build();

        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn challenge_url(&self, id: u32) -> String {
        format!("{}/challenge/{}", self.base_url, id)
    }

    fn level_url(&self, id: u32) -> String {
        format!("{}/level{}", self.base_url, id)
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull `message` (or `error`) out of a JSON error body, else return it trimmed
fn error_body_text(body: &str) -> String {
    let body = body.trim();
    let text = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .or_else(|| value.get("error"))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string());
    text.chars().take(MAX_ERROR_BODY_CHARS).collect()
}

/// Turn a ureq failure into a backend error, reading the body of non-2xx answers
fn map_ureq_error(err: ureq::Error) -> BackendError {
    match err {
        ureq::Error::Status(status, resp) => {
            let body = error_body_text(&resp.into_string().unwrap_or_default());
            BackendError::Status { status, body }
        }
        ureq::Error::Transport(transport) => BackendError::Unreachable(transport.to_string()),
    }
}

impl ChallengeBackend for HttpBackend {
    fn fetch_challenge(&self, id: u32) -> Result<ChallengeDetail, BackendError> {
        let url = self.challenge_url(id);
        debug!("GET {}", url);

        let response = self.client.get(&url).call().map_err(|e| match map_ureq_error(e) {
            BackendError::Status { status: 404, .. } => BackendError::NotFound(id),
            other => {
                warn!("Failed to fetch challenge {}: {}", id, other);
                other
            }
        })?;

        response
            .into_json::<ChallengeDetail>()
            .map_err(|e| BackendError::Decode(e.to_string()))
    }

    fn submit_answer(&self, id: u32, answer: &str) -> Result<Verdict, BackendError> {
        let url = self.level_url(id);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .send_json(AnswerSubmission { answer })
            .map_err(|e| {
                let err = map_ureq_error(e);
                warn!("Failed to submit answer for challenge {}: {}", id, err);
                err
            })?;

        response
            .into_json::<Verdict>()
            .map_err(|e| BackendError::Decode(e.to_string()))
    }

    fn name(&self) -> &str {
        "http"
    }
}
