//! Wire types for the challenge backend

use serde::{Deserialize, Serialize};

/// `GET /challenge/{id}` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDetail {
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub points: u32,
    pub clue: String,
    /// Only present on backends that verify answers client-side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_key: Option<String>,
}

/// `POST /level{id}` request body
#[derive(Debug, Clone, Serialize)]
pub struct AnswerSubmission<'a> {
    pub answer: &'a str,
}

/// `POST /level{id}` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}
