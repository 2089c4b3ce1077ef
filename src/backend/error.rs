//! Backend error type

/// Failure talking to a challenge backend
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Challenge {0} not found")]
    NotFound(u32),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Backend unreachable: {0}")]
    Unreachable(String),

    #[error("Invalid backend response: {0}")]
    Decode(String),
}

impl BackendError {
    /// HTTP status code, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound(_) => Some(404),
            Self::Status { status, .. } => Some(*status),
            Self::Unreachable(_) | Self::Decode(_) => None,
        }
    }
}
