//! Validation errors raised by the progression tracker

/// Rejected input to a [`super::ProgressTracker`] operation.
///
/// State is never modified when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    #[error("Username must not be empty")]
    EmptyUsername,

    #[error("Points must not be negative (got {0})")]
    NegativePoints(i64),

    #[error("Adding {points} points would overflow the score")]
    ScoreOverflow { points: i64 },

    #[error("Invalid level {0}: levels start at 1")]
    InvalidLevel(u32),

    #[error("Hint for level {0} must not be empty")]
    EmptyHint(u32),
}
