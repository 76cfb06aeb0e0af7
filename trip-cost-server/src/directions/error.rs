//! Directions client error types.

/// Errors from the directions HTTP client.
///
/// These never reach trip summaries directly; the client folds them into
/// [`DistanceResult::Unreachable`](super::DistanceResult::Unreachable).
#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    /// Network failure, timeout, or client construction failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status code
    #[error("API error {status}")]
    Status { status: u16 },
}
