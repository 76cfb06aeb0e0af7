//! Domain error types.
//!
//! These errors represent request validation failures. They are distinct
//! from storage and provider errors, which never reach the caller as faults.

/// A trip request that cannot be looked up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Origin or destination was missing or blank
    #[error("Please provide valid 'from' and 'to' locations.")]
    MissingLocations,
}
