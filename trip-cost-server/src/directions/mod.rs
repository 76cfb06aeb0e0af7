//! Road distance lookups.
//!
//! The [`DistanceProvider`] trait is the seam between trip summaries and
//! the outside world. [`DirectionsClient`] asks the Google Directions API;
//! [`MockDistanceProvider`] answers from a fixed table.
//!
//! Lookups never fail from the caller's point of view: every outcome,
//! including network trouble, is folded into a [`DistanceResult`].

mod client;
mod error;
mod mock;
mod types;

pub use client::{DirectionsClient, DirectionsConfig, interpret_response};
pub use error::DirectionsError;
pub use mock::MockDistanceProvider;
pub use types::{DistanceProvider, DistanceResult};
