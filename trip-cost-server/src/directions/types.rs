//! Distance results and the provider trait.

use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::domain::Place;

/// Outcome of a single distance lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum DistanceResult {
    /// The route exists; the text is the provider's human-readable distance
    Distance(String),

    /// The provider found no route between the places
    NoRoute,

    /// The provider answered with a status other than OK or ZERO_RESULTS
    ProviderError(String),

    /// The provider could not be reached
    Unreachable,
}

impl DistanceResult {
    /// Text shown to the traveler.
    pub fn display_text(&self) -> String {
        match self {
            DistanceResult::Distance(text) => text.clone(),
            DistanceResult::NoRoute => "No route found between these locations".to_string(),
            DistanceResult::ProviderError(status) => format!("Error: {status}"),
            DistanceResult::Unreachable => "Internet not available".to_string(),
        }
    }

    /// Whether fare lookups should be skipped for this result.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DistanceResult::ProviderError(_))
    }
}

impl fmt::Display for DistanceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

/// Something that can tell how far apart two places are by road.
///
/// Implementations make at most one attempt per call and fold every
/// failure into a [`DistanceResult`].
pub trait DistanceProvider: Send + Sync {
    fn get_distance(
        &self,
        origin: &Place,
        destination: &Place,
    ) -> impl Future<Output = DistanceResult> + Send;
}

/// Directions API response body.
///
/// Only the fields needed for the first leg's distance are kept.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct DirectionsResponse {
    pub status: String,

    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct DirectionsRoute {
    #[serde(default)]
    pub legs: Vec<DirectionsLeg>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct DirectionsLeg {
    pub distance: Option<TextValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct TextValue {
    pub text: String,
}

impl DirectionsResponse {
    /// `routes[0].legs[0].distance.text`, if present.
    pub fn first_leg_distance(&self) -> Option<&str> {
        self.routes
            .first()?
            .legs
            .first()?
            .distance
            .as_ref()
            .map(|d| d.text.as_str())
    }
}
