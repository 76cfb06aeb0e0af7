//! Google Directions HTTP client.

use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::Place;

use super::error::DirectionsError;
use super::types::{DirectionsResponse, DistanceProvider, DistanceResult};

/// Default base URL for the Directions API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Configuration for the directions client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionsConfig {
    /// API key sent as the `key` query parameter
    pub api_key: String,
    /// Scheme and host, without the API path
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Directions API client.
///
/// One GET per lookup, no retries.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DirectionsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    async fn fetch(&self, origin: &Place, destination: &Place) -> Result<String, DirectionsError> {
        let url = format!("{}/maps/api/directions/json", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("origin", origin.as_str()),
                ("destination", destination.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectionsError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

impl DistanceProvider for DirectionsClient {
    async fn get_distance(&self, origin: &Place, destination: &Place) -> DistanceResult {
        match self.fetch(origin, destination).await {
            Ok(body) => {
                let result = interpret_response(&body);
                debug!(%origin, %destination, ?result, "directions lookup");
                result
            }
            Err(e) => {
                warn!(error = %e, %origin, %destination, "directions provider unreachable");
                DistanceResult::Unreachable
            }
        }
    }
}

/// Map a successful HTTP body to a distance result.
///
/// `OK` yields the first leg's distance text, `ZERO_RESULTS` means no route,
/// and any other status is reported back verbatim. A body that is not
/// directions JSON, or an `OK` without a leg distance, carries no status to
/// report and is treated like a failed request.
pub fn interpret_response(body: &str) -> DistanceResult {
    let response: DirectionsResponse = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "unparseable directions response");
            return DistanceResult::Unreachable;
        }
    };

    match response.status.as_str() {
        "OK" => match response.first_leg_distance() {
            Some(text) => DistanceResult::Distance(text.to_string()),
            None => {
                warn!("directions response has no leg distance");
                DistanceResult::Unreachable
            }
        },
        "ZERO_RESULTS" => DistanceResult::NoRoute,
        other => {
            warn!(status = other, "directions provider returned an error status");
            DistanceResult::ProviderError(other.to_string())
        }
    }
}
