//! Data transfer objects for web requests and responses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::costs::{CostQueryResult, TripSummary};
use crate::domain::{RawTripQuery, SortOrder, TripQuery};

/// Trip summary form submission.
///
/// Every field is optional text; coercion happens in the domain layer.
#[derive(Debug, Default, Deserialize)]
pub struct TripForm {
    /// Origin city
    pub from: Option<String>,

    /// Destination city
    pub to: Option<String>,

    /// Number of travelers
    pub total_members: Option<String>,

    /// Total budget in rupees
    pub budget: Option<String>,
}

impl TripForm {
    pub fn as_raw(&self) -> RawTripQuery<'_> {
        RawTripQuery {
            origin: self.from.as_deref(),
            destination: self.to.as_deref(),
            party_size: self.total_members.as_deref(),
            budget: self.budget.as_deref(),
            sort: None,
        }
    }
}

/// Query string for the bus and train listings.
#[derive(Debug, Default, Deserialize)]
pub struct ModeQueryParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub budget: Option<String>,
    pub total_members: Option<String>,

    /// "cost" or "time"
    pub sort: Option<String>,
}

impl ModeQueryParams {
    pub fn as_raw(&self) -> RawTripQuery<'_> {
        RawTripQuery {
            origin: self.from.as_deref(),
            destination: self.to.as_deref(),
            party_size: self.total_members.as_deref(),
            budget: self.budget.as_deref(),
            sort: self.sort.as_deref(),
        }
    }
}

/// The query as understood after coercion.
#[derive(Debug, Serialize)]
pub struct QueryEcho {
    pub from: String,
    pub to: String,
    pub total_members: u32,
    pub budget: Option<Decimal>,
    pub sort: &'static str,
}

impl From<&TripQuery> for QueryEcho {
    fn from(query: &TripQuery) -> Self {
        Self {
            from: query.origin().to_string(),
            to: query.destination().to_string(),
            total_members: query.party_size(),
            budget: query.budget(),
            sort: match query.sort_order() {
                SortOrder::ByCost => "cost",
                SortOrder::ByTime => "time",
            },
        }
    }
}

/// Response for `/bus` and `/train`.
#[derive(Debug, Serialize)]
pub struct ModeResponse {
    pub query: QueryEcho,

    #[serde(flatten)]
    pub result: CostQueryResult,
}

/// Response for `/submit`.
#[derive(Debug, Serialize)]
pub struct TripSummaryResponse {
    pub query: QueryEcho,

    #[serde(flatten)]
    pub summary: TripSummary,
}

/// One entry in the service index.
#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// Response for `/`.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<EndpointInfo>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
