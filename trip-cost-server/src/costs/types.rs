//! Query results.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::budget::{FeasibilityOutcome, Notice};
use crate::directions::DistanceResult;
use crate::domain::{FareRecord, Mode};

/// Fares for one mode on one route, with budget annotations.
///
/// `min_cost_per_person` and `max_cost_per_person` cover every fare on the
/// route, even those filtered out of `records` by the budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostQueryResult {
    pub mode: Mode,
    pub records: Vec<FareRecord>,
    pub min_cost_per_person: Option<Decimal>,
    pub max_cost_per_person: Option<Decimal>,
    pub outcome: FeasibilityOutcome,
    pub feasibility_message: Option<Notice>,
}

/// Distance and cheapest totals for both modes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripSummary {
    pub distance: DistanceResult,
    pub distance_text: String,
    pub bus_cheapest: Option<Decimal>,
    pub train_cheapest: Option<Decimal>,
    pub bus_total: Option<Decimal>,
    pub train_total: Option<Decimal>,
    pub budget_message: Option<String>,
    pub notice: Option<Notice>,
}

impl TripSummary {
    /// A summary carrying only the distance outcome.
    pub(super) fn distance_only(distance: DistanceResult) -> Self {
        Self {
            distance_text: distance.display_text(),
            distance,
            bus_cheapest: None,
            train_cheapest: None,
            bus_total: None,
            train_total: None,
            budget_message: None,
            notice: None,
        }
    }
}
