//! Feasibility classification.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Mode, Place};

use super::evaluate::party_total;
use super::notice::{Notice, format_rupees};

/// Advisory shown when the party cannot afford even the cheapest option.
pub const ADDITIONAL_FUNDS_MESSAGE: &str =
    "You will need additional funds to proceed with this tour.";

/// How a route's fares relate to the traveler's budget.
///
/// Exactly one outcome holds for any input. A party total equal to the
/// budget is affordable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeasibilityOutcome {
    /// No fares exist for the route
    NoData,

    /// No positive budget or no travelers, so nothing was checked
    Unconstrained,

    /// Even the cheapest fare exceeds the budget for the party
    Infeasible { budget: Decimal, min_total: Decimal },

    /// The cheapest fare fits but the dearest does not
    PartiallyFeasible { budget: Decimal, max_total: Decimal },

    /// Every fare fits the budget
    FullyFeasible,
}

impl FeasibilityOutcome {
    /// The message to show the traveler for this outcome, if any.
    pub fn notice(&self, mode: Mode, origin: &Place, destination: &Place) -> Option<Notice> {
        match self {
            FeasibilityOutcome::NoData => Some(Notice::info(format!(
                "No {mode} routes found from {origin} to {destination}"
            ))),
            FeasibilityOutcome::Infeasible { budget, min_total } => Some(Notice::error(format!(
                "Your budget of {} is insufficient. The minimum cost for {mode} travel is {}. {}",
                format_rupees(*budget),
                format_rupees(*min_total),
                ADDITIONAL_FUNDS_MESSAGE,
            ))),
            FeasibilityOutcome::PartiallyFeasible { budget, .. } => Some(Notice::info(format!(
                "Some {mode} options are within your budget of {}, but not all. \
                 Options with higher costs are not shown.",
                format_rupees(*budget),
            ))),
            FeasibilityOutcome::Unconstrained | FeasibilityOutcome::FullyFeasible => None,
        }
    }
}

/// Classify a route's unfiltered cost range against a budget.
///
/// `min`/`max` are per-person costs over every fare on the route. If `max`
/// is missing it is taken to equal `min`. A party total that overflows is
/// treated as exceeding any budget.
pub fn classify(
    min: Option<Decimal>,
    max: Option<Decimal>,
    budget: Option<Decimal>,
    party_size: u32,
) -> FeasibilityOutcome {
    let Some(min) = min else {
        return FeasibilityOutcome::NoData;
    };
    let Some(budget) = budget.filter(|b| *b > Decimal::ZERO) else {
        return FeasibilityOutcome::Unconstrained;
    };
    if party_size == 0 {
        return FeasibilityOutcome::Unconstrained;
    }

    let min_total = party_total(min, party_size).unwrap_or(Decimal::MAX);
    if min_total > budget {
        return FeasibilityOutcome::Infeasible { budget, min_total };
    }

    let max_total = party_total(max.unwrap_or(min), party_size).unwrap_or(Decimal::MAX);
    if max_total > budget {
        return FeasibilityOutcome::PartiallyFeasible { budget, max_total };
    }

    FeasibilityOutcome::FullyFeasible
}
