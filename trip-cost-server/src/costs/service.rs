//! The cost query orchestrator.

use tracing::{debug, info};

use crate::budget::{
    ADDITIONAL_FUNDS_MESSAGE, Notice, classify, effective_max_per_person, overall_minimum,
    party_total, trip_total,
};
use crate::directions::DistanceProvider;
use crate::domain::{Mode, TripQuery};
use crate::fares::FareRepository;

use super::types::{CostQueryResult, TripSummary};

/// Answers mode listings and trip summaries.
///
/// Holds no per-request state; one instance serves every request.
#[derive(Clone)]
pub struct CostQueryService<D> {
    fares: FareRepository,
    distances: D,
}

impl<D: DistanceProvider> CostQueryService<D> {
    pub fn new(fares: FareRepository, distances: D) -> Self {
        Self { fares, distances }
    }

    pub fn distances(&self) -> &D {
        &self.distances
    }

    /// List one mode's fares for a query.
    ///
    /// Records are capped at the per-person share of the budget and sorted
    /// by the query's effective order. The cost range and classification
    /// use every fare on the route.
    pub fn query_mode(&self, mode: Mode, query: &TripQuery) -> CostQueryResult {
        let origin = query.origin();
        let destination = query.destination();
        let party_size = query.party_size();
        let ceiling = effective_max_per_person(query.budget(), party_size);

        let route = self.fares.route(mode, origin, destination);
        let records = route.listing(ceiling, query.sort_order());
        let min = route.min_cost();
        let max = route.max_cost();

        let outcome = classify(min, max, query.budget(), party_size);
        let feasibility_message = outcome.notice(mode, origin, destination);

        debug!(
            %mode,
            %origin,
            %destination,
            on_route = route.len(),
            shown = records.len(),
            ?outcome,
            "mode query"
        );

        CostQueryResult {
            mode,
            records,
            min_cost_per_person: min,
            max_cost_per_person: max,
            outcome,
            feasibility_message,
        }
    }

    /// Summarize a trip: road distance plus the cheapest total per mode.
    ///
    /// The distance provider is asked exactly once. A provider error ends
    /// the summary there; a missing route or an unreachable provider does
    /// not stop the fare lookups.
    pub async fn query_trip_summary(&self, query: &TripQuery) -> TripSummary {
        let origin = query.origin();
        let destination = query.destination();
        let party_size = query.party_size();

        let distance = self.distances.get_distance(origin, destination).await;
        if distance.is_fatal() {
            info!(%origin, %destination, %distance, "skipping fare lookups");
            return TripSummary::distance_only(distance);
        }

        let bus_cheapest = self.fares.cheapest_fare(Mode::Bus, origin, destination);
        let train_cheapest = self.fares.cheapest_fare(Mode::Train, origin, destination);

        let mut summary = TripSummary::distance_only(distance);
        summary.bus_cheapest = bus_cheapest;
        summary.train_cheapest = train_cheapest;
        summary.bus_total = trip_total(bus_cheapest, party_size);
        summary.train_total = trip_total(train_cheapest, party_size);

        if let Some(budget) = query.budget().filter(|_| party_size > 0) {
            if let Some(lowest) = overall_minimum(bus_cheapest, train_cheapest) {
                let total = party_total(lowest, party_size);
                if total.is_none_or(|t| t > budget) {
                    summary.budget_message = Some(ADDITIONAL_FUNDS_MESSAGE.to_string());
                }
            }
        }

        if bus_cheapest.is_none() && train_cheapest.is_none() {
            summary.notice = Some(Notice::info(format!(
                "No transportation options found from {origin} to {destination}"
            )));
        }

        summary
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
