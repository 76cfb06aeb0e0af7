//! Fare queries.
//!
//! The repository reads a (mode, origin, destination) triple once into a
//! [`RouteFares`] snapshot, which answers min/max and filtered-list
//! questions. Storage faults are logged and reported as "no fares", never
//! as errors.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, error};

use crate::domain::{FareRecord, Mode, Place, SortOrder};

use super::error::FareStoreError;
use super::store::{FareStore, TableCounts};

/// One read of a route's fares.
///
/// Listings and the cost range are taken from the same snapshot, so they
/// always agree with each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteFares {
    fares: Vec<FareRecord>,
}

impl RouteFares {
    /// Lowest per-person cost over every fare on the route.
    pub fn min_cost(&self) -> Option<Decimal> {
        self.fares.iter().map(FareRecord::cost).min()
    }

    /// Highest per-person cost over every fare on the route.
    pub fn max_cost(&self) -> Option<Decimal> {
        self.fares.iter().map(FareRecord::cost).max()
    }

    pub fn len(&self) -> usize {
        self.fares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fares.is_empty()
    }

    /// Fares optionally capped at a per-person cost, in the requested order.
    ///
    /// A ceiling of zero or less is ignored. Sorting is stable, so fares
    /// with equal keys keep their storage order.
    pub fn listing(
        &self,
        max_cost_per_person: Option<Decimal>,
        order: SortOrder,
    ) -> Vec<FareRecord> {
        let ceiling = max_cost_per_person.filter(|c| *c > Decimal::ZERO);
        let mut fares: Vec<FareRecord> = self
            .fares
            .iter()
            .filter(|f| ceiling.is_none_or(|c| f.cost() <= c))
            .cloned()
            .collect();

        match order {
            SortOrder::ByCost => fares.sort_by_key(|f| f.cost()),
            SortOrder::ByTime => fares.sort_by_key(|f| f.timing()),
        }
        fares
    }
}

/// Read-side access to fare data.
#[derive(Clone)]
pub struct FareRepository {
    store: Arc<dyn FareStore>,
}

impl FareRepository {
    /// Create a repository over a fare store.
    pub fn new(store: Arc<dyn FareStore>) -> Self {
        Self { store }
    }

    /// Every fare on a route, in storage order.
    ///
    /// A store fault is logged and reads as an empty route.
    pub fn route(&self, mode: Mode, origin: &Place, destination: &Place) -> RouteFares {
        let fares = match self.store.route_fares(mode, origin, destination) {
            Ok(fares) => fares,
            Err(e) => {
                log_store_failure(&e, mode, origin, destination);
                Vec::new()
            }
        };
        debug!(%mode, %origin, %destination, count = fares.len(), "read route");
        RouteFares { fares }
    }

    /// The cheapest per-person fare on the route, for trip summaries.
    pub fn cheapest_fare(
        &self,
        mode: Mode,
        origin: &Place,
        destination: &Place,
    ) -> Option<Decimal> {
        self.route(mode, origin, destination).min_cost()
    }

    /// Table sizes, or `None` if the store cannot be read.
    pub fn counts(&self) -> Option<TableCounts> {
        self.store
            .counts()
            .inspect_err(|e| error!(error = %e, "failed to count fares"))
            .ok()
    }
}

fn log_store_failure(e: &FareStoreError, mode: Mode, origin: &Place, destination: &Place) {
    error!(
        error = %e,
        %mode,
        %origin,
        %destination,
        "fare store query failed, treating route as empty"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FareTime;
    use crate::fares::{FareTables, InMemoryFareStore};

    fn place(s: &str) -> Place {
        Place::parse(s).unwrap()
    }

    fn fare(mode: Mode, cost: i64, timing: &str) -> FareRecord {
        FareRecord::new(
            mode,
            place("Chennai"),
            place("Madurai"),
            "Semi Sleeper AC",
            Decimal::from(cost),
            FareTime::parse_hhmm(timing).unwrap(),
        )
        .unwrap()
    }

    fn repo(records: Vec<FareRecord>) -> FareRepository {
        let store = InMemoryFareStore::new(FareTables::from_records(records));
        FareRepository::new(Arc::new(store))
    }

    fn chennai_madurai_bus() -> FareRepository {
        repo(vec![
            fare(Mode::Bus, 260, "22:00"),
            fare(Mode::Bus, 180, "09:30"),
            fare(Mode::Bus, 220, "06:00"),
            fare(Mode::Train, 300, "05:15"),
        ])
    }

    fn costs(fares: &[FareRecord]) -> Vec<i64> {
        fares
            .iter()
            .map(|f| i64::try_from(f.cost()).unwrap())
            .collect()
    }

    struct FailingStore;

    impl FareStore for FailingStore {
        fn route_fares(
            &self,
            _mode: Mode,
            _origin: &Place,
            _destination: &Place,
        ) -> Result<Vec<FareRecord>, FareStoreError> {
            Err(FareStoreError::Unavailable("disk detached".into()))
        }

        fn counts(&self) -> Result<TableCounts, FareStoreError> {
            Err(FareStoreError::Poisoned)
        }
    }

    fn chennai_madurai() -> RouteFares {
        chennai_madurai_bus().route(Mode::Bus, &place("Chennai"), &place("Madurai"))
    }

    #[test]
    fn sorts_by_cost() {
        let fares = chennai_madurai().listing(None, SortOrder::ByCost);
        assert_eq!(costs(&fares), vec![180, 220, 260]);
    }

    #[test]
    fn sorts_by_time() {
        let fares = chennai_madurai().listing(None, SortOrder::ByTime);
        let times: Vec<_> = fares.iter().map(|f| f.timing().to_string()).collect();
        assert_eq!(times, vec!["06:00", "09:30", "22:00"]);
    }

    #[test]
    fn ceiling_is_inclusive() {
        let fares = chennai_madurai().listing(Some(Decimal::from(220)), SortOrder::ByCost);
        assert_eq!(costs(&fares), vec![180, 220]);
    }

    #[test]
    fn non_positive_ceiling_is_ignored() {
        let fares = chennai_madurai().listing(Some(Decimal::ZERO), SortOrder::ByCost);
        assert_eq!(fares.len(), 3);
    }

    #[test]
    fn min_and_max_ignore_the_filter() {
        let route = chennai_madurai();

        assert_eq!(route.listing(Some(Decimal::from(200)), SortOrder::ByCost).len(), 1);
        assert_eq!(route.min_cost(), Some(Decimal::from(180)));
        assert_eq!(route.max_cost(), Some(Decimal::from(260)));
        assert_eq!(route.len(), 3);
        assert_eq!(
            chennai_madurai_bus().cheapest_fare(Mode::Train, &place("Chennai"), &place("Madurai")),
            Some(Decimal::from(300))
        );
    }

    #[test]
    fn unknown_route_is_empty() {
        let repo = chennai_madurai_bus();
        let origin = place("A");
        let destination = place("B");

        let route = repo.route(Mode::Bus, &origin, &destination);
        assert!(route.is_empty());
        assert!(route.listing(None, SortOrder::ByTime).is_empty());
        assert_eq!(route.min_cost(), None);
        assert_eq!(route.max_cost(), None);
        assert_eq!(repo.cheapest_fare(Mode::Bus, &origin, &destination), None);
    }

    #[test]
    fn store_failure_degrades_to_no_data() {
        let repo = FareRepository::new(Arc::new(FailingStore));
        let origin = place("Chennai");
        let destination = place("Madurai");

        assert_eq!(repo.route(Mode::Bus, &origin, &destination), RouteFares::default());
        assert_eq!(repo.cheapest_fare(Mode::Train, &origin, &destination), None);
        assert_eq!(repo.counts(), None);
    }

    #[test]
    fn counts_reports_table_sizes() {
        let repo = chennai_madurai_bus();
        assert_eq!(repo.counts(), Some(TableCounts { bus: 3, train: 1 }));
    }

    #[test]
    fn repeated_queries_are_identical() {
        let repo = repo(vec![
            fare(Mode::Bus, 200, "08:00"),
            fare(Mode::Bus, 200, "07:00"),
            fare(Mode::Bus, 150, "09:00"),
        ]);
        let run = || {
            repo.route(Mode::Bus, &place("Chennai"), &place("Madurai"))
                .listing(Some(Decimal::from(250)), SortOrder::ByCost)
        };
        let first = run();
        assert_eq!(first, run());
        // equal costs keep storage order
        assert_eq!(first[1].timing().to_string(), "08:00");
    }
}
