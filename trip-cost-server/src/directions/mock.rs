//! Fixed-table distance provider for tests and offline development.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::Place;

use super::types::{DistanceProvider, DistanceResult};

/// Distance provider that answers from a fixed table.
///
/// Unknown pairs get the fallback result (`NoRoute` unless changed).
/// Clones share the call counter.
#[derive(Debug, Clone)]
pub struct MockDistanceProvider {
    routes: HashMap<(Place, Place), DistanceResult>,
    fallback: DistanceResult,
    calls: Arc<AtomicUsize>,
}

impl Default for MockDistanceProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDistanceProvider {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            fallback: DistanceResult::NoRoute,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Answer `result` for the ordered pair (origin, destination).
    pub fn with_route(mut self, origin: Place, destination: Place, result: DistanceResult) -> Self {
        self.routes.insert((origin, destination), result);
        self
    }

    /// Answer `result` for every pair without an explicit entry.
    pub fn with_fallback(mut self, result: DistanceResult) -> Self {
        self.fallback = result;
        self
    }

    /// Number of lookups made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DistanceProvider for MockDistanceProvider {
    async fn get_distance(&self, origin: &Place, destination: &Place) -> DistanceResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.routes
            .get(&(origin.clone(), destination.clone()))
            .unwrap_or(&self.fallback)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(s: &str) -> Place {
        Place::parse(s).unwrap()
    }

    #[tokio::test]
    async fn answers_from_table_and_counts_calls() {
        let mock = MockDistanceProvider::new().with_route(
            place("Chennai"),
            place("Madurai"),
            DistanceResult::Distance("462 km".into()),
        );

        assert_eq!(
            mock.get_distance(&place("Chennai"), &place("Madurai")).await,
            DistanceResult::Distance("462 km".into())
        );
        // pairs are ordered
        assert_eq!(
            mock.get_distance(&place("Madurai"), &place("Chennai")).await,
            DistanceResult::NoRoute
        );
        assert_eq!(mock.calls(), 2);
    }

    #[tokio::test]
    async fn fallback_applies_to_unknown_pairs() {
        let mock = MockDistanceProvider::new().with_fallback(DistanceResult::Unreachable);
        let shared = mock.clone();

        assert_eq!(
            mock.get_distance(&place("A"), &place("B")).await,
            DistanceResult::Unreachable
        );
        assert_eq!(shared.calls(), 1);
    }
}
