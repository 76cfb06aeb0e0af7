//! Application state for the web layer.

use std::sync::Arc;

use crate::costs::CostQueryService;

/// Shared application state.
///
/// Generic over the distance provider so tests can swap in a mock.
pub struct AppState<D> {
    /// Cost query orchestrator
    pub costs: Arc<CostQueryService<D>>,
}

impl<D> AppState<D> {
    /// Create a new app state.
    pub fn new(costs: CostQueryService<D>) -> Self {
        Self {
            costs: Arc::new(costs),
        }
    }
}

// `D` need not be `Clone`.
impl<D> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            costs: Arc::clone(&self.costs),
        }
    }
}
