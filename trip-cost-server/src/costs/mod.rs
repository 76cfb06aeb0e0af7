//! Cost queries.
//!
//! Ties the fare repository, the budget evaluator and the distance provider
//! together to answer "what are my bus/train options" and "summarize this
//! trip" requests.

mod service;
mod types;

pub use service::CostQueryService;
pub use types::{CostQueryResult, TripSummary};
