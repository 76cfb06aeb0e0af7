//! Domain types for the trip cost server.
//!
//! This module contains the validated building blocks shared by the fare
//! repository, the budget evaluator and the web layer. All types enforce
//! their invariants at construction time, so code that receives them can
//! trust their validity.

mod error;
mod fare;
mod mode;
mod place;
mod query;
mod time;

pub use error::ValidationError;
pub use fare::{FareRecord, InvalidFare};
pub use mode::Mode;
pub use place::{InvalidPlace, Place};
pub use query::{RawTripQuery, SortOrder, TripQuery, coerce_budget, coerce_party_size};
pub use time::{FareTime, TimeError};
