//! Fare storage and lookup.
//!
//! Fares live in two tables, one per [`Mode`](crate::domain::Mode), loaded
//! from CSV files at startup and held in memory for the life of the
//! process. The [`FareRepository`] is the read side used by request
//! handling; it never surfaces storage faults to its callers.

mod error;
pub mod files;
mod repository;
mod store;

pub use error::{FareDataError, FareStoreError};
pub use repository::{FareRepository, RouteFares};
pub use store::{FareStore, FareTable, FareTables, InMemoryFareStore, TableCounts};
