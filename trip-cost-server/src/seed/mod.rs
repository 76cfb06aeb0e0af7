//! Sample fare data.
//!
//! Generates a deterministic dataset of bus and train fares between Tamil
//! Nadu cities and makes sure the fare files exist before the server
//! starts answering queries.

mod config;
mod ensure;
mod generate;

pub use config::{FareDataConfig, SeedConfig};
pub use ensure::ensure_seeded;
pub use generate::{CITIES, generate};
