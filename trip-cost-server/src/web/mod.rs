//! Web layer for the trip cost server.
//!
//! JSON endpoints for trip summaries and per-mode fare listings.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
