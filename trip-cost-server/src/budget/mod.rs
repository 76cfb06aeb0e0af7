//! Budget evaluation.
//!
//! Turns per-person fare costs, a party size and an optional budget into
//! cost ceilings, party totals and a five-way feasibility classification
//! with user-facing messages.
//!
//! Budgets are filtered per person: the repository only ever sees
//! `budget / party_size`, while feasibility compares party totals against
//! the whole budget.

mod evaluate;
mod notice;
mod outcome;

pub use evaluate::{effective_max_per_person, overall_minimum, party_total, trip_total};
pub use notice::{Notice, NoticeLevel, format_rupees};
pub use outcome::{ADDITIONAL_FUNDS_MESSAGE, FeasibilityOutcome, classify};
