//! Trip queries and input coercion.
//!
//! Raw request values arrive as optional strings. They are converted here,
//! once, into a [`TripQuery`] where "no budget" is `None` rather than a zero
//! sentinel.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::{Place, ValidationError};

/// Party size used when the input is missing or not a number.
const DEFAULT_PARTY_SIZE: u32 = 1;

/// How fare lists are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Cheapest first
    ByCost,
    /// Earliest departure first
    ByTime,
}

impl SortOrder {
    /// Parse "cost" or "time" (case-insensitive). Anything else is `None`.
    pub fn parse_lenient(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cost" => Some(SortOrder::ByCost),
            "time" => Some(SortOrder::ByTime),
            _ => None,
        }
    }
}

/// Unvalidated request fields, borrowed from whatever the web layer parsed.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawTripQuery<'a> {
    pub origin: Option<&'a str>,
    pub destination: Option<&'a str>,
    pub party_size: Option<&'a str>,
    pub budget: Option<&'a str>,
    pub sort: Option<&'a str>,
}

/// A validated cost lookup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripQuery {
    origin: Place,
    destination: Place,
    party_size: u32,
    budget: Option<Decimal>,
    sort: Option<SortOrder>,
}

impl TripQuery {
    /// A query for one traveler with no budget.
    pub fn new(origin: Place, destination: Place) -> Self {
        Self {
            origin,
            destination,
            party_size: DEFAULT_PARTY_SIZE,
            budget: None,
            sort: None,
        }
    }

    /// Set the number of travelers. Zero disables budget checks.
    pub fn with_party_size(mut self, party_size: u32) -> Self {
        self.party_size = party_size;
        self
    }

    /// Set a budget. Zero or negative amounts mean "unconstrained".
    pub fn with_budget(mut self, budget: Decimal) -> Self {
        self.budget = (budget > Decimal::ZERO).then_some(budget);
        self
    }

    /// Set an explicit sort order.
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn origin(&self) -> &Place {
        &self.origin
    }

    pub fn destination(&self) -> &Place {
        &self.destination
    }

    pub fn party_size(&self) -> u32 {
        self.party_size
    }

    /// The budget ceiling, if one was given.
    pub fn budget(&self) -> Option<Decimal> {
        self.budget
    }

    /// The effective sort order.
    ///
    /// An explicit preference wins. Otherwise a budgeted query is sorted by
    /// cost and an unbudgeted one by departure time.
    pub fn sort_order(&self) -> SortOrder {
        self.sort.unwrap_or(if self.budget.is_some() {
            SortOrder::ByCost
        } else {
            SortOrder::ByTime
        })
    }
}

impl TryFrom<RawTripQuery<'_>> for TripQuery {
    type Error = ValidationError;

    fn try_from(raw: RawTripQuery<'_>) -> Result<Self, Self::Error> {
        let origin = raw.origin.and_then(|s| Place::parse(s).ok());
        let destination = raw.destination.and_then(|s| Place::parse(s).ok());
        let (Some(origin), Some(destination)) = (origin, destination) else {
            return Err(ValidationError::MissingLocations);
        };

        let mut query =
            TripQuery::new(origin, destination).with_party_size(coerce_party_size(raw.party_size));
        if let Some(budget) = coerce_budget(raw.budget) {
            query = query.with_budget(budget);
        }
        if let Some(sort) = raw.sort.and_then(SortOrder::parse_lenient) {
            query = query.with_sort(sort);
        }
        Ok(query)
    }
}

/// Convert a raw budget to a positive amount.
///
/// Missing, blank, non-numeric, zero and negative inputs all mean "no
/// budget". Plain decimals and scientific notation are accepted.
pub fn coerce_budget(raw: Option<&str>) -> Option<Decimal> {
    let s = raw?.trim();
    if s.is_empty() {
        return None;
    }
    let value = Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()?;
    (value > Decimal::ZERO).then_some(value)
}

/// Convert a raw party size to a traveler count.
///
/// Missing, blank and non-integer inputs fall back to one traveler.
/// Negative counts clamp to zero.
pub fn coerce_party_size(raw: Option<&str>) -> u32 {
    let Some(s) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return DEFAULT_PARTY_SIZE;
    };
    match s.parse::<i64>() {
        Ok(n) if n < 0 => 0,
        Ok(n) => u32::try_from(n).unwrap_or(u32::MAX),
        Err(_) => DEFAULT_PARTY_SIZE,
    }
}
