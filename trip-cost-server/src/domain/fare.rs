//! Fare records.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{FareTime, Mode, Place};

/// Error returned when a fare cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidFare {
    #[error("fare cost must not be negative, got {0}")]
    NegativeCost(Decimal),

    #[error("fare category must not be blank")]
    BlankCategory,
}

/// A single bookable fare on a route.
///
/// Records are immutable once built. The cost is per traveler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FareRecord {
    mode: Mode,
    origin: Place,
    destination: Place,
    category: String,
    cost: Decimal,
    timing: FareTime,
}

impl FareRecord {
    /// Create a fare, rejecting negative costs and blank categories.
    pub fn new(
        mode: Mode,
        origin: Place,
        destination: Place,
        category: impl Into<String>,
        cost: Decimal,
        timing: FareTime,
    ) -> Result<Self, InvalidFare> {
        let category = category.into().trim().to_string();
        if category.is_empty() {
            return Err(InvalidFare::BlankCategory);
        }
        if cost < Decimal::ZERO {
            return Err(InvalidFare::NegativeCost(cost));
        }

        Ok(Self {
            mode,
            origin,
            destination,
            category,
            cost,
            timing,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn origin(&self) -> &Place {
        &self.origin
    }

    pub fn destination(&self) -> &Place {
        &self.destination
    }

    /// Seat or coach class, e.g. "Volvo AC" or "Sleeper Class".
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Per-person cost.
    pub fn cost(&self) -> Decimal {
        self.cost
    }

    pub fn timing(&self) -> FareTime {
        self.timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(s: &str) -> Place {
        Place::parse(s).unwrap()
    }

    fn time(s: &str) -> FareTime {
        FareTime::parse_hhmm(s).unwrap()
    }

    #[test]
    fn builds_valid_fare() {
        let fare = FareRecord::new(
            Mode::Bus,
            place("Chennai"),
            place("Madurai"),
            "Volvo AC",
            Decimal::from(220),
            time("21:00"),
        )
        .unwrap();

        assert_eq!(fare.mode(), Mode::Bus);
        assert_eq!(fare.category(), "Volvo AC");
        assert_eq!(fare.cost(), Decimal::from(220));
        assert_eq!(fare.timing().to_string(), "21:00");
        assert_eq!(fare.origin(), &place("Chennai"));
        assert_eq!(fare.destination(), &place("Madurai"));
    }

    #[test]
    fn zero_cost_is_allowed() {
        let fare = FareRecord::new(
            Mode::Train,
            place("Salem"),
            place("Erode"),
            "General",
            Decimal::ZERO,
            time("05:15"),
        );
        assert!(fare.is_ok());
    }

    #[test]
    fn rejects_negative_cost() {
        let err = FareRecord::new(
            Mode::Train,
            place("Salem"),
            place("Erode"),
            "General",
            Decimal::from(-1),
            time("05:15"),
        )
        .unwrap_err();
        assert_eq!(err, InvalidFare::NegativeCost(Decimal::from(-1)));
    }

    #[test]
    fn rejects_blank_category() {
        let err = FareRecord::new(
            Mode::Bus,
            place("Salem"),
            place("Erode"),
            "  ",
            Decimal::from(90),
            time("05:15"),
        )
        .unwrap_err();
        assert_eq!(err, InvalidFare::BlankCategory);
    }

    #[test]
    fn serializes_for_responses() {
        let fare = FareRecord::new(
            Mode::Bus,
            place("Chennai"),
            place("Madurai"),
            "Deluxe",
            Decimal::new(18050, 2),
            time("07:30"),
        )
        .unwrap();

        let json = serde_json::to_value(&fare).unwrap();
        assert_eq!(json["mode"], "bus");
        assert_eq!(json["origin"], "Chennai");
        assert_eq!(json["cost"], "180.50");
        assert_eq!(json["timing"], "07:30");
    }
}
