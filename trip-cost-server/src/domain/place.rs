//! Place names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a place name is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid place: {reason}")]
pub struct InvalidPlace {
    reason: &'static str,
}

/// A trimmed, non-empty city name.
///
/// Fare lookups match place names exactly, so surrounding whitespace is
/// stripped at construction and never reaches the repository.
///
/// # Examples
///
/// ```
/// use trip_cost_server::domain::Place;
///
/// let chennai = Place::parse("  Chennai ").unwrap();
/// assert_eq!(chennai.as_str(), "Chennai");
///
/// // Blank input is rejected
/// assert!(Place::parse("").is_err());
/// assert!(Place::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Place(String);

impl Place {
    /// Parse a place name, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidPlace> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidPlace {
                reason: "must not be blank",
            });
        }
        Ok(Place(trimmed.to_string()))
    }

    /// Returns the place name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Place {
    type Error = InvalidPlace;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Place::parse(&value)
    }
}

impl From<Place> for String {
    fn from(place: Place) -> Self {
        place.0
    }
}

impl fmt::Debug for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Place({})", self.0)
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
