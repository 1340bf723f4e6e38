//! Core domain types for the course catalog.
//!
//! This module defines the fundamental data structures used throughout the
//! system:
//! - Type alias for course identifiers (CourseId)
//! - A tagged location variant (Online vs Local) that makes inconsistent
//!   location data unrepresentable
//! - The Course record itself

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a course, stable for the course's lifetime
pub type CourseId = u32;

// =============================================================================
// Location Types
// =============================================================================

/// Where a course is delivered.
///
/// A `Local` course always carries both a country and a city; an `Online`
/// course carries neither. The enum makes the "local without a city" state
/// unrepresentable, so no runtime validation is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Location {
    Online,
    Local { country: String, city: String },
}

impl Location {
    /// The variant tag of this location, for comparing against a type facet
    pub fn kind(&self) -> LocationKind {
        match self {
            Location::Online => LocationKind::Online,
            Location::Local { .. } => LocationKind::Local,
        }
    }

    /// Country name for `Local` courses, `None` for `Online`
    pub fn country(&self) -> Option<&str> {
        match self {
            Location::Online => None,
            Location::Local { country, .. } => Some(country),
        }
    }

    /// City name for `Local` courses, `None` for `Online`
    pub fn city(&self) -> Option<&str> {
        match self {
            Location::Online => None,
            Location::Local { city, .. } => Some(city),
        }
    }
}

/// The two delivery kinds, without the `Local` payload.
///
/// Used wherever only the variant tag matters (the type facet, CLI flags).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Online,
    Local,
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationKind::Online => write!(f, "online"),
            LocationKind::Local => write!(f, "local"),
        }
    }
}

impl FromStr for LocationKind {
    type Err = CatalogError;

    /// Parses the wire/UI spelling of the kind ("online" or "local")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "online" => Ok(LocationKind::Online),
            "local" => Ok(LocationKind::Local),
            other => Err(CatalogError::UnknownLocationKind {
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Course Record
// =============================================================================

/// One offering in the catalog.
///
/// `category` is an open set of strings: new categories may appear in the
/// data without any change to this type. `rating` is conventionally in
/// [0, 5] but is not clamped here; callers must not assume a bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub provider: String,
    pub location: Location,
    /// Non-negative amount in a single currency
    pub price: f32,
    pub rating: f32,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_kind_accessor() {
        let online = Location::Online;
        let local = Location::Local {
            country: "Ukraine".to_string(),
            city: "Kyiv".to_string(),
        };

        assert_eq!(online.kind(), LocationKind::Online);
        assert_eq!(local.kind(), LocationKind::Local);
    }

    #[test]
    fn test_local_always_carries_country_and_city() {
        let local = Location::Local {
            country: "Poland".to_string(),
            city: "Warsaw".to_string(),
        };

        assert_eq!(local.country(), Some("Poland"));
        assert_eq!(local.city(), Some("Warsaw"));
    }

    #[test]
    fn test_online_carries_no_place() {
        assert_eq!(Location::Online.country(), None);
        assert_eq!(Location::Online.city(), None);
    }

    #[test]
    fn test_location_kind_from_str() {
        assert_eq!("online".parse::<LocationKind>().unwrap(), LocationKind::Online);
        assert_eq!("local".parse::<LocationKind>().unwrap(), LocationKind::Local);
        assert!("hybrid".parse::<LocationKind>().is_err());
    }

    #[test]
    fn test_location_kind_display_round_trip() {
        for kind in [LocationKind::Online, LocationKind::Local] {
            let parsed: LocationKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }
}
