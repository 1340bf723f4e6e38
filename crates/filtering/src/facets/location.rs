//! Location facets: delivery kind, country, and city.
//!
//! The kind facet compares variant tags. The country and city facets only
//! restrict `Local` courses: an `Online` course passes them vacuously,
//! matching the discovery UI, which hides both facets unless the local
//! kind is selected.

use catalog::{Location, LocationKind};

/// Whether the course's delivery kind satisfies the type facet
pub fn kind_allows(location: &Location, wanted: Option<LocationKind>) -> bool {
    match wanted {
        None => true,
        Some(kind) => location.kind() == kind,
    }
}

/// Whether the course's country satisfies the country facet.
///
/// Only `Local` courses are restricted; an `Online` course is never
/// rejected by this facet.
pub fn country_allows(location: &Location, wanted: Option<&str>) -> bool {
    match (wanted, location.country()) {
        (Some(wanted), Some(country)) => country == wanted,
        _ => true,
    }
}

/// Whether the course's city satisfies the city facet.
///
/// Same vacuous-pass rule for `Online` courses as [`country_allows`].
pub fn city_allows(location: &Location, wanted: Option<&str>) -> bool {
    match (wanted, location.city()) {
        (Some(wanted), Some(city)) => city == wanted,
        _ => true,
    }
}
