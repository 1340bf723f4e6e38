//! Filter state: the current facet selections.
//!
//! `FilterState` is an explicit value, not ambient UI state: every
//! transition goes through [`FilterState::set`], which returns a new state
//! and applies the cascading reset between dependent facets. An unset
//! facet means "no restriction".

use crate::error::FilterError;
use catalog::LocationKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// PriceRange
// =============================================================================

/// A closed price interval, inclusive on both ends.
///
/// No validation is performed: a range with `min > max` is a legal value
/// that contains no price, so a contradictory filter matches nothing
/// rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f32,
    pub max: f32,
}

impl PriceRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Whether `price` falls within `[min, max]`
    pub fn contains(&self, price: f32) -> bool {
        price >= self.min && price <= self.max
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl FromStr for PriceRange {
    type Err = FilterError;

    /// Parses the "MIN-MAX" spelling the discovery UI encodes in its
    /// price facet (e.g. "0-100", "100-500").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min, max) = s.split_once('-').ok_or_else(|| FilterError::InvalidPriceRange {
            input: s.to_string(),
        })?;

        let parse_bound = |value: &str| {
            value
                .trim()
                .parse::<f32>()
                .map_err(|_| FilterError::InvalidPriceBound {
                    input: s.to_string(),
                    value: value.to_string(),
                })
        };

        Ok(Self::new(parse_bound(min)?, parse_bound(max)?))
    }
}

// =============================================================================
// FilterState
// =============================================================================

/// The current selection across all six facets.
///
/// ## Invariants
/// Maintained by [`FilterState::set`]:
/// - setting the type facet clears `country` and `city`
/// - setting the country facet clears `city`
///
/// The cascade prevents a state from referencing a city under a country
/// that is no longer selected. Setting `city` while the type facet is not
/// `Local` is allowed; the value is simply inert at evaluation time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub course_type: Option<LocationKind>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub price_range: Option<PriceRange>,
    pub min_rating: Option<f32>,
    pub category: Option<String>,
}

/// One facet assignment, `None` meaning "unset this facet".
///
/// Passed to [`FilterState::set`]; the variant names the facet, the
/// payload carries the new value.
#[derive(Debug, Clone, PartialEq)]
pub enum Facet {
    CourseType(Option<LocationKind>),
    Country(Option<String>),
    City(Option<String>),
    PriceRange(Option<PriceRange>),
    MinRating(Option<f32>),
    Category(Option<String>),
}

impl FilterState {
    /// An empty state: all facets unset, every course matches
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one facet assignment, returning the new state.
    ///
    /// Pure transformation: the input state is consumed by value and the
    /// caller gets the updated copy back. Dependent facets are reset
    /// unconditionally, even when the parent facet is re-set to the value
    /// it already had.
    pub fn set(mut self, facet: Facet) -> Self {
        match facet {
            Facet::CourseType(kind) => {
                self.course_type = kind;
                self.country = None;
                self.city = None;
            }
            Facet::Country(country) => {
                self.country = country;
                self.city = None;
            }
            Facet::City(city) => self.city = city,
            Facet::PriceRange(range) => self.price_range = range,
            Facet::MinRating(rating) => self.min_rating = rating,
            Facet::Category(category) => self.category = category,
        }
        self
    }

    /// Whether no facet is set (the state matches every course)
    pub fn is_unrestricted(&self) -> bool {
        *self == Self::default()
    }

    /// Whether the country facet is meaningful: only when the type facet
    /// selects `Local`. Presentation layers hide the facet otherwise.
    pub fn country_facet_applies(&self) -> bool {
        self.course_type == Some(LocationKind::Local)
    }

    /// Whether the city facet is meaningful: only when the country facet
    /// applies and a country is chosen
    pub fn city_facet_applies(&self) -> bool {
        self.country_facet_applies() && self.country.is_some()
    }
}
