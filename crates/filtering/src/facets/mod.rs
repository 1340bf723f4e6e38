//! Per-facet predicates for the evaluator.
//!
//! Each module decides one facet family in isolation; an unset facet
//! always allows the course (absence = wildcard). The evaluator ANDs
//! them together.

pub mod category;
pub mod location;
pub mod price;
pub mod rating;

// Re-export for convenience
pub use category::category_allows;
pub use location::{city_allows, country_allows, kind_allows};
pub use price::price_allows;
pub use rating::rating_allows;
