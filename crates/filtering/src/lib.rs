//! # Filtering Crate
//!
//! Faceted filtering engine for the course catalog.
//!
//! This crate provides:
//! - `FilterState` and `Facet` for tracking facet selections with the
//!   cascading reset between dependent facets
//! - `matches` for deciding a single course against a state
//! - `filter_catalog` for producing the visible result set
//!
//! ## Architecture
//! A caller mutates the state one facet at a time through
//! [`FilterState::set`]; dependent facets (country under type, city under
//! country) are reset automatically. The catalog query then re-evaluates
//! the full catalog against the new state. Everything is pure and
//! synchronous: there is no shared mutable state and no fallible path in
//! evaluation.
//!
//! ## Example Usage
//! ```
//! use catalog::{sample_catalog, LocationKind};
//! use filtering::{filter_catalog, Facet, FilterState};
//!
//! let catalog = sample_catalog();
//!
//! let state = FilterState::new()
//!     .set(Facet::CourseType(Some(LocationKind::Local)))
//!     .set(Facet::Country(Some("Ukraine".to_string())));
//!
//! let visible = filter_catalog(&catalog, &state);
//! assert!(visible.iter().all(|c| c.location.country() == Some("Ukraine")));
//! ```

pub mod error;
pub mod evaluator;
pub mod facets;
pub mod query;
pub mod state;

// Re-export main types
pub use error::{FilterError, Result};
pub use evaluator::matches;
pub use query::filter_catalog;
pub use state::{Facet, FilterState, PriceRange};
