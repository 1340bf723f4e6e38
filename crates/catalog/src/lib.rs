//! # Catalog Crate
//!
//! Domain types and reference data for the course catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Course, Location, LocationKind)
//! - **geography**: Country and city reference data for the location facets
//! - **seed**: The built-in catalog the product currently ships
//! - **error**: Error types for parsing catalog value spellings
//!
//! ## Example Usage
//!
//! ```
//! use catalog::{geography, sample_catalog, LocationKind};
//!
//! let catalog = sample_catalog();
//! assert!(!catalog.is_empty());
//!
//! // Location facets draw their choices from the geography data
//! for country in geography::COUNTRIES {
//!     let _cities = geography::cities_in(country);
//! }
//!
//! let kind: LocationKind = "online".parse().unwrap();
//! assert_eq!(kind, LocationKind::Online);
//! ```

// Public modules
pub mod error;
pub mod geography;
pub mod seed;
pub mod types;

// Re-export commonly used types for convenience
pub use error::CatalogError;
pub use seed::{sample_catalog, CATEGORIES};
pub use types::{Course, CourseId, Location, LocationKind};
