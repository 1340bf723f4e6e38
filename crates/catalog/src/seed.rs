//! The built-in course catalog.
//!
//! The product currently ships a hardcoded catalog; a real catalog source
//! would replace this module without touching the types or the filtering
//! engine.

use crate::types::{Course, Location};

/// Categories the discovery UI offers in its category facet.
///
/// Advisory only: `Course::category` is an open set and courses may carry
/// categories not listed here.
pub const CATEGORIES: [&str; 4] = ["Technology", "Business", "Design", "Beauty"];

/// The built-in catalog, in display order
pub fn sample_catalog() -> Vec<Course> {
    vec![
        Course {
            id: 1,
            title: "Web Development Bootcamp".to_string(),
            provider: "Tech Academy".to_string(),
            location: Location::Online,
            price: 499.0,
            rating: 4.8,
            category: "Technology".to_string(),
        },
        Course {
            id: 2,
            title: "Barbering Course".to_string(),
            provider: "Style Masters".to_string(),
            location: Location::Local {
                country: "Ukraine".to_string(),
                city: "Kropyvnytskyi".to_string(),
            },
            price: 299.0,
            rating: 4.9,
            category: "Beauty".to_string(),
        },
    ]
}
