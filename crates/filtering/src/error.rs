//! Error types for the filtering crate.
//!
//! Evaluation itself is infallible: every facet combination is a total
//! function over the catalog, including a price range with `min > max`
//! (which matches nothing). The only fallible operation is parsing the
//! textual "MIN-MAX" price range spelling.

use thiserror::Error;

/// Errors from parsing filter value spellings
#[derive(Error, Debug)]
pub enum FilterError {
    /// The range text did not have the MIN-MAX shape
    #[error("invalid price range '{input}': expected MIN-MAX, e.g. 100-500")]
    InvalidPriceRange { input: String },

    /// One of the bounds was not a number
    #[error("invalid price bound '{value}' in range '{input}'")]
    InvalidPriceBound { input: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, FilterError>;
