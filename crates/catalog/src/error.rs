//! Error types for the catalog crate.
//!
//! The catalog itself is infallible (all data is constructed in code);
//! errors only arise when parsing user-supplied text into catalog types.

use thiserror::Error;

/// Errors from parsing catalog value spellings
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A location kind string was neither "online" nor "local"
    #[error("unknown location type '{value}' (expected 'online' or 'local')")]
    UnknownLocationKind { value: String },
}
