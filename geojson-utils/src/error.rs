//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error, PartialEq)]
pub enum GeoJsonUtilsError {
    /// Geometry does not have enough coordinates to be meaningful, e.g. a line string with a single position or
    /// an empty polygon ring.
    #[error("malformed geometry: {0}")]
    MalformedGeometry(String),
    /// Geometry of one kind was given where another kind was expected.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
}
