//! Simple implementations of GeoJSON geometry records.
//!
//! All records (de)serialize from the GeoJSON geometry object shape, e.g.
//! `{"type": "Point", "coordinates": [5, 5]}`. Coordinate count violations are rejected at construction and
//! decoding time with [`GeoJsonUtilsError::MalformedGeometry`](crate::error::GeoJsonUtilsError::MalformedGeometry),
//! so predicates never see them.

use serde::{Deserialize, Serialize};

mod geometry;
mod line_string;
mod linear_ring;
mod multi_polygon;
mod point;
mod polygon;

pub use geometry::Geometry;
pub use line_string::LineString;
pub use linear_ring::LinearRing;
pub use multi_polygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;

/// Serialized form of the geometry records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Coordinates<T> {
    pub(crate) coordinates: T,
}
