//! Geometric predicates over GeoJSON geometries.
//!
//! The crate answers two questions about already decoded GeoJSON records:
//!
//! * where do two line strings cross each other ([`linestrings_intersect`]);
//! * is a point inside a polygon or a multipolygon ([`point_in_polygon`], [`point_in_multipolygon`]).
//!
//! Containment is checked with a cheap [envelope](bounding_box::envelope) test first and the even-odd
//! [ray cast](pnpoly::point_in_rings) afterwards.
//!
//! Polygons with holes are not supported: every ring of a polygon adds area to it.
//!
//! # Coordinate frame
//!
//! Positions are stored in GeoJSON order `[lon, lat]`, but all computations are done in a planar frame where the
//! latitude is the `x` axis and the longitude is the `y` axis. See [`frame`] module for details.
//!
//! ```
//! use geojson_utils::{point_in_polygon, LinearRing, NewGeoPoint, Point, Polygon};
//!
//! let square = Polygon::from(LinearRing::new([[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]])?);
//! assert!(point_in_polygon(&Point::lonlat(5.0, 5.0), &square));
//! # Ok::<(), geojson_utils::error::GeoJsonUtilsError>(())
//! ```

pub mod bounding_box;
pub mod containment;
pub mod contour;
pub mod error;
pub mod frame;
pub mod intersect;
pub mod pnpoly;
pub mod position;
pub mod segment;
pub mod units;

mod impls;
pub use impls::*;

#[cfg(feature = "geo-types")]
mod geo_types;

#[cfg(feature = "geojson")]
mod geojson;

pub use bounding_box::{envelope, point_in_bbox, BoundingBox};
pub use containment::{point_in_multipolygon, point_in_polygon, Polygonal};
pub use contour::Contour;
pub use intersect::linestrings_intersect;
pub use position::{GeoPoint, NewGeoPoint, Position};
pub use units::{degrees_to_radians, radians_to_degrees};
