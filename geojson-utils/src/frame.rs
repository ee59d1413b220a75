//! Planar frame the predicates are computed in.
//!
//! GeoJSON stores a position as `[lon, lat]`. Every predicate of the crate reads the **latitude as `x`** and the
//! **longitude as `y`**. Bounding boxes are expressed in the same frame, so a [`BoundingBox`](crate::BoundingBox)
//! lists its bounds as `[min lat, min lon, max lat, max lon]`.
//!
//! [`FramePoint::from_geo`] is the only place where this reordering happens. Do not swap coordinates inline.

use std::ops::{Add, Sub};

use nalgebra::{Point2, Vector2};

use crate::position::{GeoPoint, NewGeoPoint};

/// A point in the computation frame: `x` is latitude, `y` is longitude.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FramePoint(Point2<f64>);

impl FramePoint {
    /// Creates a frame point from its frame coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self(Point2::new(x, y))
    }

    /// Maps a geographic point into the frame.
    pub fn from_geo(point: &impl GeoPoint) -> Self {
        Self::new(point.lat(), point.lon())
    }

    /// Maps the point back into geographic coordinates.
    pub fn into_geo<P: NewGeoPoint>(self) -> P {
        P::latlon(self.0.x, self.0.y)
    }

    /// Frame `x` coordinate (latitude).
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Frame `y` coordinate (longitude).
    pub fn y(&self) -> f64 {
        self.0.y
    }
}

impl Sub for FramePoint {
    type Output = Vector2<f64>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

impl Add<Vector2<f64>> for FramePoint {
    type Output = FramePoint;

    fn add(self, rhs: Vector2<f64>) -> Self::Output {
        Self(self.0 + rhs)
    }
}
