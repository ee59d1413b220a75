//! Axis-aligned envelopes used to reject points before the exact containment test.

use serde::{Deserialize, Serialize};

use crate::frame::FramePoint;
use crate::position::GeoPoint;
use crate::Polygon;

/// Axis-aligned rectangle in the computation [frame](crate::frame): `x` is latitude, `y` is longitude.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum latitude.
    pub x_min: f64,
    /// Minimum longitude.
    pub y_min: f64,
    /// Maximum latitude.
    pub x_max: f64,
    /// Maximum longitude.
    pub y_max: f64,
}

impl BoundingBox {
    /// Creates a new bounding box.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Zero-size bounding box around a single point.
    pub fn from_point(p: &impl GeoPoint) -> Self {
        let p = FramePoint::from_geo(p);
        Self::new(p.x(), p.y(), p.x(), p.y())
    }

    /// Grows the box to include the point `p`.
    pub fn extend(&mut self, p: &impl GeoPoint) {
        let p = FramePoint::from_geo(p);
        if self.x_min > p.x() {
            self.x_min = p.x();
        }
        if self.y_min > p.y() {
            self.y_min = p.y();
        }
        if self.x_max < p.x() {
            self.x_max = p.x();
        }
        if self.y_max < p.y() {
            self.y_max = p.y();
        }
    }

    /// Smallest box containing both boxes.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Returns true if the point is inside the box or on its border.
    pub fn contains(&self, point: &impl GeoPoint) -> bool {
        let p = FramePoint::from_geo(point);
        self.x_min <= p.x() && self.x_max >= p.x() && self.y_min <= p.y() && self.y_max >= p.y()
    }

    /// Bounds as `[x_min, y_min, x_max, y_max]`, i.e. `[min lat, min lon, max lat, max lon]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.x_min, self.y_min, self.x_max, self.y_max]
    }
}

/// Envelope of the polygon's outer ring.
///
/// Other rings are ignored, which is consistent with the polygon holes not being supported. Note that the
/// [ray cast](crate::pnpoly::point_in_rings) does look at all the rings, so a ring sticking out of the outer one is
/// not covered by the envelope.
pub fn envelope(polygon: &Polygon) -> BoundingBox {
    let ring = polygon.outer_ring();
    let mut bbox = BoundingBox::from_point(ring.first_point());
    for p in ring.iter() {
        bbox.extend(p);
    }

    bbox
}

/// Returns true if the point is inside the bounding box or on its border.
pub fn point_in_bbox(point: &impl GeoPoint, bbox: &BoundingBox) -> bool {
    bbox.contains(point)
}
