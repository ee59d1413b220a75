use serde::{Deserialize, Serialize};

use super::{Coordinates, LinearRing, Polygon};
use crate::bounding_box::{envelope, BoundingBox};
use crate::error::GeoJsonUtilsError;
use crate::position::GeoPoint;

/// GeoJSON `MultiPolygon` geometry. Can be empty, in which case it contains no points.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Coordinates<Vec<Vec<LinearRing>>>",
    into = "Coordinates<Vec<Vec<LinearRing>>>"
)]
pub struct MultiPolygon {
    parts: Vec<Polygon>,
}

impl MultiPolygon {
    /// Creates a new multipolygon.
    pub fn new(parts: Vec<Polygon>) -> Self {
        Self { parts }
    }

    /// Returns reference to the inner polygons.
    pub fn parts(&self) -> &[Polygon] {
        &self.parts
    }

    /// Envelope of all the polygons, merged. `None` for an empty multipolygon.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.parts.iter().map(envelope).reduce(|a, b| a.merge(&b))
    }

    /// Returns true if the `point` is inside any of the polygons. Same as
    /// [`point_in_multipolygon`](crate::point_in_multipolygon).
    pub fn contains_point(&self, point: &impl GeoPoint) -> bool {
        crate::containment::point_in_multipolygon(point, self)
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(parts: Vec<Polygon>) -> Self {
        Self { parts }
    }
}

impl From<Polygon> for MultiPolygon {
    fn from(polygon: Polygon) -> Self {
        Self {
            parts: vec![polygon],
        }
    }
}

impl TryFrom<Coordinates<Vec<Vec<LinearRing>>>> for MultiPolygon {
    type Error = GeoJsonUtilsError;

    fn try_from(value: Coordinates<Vec<Vec<LinearRing>>>) -> Result<Self, Self::Error> {
        let parts = value
            .coordinates
            .into_iter()
            .map(Polygon::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { parts })
    }
}

impl From<MultiPolygon> for Coordinates<Vec<Vec<LinearRing>>> {
    fn from(value: MultiPolygon) -> Self {
        Coordinates {
            coordinates: value
                .parts
                .into_iter()
                .map(|polygon| polygon.rings().to_vec())
                .collect(),
        }
    }
}
