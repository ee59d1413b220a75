use serde::{Deserialize, Serialize};

use super::{Coordinates, LinearRing};
use crate::error::GeoJsonUtilsError;
use crate::position::GeoPoint;

/// GeoJSON `Polygon` geometry.
///
/// The first ring is the outer boundary. Further rings are kept but are **not** treated as holes: the bounding box
/// of the polygon only looks at the outer ring, and the ray cast adds the area of every ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Coordinates<Vec<LinearRing>>",
    into = "Coordinates<Vec<LinearRing>>"
)]
pub struct Polygon {
    rings: Vec<LinearRing>,
}

impl Polygon {
    /// Creates a new polygon from its rings, outer ring first.
    ///
    /// Returns [`GeoJsonUtilsError::MalformedGeometry`] if there are no rings.
    pub fn new(rings: impl IntoIterator<Item = LinearRing>) -> Result<Self, GeoJsonUtilsError> {
        let rings: Vec<LinearRing> = rings.into_iter().collect();
        if rings.is_empty() {
            return Err(GeoJsonUtilsError::MalformedGeometry(
                "polygon must have at least one ring".to_string(),
            ));
        }

        Ok(Self { rings })
    }

    /// Outer ring of the polygon.
    pub fn outer_ring(&self) -> &LinearRing {
        &self.rings[0]
    }

    /// Rings following the outer one.
    pub fn inner_rings(&self) -> &[LinearRing] {
        &self.rings[1..]
    }

    /// All rings of the polygon, starting with the outer one.
    pub fn rings(&self) -> &[LinearRing] {
        &self.rings
    }

    /// Returns true if the `point` is inside the polygon. Same as [`point_in_polygon`](crate::point_in_polygon).
    pub fn contains_point(&self, point: &impl GeoPoint) -> bool {
        crate::containment::point_in_polygon(point, self)
    }
}

impl From<LinearRing> for Polygon {
    fn from(outer_ring: LinearRing) -> Self {
        Self {
            rings: vec![outer_ring],
        }
    }
}

impl TryFrom<Coordinates<Vec<LinearRing>>> for Polygon {
    type Error = GeoJsonUtilsError;

    fn try_from(value: Coordinates<Vec<LinearRing>>) -> Result<Self, Self::Error> {
        Self::new(value.coordinates)
    }
}

impl From<Polygon> for Coordinates<Vec<LinearRing>> {
    fn from(value: Polygon) -> Self {
        Coordinates {
            coordinates: value.rings,
        }
    }
}
