use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::contour::Contour;
use crate::error::GeoJsonUtilsError;
use crate::position::Position;

/// A closed contour bounding a polygon.
///
/// The first position does not have to be repeated at the end: the ring is always walked as closed. See
/// [`contour`](crate::contour) module for details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Position>", into = "Vec<Position>")]
pub struct LinearRing {
    points: Vec<Position>,
}

impl LinearRing {
    /// Creates a new ring.
    ///
    /// Returns [`GeoJsonUtilsError::MalformedGeometry`] if there are no positions.
    pub fn new(
        points: impl IntoIterator<Item = impl Into<Position>>,
    ) -> Result<Self, GeoJsonUtilsError> {
        let points: Vec<Position> = points.into_iter().map(Into::into).collect();
        if points.is_empty() {
            return Err(GeoJsonUtilsError::MalformedGeometry(
                "polygon ring must not be empty".to_string(),
            ));
        }

        Ok(Self { points })
    }

    /// First position of the ring.
    pub fn first_point(&self) -> &Position {
        &self.points[0]
    }
}

impl Deref for LinearRing {
    type Target = [Position];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl Contour for LinearRing {
    fn is_closed(&self) -> bool {
        true
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ Position> {
        self.points.iter()
    }
}

impl TryFrom<Vec<Position>> for LinearRing {
    type Error = GeoJsonUtilsError;

    fn try_from(value: Vec<Position>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LinearRing> for Vec<Position> {
    fn from(value: LinearRing) -> Self {
        value.points
    }
}
