use serde::{Deserialize, Serialize};

use super::Coordinates;
use crate::position::{GeoPoint, NewGeoPoint, Position};

/// GeoJSON `Point` geometry.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Coordinates<Position>", into = "Coordinates<Position>")]
pub struct Point {
    coordinates: Position,
}

impl Point {
    /// Creates a new point at the given position.
    pub const fn new(coordinates: Position) -> Self {
        Self { coordinates }
    }

    /// Position of the point.
    pub fn position(&self) -> Position {
        self.coordinates
    }
}

impl GeoPoint for Point {
    fn lat(&self) -> f64 {
        self.coordinates.lat()
    }

    fn lon(&self) -> f64 {
        self.coordinates.lon()
    }
}

impl NewGeoPoint for Point {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self::new(Position::latlon(lat, lon))
    }
}

impl From<Position> for Point {
    fn from(coordinates: Position) -> Self {
        Self::new(coordinates)
    }
}

impl From<Coordinates<Position>> for Point {
    fn from(value: Coordinates<Position>) -> Self {
        Self::new(value.coordinates)
    }
}

impl From<Point> for Coordinates<Position> {
    fn from(value: Point) -> Self {
        Coordinates {
            coordinates: value.coordinates,
        }
    }
}
