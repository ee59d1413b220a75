//! GeoJSON positions and traits of geographic points.

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::error::GeoJsonUtilsError;
use crate::units::degrees_to_radians;

/// A point with geographic coordinates in degrees.
///
/// Containment predicates accept any type implementing this trait as the tested point.
pub trait GeoPoint {
    /// Latitude in degrees.
    fn lat(&self) -> f64;
    /// Longitude in degrees.
    fn lon(&self) -> f64;

    /// Latitude in radians.
    fn lat_rad(&self) -> f64 {
        degrees_to_radians(self.lat())
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> f64 {
        degrees_to_radians(self.lon())
    }
}

/// Geographic point that can be constructed from its coordinates.
pub trait NewGeoPoint: GeoPoint + Sized {
    /// Creates a point from latitude and longitude.
    fn latlon(lat: f64, lon: f64) -> Self;

    /// Creates a point from longitude and latitude (GeoJSON order).
    fn lonlat(lon: f64, lat: f64) -> Self {
        Self::latlon(lat, lon)
    }
}

/// A single GeoJSON position: `[lon, lat]`.
///
/// Any altitude or other extra values are dropped when the position is decoded, so only two coordinates are ever
/// stored.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 2]")]
pub struct Position([f64; 2]);

impl Position {
    /// Creates a new position from longitude and latitude.
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self([lon, lat])
    }

    /// Returns the coordinates in GeoJSON order.
    pub fn coords(&self) -> [f64; 2] {
        self.0
    }
}

impl GeoPoint for Position {
    fn lat(&self) -> f64 {
        self.0[1]
    }

    fn lon(&self) -> f64 {
        self.0[0]
    }
}

impl NewGeoPoint for Position {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self::new(lon, lat)
    }
}

impl From<[f64; 2]> for Position {
    fn from(value: [f64; 2]) -> Self {
        Self(value)
    }
}

impl From<Position> for [f64; 2] {
    fn from(value: Position) -> Self {
        value.0
    }
}

impl TryFrom<&[f64]> for Position {
    type Error = GeoJsonUtilsError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        match value {
            [lon, lat, ..] => Ok(Self::new(*lon, *lat)),
            _ => Err(GeoJsonUtilsError::MalformedGeometry(format!(
                "position must contain at least 2 dimensions, but has {}",
                value.len()
            ))),
        }
    }
}

impl TryFrom<Vec<f64>> for Position {
    type Error = GeoJsonUtilsError;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

impl AbsDiffEq for Position {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0[0].abs_diff_eq(&other.0[0], epsilon) && self.0[1].abs_diff_eq(&other.0[1], epsilon)
    }
}
