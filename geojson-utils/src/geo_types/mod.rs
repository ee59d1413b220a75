//! Support for [`geo_types`] geometries.
//!
//! `geo_types` points can be used directly as the tested point of the containment predicates. Line strings and
//! polygons are converted into the crate's own records, checking the coordinate counts on the way.

use geo_types::Coord;
use log::debug;

use crate::error::GeoJsonUtilsError;
use crate::position::{GeoPoint, NewGeoPoint, Position};
use crate::{LineString, LinearRing, MultiPolygon, Polygon};

impl GeoPoint for Coord<f64> {
    fn lat(&self) -> f64 {
        self.y
    }

    fn lon(&self) -> f64 {
        self.x
    }
}

impl NewGeoPoint for Coord<f64> {
    fn latlon(lat: f64, lon: f64) -> Self {
        geo_types::coord!(x: lon, y: lat)
    }
}

impl GeoPoint for geo_types::Point<f64> {
    fn lat(&self) -> f64 {
        self.y()
    }

    fn lon(&self) -> f64 {
        self.x()
    }
}

impl NewGeoPoint for geo_types::Point<f64> {
    fn latlon(lat: f64, lon: f64) -> Self {
        geo_types::Point::new(lon, lat)
    }
}

impl From<Coord<f64>> for Position {
    fn from(value: Coord<f64>) -> Self {
        Position::new(value.x, value.y)
    }
}

impl TryFrom<&geo_types::LineString<f64>> for LineString {
    type Error = GeoJsonUtilsError;

    fn try_from(value: &geo_types::LineString<f64>) -> Result<Self, Self::Error> {
        LineString::new(value.coords().copied()).inspect_err(|err| {
            debug!("Failed to convert geo-types line string: {err}");
        })
    }
}

impl TryFrom<&geo_types::LineString<f64>> for LinearRing {
    type Error = GeoJsonUtilsError;

    fn try_from(value: &geo_types::LineString<f64>) -> Result<Self, Self::Error> {
        LinearRing::new(value.coords().copied())
    }
}

impl TryFrom<&geo_types::Polygon<f64>> for Polygon {
    type Error = GeoJsonUtilsError;

    fn try_from(value: &geo_types::Polygon<f64>) -> Result<Self, Self::Error> {
        let rings = std::iter::once(value.exterior())
            .chain(value.interiors())
            .map(LinearRing::try_from)
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|err| {
                debug!("Failed to convert geo-types polygon: {err}");
            })?;

        Polygon::new(rings)
    }
}

impl TryFrom<&geo_types::MultiPolygon<f64>> for MultiPolygon {
    type Error = GeoJsonUtilsError;

    fn try_from(value: &geo_types::MultiPolygon<f64>) -> Result<Self, Self::Error> {
        Ok(MultiPolygon::new(
            value
                .iter()
                .map(Polygon::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        ))
    }
}
