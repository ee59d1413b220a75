//! Conversions from the [`geojson`] crate values.

use geojson::{LineStringType, PolygonType, Value};
use log::debug;

use crate::error::GeoJsonUtilsError;
use crate::position::Position;
use crate::{Geometry, LineString, LinearRing, MultiPolygon, Point, Polygon};

fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

fn unexpected(expected: &str, value: &Value) -> GeoJsonUtilsError {
    let err = GeoJsonUtilsError::Conversion(format!(
        "expected {expected} geometry, but got {}",
        value_type(value)
    ));
    debug!("Failed to convert GeoJSON value: {err}");
    err
}

fn convert_positions(positions: &LineStringType) -> Result<Vec<Position>, GeoJsonUtilsError> {
    positions
        .iter()
        .map(|p| Position::try_from(p.as_slice()))
        .collect()
}

fn convert_polygon(polygon: &PolygonType) -> Result<Polygon, GeoJsonUtilsError> {
    Polygon::new(
        polygon
            .iter()
            .map(|ring| LinearRing::new(convert_positions(ring)?))
            .collect::<Result<Vec<_>, _>>()?,
    )
}

impl TryFrom<&Value> for Point {
    type Error = GeoJsonUtilsError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Point(p) => Ok(Point::new(Position::try_from(p.as_slice())?)),
            other => Err(unexpected("Point", other)),
        }
    }
}

impl TryFrom<&Value> for LineString {
    type Error = GeoJsonUtilsError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::LineString(points) => LineString::new(convert_positions(points)?),
            other => Err(unexpected("LineString", other)),
        }
    }
}

impl TryFrom<&Value> for Polygon {
    type Error = GeoJsonUtilsError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Polygon(polygon) => convert_polygon(polygon),
            other => Err(unexpected("Polygon", other)),
        }
    }
}

impl TryFrom<&Value> for MultiPolygon {
    type Error = GeoJsonUtilsError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::MultiPolygon(mp) => Ok(MultiPolygon::new(
                mp.iter()
                    .map(convert_polygon)
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            other => Err(unexpected("MultiPolygon", other)),
        }
    }
}

impl TryFrom<&Value> for Geometry {
    type Error = GeoJsonUtilsError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Point(_) => Geometry::Point(value.try_into()?),
            Value::LineString(_) => Geometry::LineString(value.try_into()?),
            Value::Polygon(_) => Geometry::Polygon(value.try_into()?),
            Value::MultiPolygon(_) => Geometry::MultiPolygon(value.try_into()?),
            other => {
                return Err(unexpected(
                    "Point, LineString, Polygon or MultiPolygon",
                    other,
                ))
            }
        })
    }
}

macro_rules! impl_from_geojson_geometry {
    ($($t:ty),*) => {
        $(
            impl TryFrom<&geojson::Geometry> for $t {
                type Error = GeoJsonUtilsError;

                fn try_from(value: &geojson::Geometry) -> Result<Self, Self::Error> {
                    Self::try_from(&value.value)
                }
            }
        )*
    };
}

impl_from_geojson_geometry!(Point, LineString, Polygon, MultiPolygon, Geometry);
