use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::Coordinates;
use crate::contour::Contour;
use crate::error::GeoJsonUtilsError;
use crate::position::Position;

/// GeoJSON `LineString` geometry: an open contour of at least two positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Coordinates<Vec<Position>>",
    into = "Coordinates<Vec<Position>>"
)]
pub struct LineString {
    coordinates: Vec<Position>,
}

impl LineString {
    /// Creates a new line string.
    ///
    /// Returns [`GeoJsonUtilsError::MalformedGeometry`] if there are less than 2 positions.
    pub fn new(
        coordinates: impl IntoIterator<Item = impl Into<Position>>,
    ) -> Result<Self, GeoJsonUtilsError> {
        let coordinates: Vec<Position> = coordinates.into_iter().map(Into::into).collect();
        if coordinates.len() < 2 {
            return Err(GeoJsonUtilsError::MalformedGeometry(format!(
                "line string must have at least 2 positions, but has {}",
                coordinates.len()
            )));
        }

        Ok(Self { coordinates })
    }
}

impl Deref for LineString {
    type Target = [Position];

    fn deref(&self) -> &Self::Target {
        &self.coordinates
    }
}

impl Contour for LineString {
    fn is_closed(&self) -> bool {
        false
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ Position> {
        self.coordinates.iter()
    }
}

impl TryFrom<Vec<Position>> for LineString {
    type Error = GeoJsonUtilsError;

    fn try_from(value: Vec<Position>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<Coordinates<Vec<Position>>> for LineString {
    type Error = GeoJsonUtilsError;

    fn try_from(value: Coordinates<Vec<Position>>) -> Result<Self, Self::Error> {
        Self::new(value.coordinates)
    }
}

impl From<LineString> for Coordinates<Vec<Position>> {
    fn from(value: LineString) -> Self {
        Coordinates {
            coordinates: value.coordinates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn too_short() {
        assert_matches!(
            LineString::new([[0.0, 0.0]]),
            Err(GeoJsonUtilsError::MalformedGeometry(_))
        );
        assert_matches!(
            LineString::new(Vec::<Position>::new()),
            Err(GeoJsonUtilsError::MalformedGeometry(_))
        );
    }

    #[test]
    fn decode() {
        let line: LineString = serde_json::from_str(
            r#"{"type": "LineString", "coordinates": [[0, 0], [10, 10], [20, 0]]}"#,
        )
        .unwrap();
        assert_eq!(line.len(), 3);
        assert_eq!(line[2], Position::new(20.0, 0.0));

        let err = serde_json::from_str::<LineString>(r#"{"coordinates": [[0, 0]]}"#).unwrap_err();
        assert!(err.to_string().contains("at least 2 positions"));
    }

    #[test]
    fn encode() {
        let line = LineString::new([[0.0, 0.0], [1.0, 2.0]]).unwrap();
        assert_eq!(
            serde_json::to_string(&line).unwrap(),
            r#"{"coordinates":[[0.0,0.0],[1.0,2.0]]}"#
        );
    }
}
