//! Point-in-polygon and point-in-multipolygon tests.
//!
//! Containment is decided in two phases:
//!
//! 1. The point is checked against the [envelope] of every polygon. If it is outside all of them, the result is
//!    `false` and no ray casting is done.
//! 2. Otherwise the point is [ray cast](point_in_rings) against every polygon, and the result is `true` if any of
//!    them contains it.
//!
//! The first phase is an approximation of the second one, not an exact equivalent: envelopes only cover the outer
//! ring, while the ray cast looks at all the rings.

use log::trace;

use crate::bounding_box::{envelope, point_in_bbox};
use crate::frame::FramePoint;
use crate::impls::{Geometry, MultiPolygon, Polygon};
use crate::pnpoly::point_in_rings;
use crate::position::GeoPoint;

/// Geometry that can be represented as a set of polygons.
pub trait Polygonal {
    /// Iterates over the polygons of the geometry.
    fn polygons(&self) -> impl Iterator<Item = &'_ Polygon>;
}

impl Polygonal for Polygon {
    fn polygons(&self) -> impl Iterator<Item = &'_ Polygon> {
        std::iter::once(self)
    }
}

impl Polygonal for MultiPolygon {
    fn polygons(&self) -> impl Iterator<Item = &'_ Polygon> {
        self.parts().iter()
    }
}

impl Polygonal for [Polygon] {
    fn polygons(&self) -> impl Iterator<Item = &'_ Polygon> {
        self.iter()
    }
}

impl Polygonal for Geometry {
    /// Point and line string geometries have no polygons.
    fn polygons(&self) -> impl Iterator<Item = &'_ Polygon> {
        let parts: &[Polygon] = match self {
            Geometry::Polygon(polygon) => std::slice::from_ref(polygon),
            Geometry::MultiPolygon(mp) => mp.parts(),
            Geometry::Point(_) | Geometry::LineString(_) => &[],
        };

        parts.iter()
    }
}

/// Returns true if the `point` is inside the polygonal geometry.
///
/// All the polygons of `polygonal` are treated as parts of one region: the point must be inside the envelope of
/// any part, and then inside any part.
pub fn point_in_polygon(point: &impl GeoPoint, polygonal: &(impl Polygonal + ?Sized)) -> bool {
    let parts: Vec<&Polygon> = polygonal.polygons().collect();
    parts_contain(point, &parts)
}

/// Returns true if the `point` is inside any polygon of the polygonal geometry.
///
/// The polygons are checked one by one in order, and the check stops at the first polygon containing the point.
pub fn point_in_multipolygon(point: &impl GeoPoint, polygonal: &(impl Polygonal + ?Sized)) -> bool {
    polygonal
        .polygons()
        .any(|polygon| parts_contain(point, &[polygon]))
}

fn parts_contain(point: &impl GeoPoint, parts: &[&Polygon]) -> bool {
    if !parts
        .iter()
        .any(|polygon| point_in_bbox(point, &envelope(polygon)))
    {
        trace!(
            "Point ({}, {}) is outside of the envelopes of {} polygon(s)",
            point.lon(),
            point.lat(),
            parts.len()
        );
        return false;
    }

    let p = FramePoint::from_geo(point);
    parts
        .iter()
        .any(|polygon| point_in_rings(p.x(), p.y(), polygon.rings()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LineString, LinearRing, NewGeoPoint, Point, Position};

    fn square(lon: f64, lat: f64, size: f64) -> Polygon {
        Polygon::from(
            LinearRing::new([
                [lon, lat],
                [lon + size, lat],
                [lon + size, lat + size],
                [lon, lat + size],
            ])
            .unwrap(),
        )
    }

    #[test]
    fn point_in_square() {
        let polygon = square(0.0, 0.0, 10.0);
        assert!(point_in_polygon(&Point::lonlat(5.0, 5.0), &polygon));
        assert!(!point_in_polygon(&Point::lonlat(15.0, 15.0), &polygon));
        assert!(point_in_polygon(&Position::new(9.0, 1.0), &polygon));
    }

    #[test]
    fn multipolygon_short_circuits_in_order() {
        let mp = MultiPolygon::new(vec![square(0.0, 0.0, 10.0), square(10.0, 10.0, 10.0)]);
        assert!(point_in_multipolygon(&Point::lonlat(0.5, 0.5), &mp));
        assert!(point_in_multipolygon(&Point::lonlat(15.0, 15.0), &mp));
        assert!(!point_in_multipolygon(&Point::lonlat(-1.0, -1.0), &mp));
        assert!(!point_in_multipolygon(&Point::lonlat(5.0, 15.0), &mp));
    }

    #[test]
    fn polygon_and_multipolygon_agree() {
        let parts = vec![
            square(0.0, 0.0, 10.0),
            square(10.0, 10.0, 10.0),
            square(-30.0, 5.0, 2.0),
        ];
        let mp = MultiPolygon::new(parts.clone());
        let points = [
            Point::lonlat(0.5, 0.5),
            Point::lonlat(15.0, 12.0),
            Point::lonlat(-29.0, 6.0),
            Point::lonlat(-29.0, 8.0),
            Point::lonlat(11.0, 5.0),
        ];

        for point in points {
            let in_any_part = parts.iter().any(|part| point_in_polygon(&point, part));
            assert_eq!(point_in_multipolygon(&point, &mp), in_any_part);
            assert_eq!(point_in_polygon(&point, &mp), in_any_part);
            assert_eq!(point_in_multipolygon(&point, &parts[..]), in_any_part);
        }
    }

    #[test]
    fn single_polygon_as_multipolygon() {
        let polygon = square(0.0, 0.0, 10.0);
        assert!(point_in_multipolygon(&Point::lonlat(5.0, 5.0), &polygon));
        assert!(!point_in_multipolygon(&Point::lonlat(-5.0, 5.0), &polygon));
    }

    #[test]
    fn geometry_wrapper() {
        let geometry = Geometry::from(square(0.0, 0.0, 10.0));
        assert!(point_in_polygon(&Point::lonlat(5.0, 5.0), &geometry));

        let line = Geometry::from(LineString::new([[0.0, 0.0], [10.0, 10.0]]).unwrap());
        assert!(!point_in_polygon(&Point::lonlat(5.0, 5.0), &line));
        assert!(!point_in_multipolygon(&Point::lonlat(5.0, 5.0), &line));
    }

    #[test]
    fn empty_multipolygon() {
        assert!(!point_in_polygon(
            &Point::lonlat(0.0, 0.0),
            &MultiPolygon::default()
        ));
        assert!(!point_in_multipolygon(
            &Point::lonlat(0.0, 0.0),
            &MultiPolygon::default()
        ));
    }

    #[test]
    fn envelope_rejection_skips_second_ring() {
        // the second ring lies outside the outer ring's envelope
        let polygon = Polygon::new([
            LinearRing::new([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]).unwrap(),
            LinearRing::new([[5.0, 5.0], [6.0, 5.0], [6.0, 6.0], [5.0, 6.0]]).unwrap(),
        ])
        .unwrap();
        let point = Point::lonlat(5.5, 5.5);

        let p = FramePoint::from_geo(&point);
        assert!(point_in_rings(p.x(), p.y(), polygon.rings()));
        assert!(!point_in_polygon(&point, &polygon));
    }

    #[test]
    fn parts_share_envelope_phase() {
        // the first part's envelope lets the ray cast of the second part through
        let triangle = LinearRing::new([[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]]).unwrap();
        let first = Polygon::from(triangle);
        let second = Polygon::new([
            LinearRing::new([[20.0, 20.0], [21.0, 20.0], [21.0, 21.0]]).unwrap(),
            LinearRing::new([[2.0, 4.0], [4.0, 4.0], [4.0, 6.0], [2.0, 6.0]]).unwrap(),
        ])
        .unwrap();
        let parts = [first, second];
        let point = Point::lonlat(3.0, 5.0);

        assert!(point_in_polygon(&point, &parts[..]));
        assert!(!point_in_multipolygon(&point, &parts[..]));
    }
}
