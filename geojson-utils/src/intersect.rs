use crate::contour::Contour;
use crate::impls::Point;

/// Returns all the points where the segments of `line_a` cross the segments of `line_b`.
///
/// Every segment of `line_a` is checked against every segment of `line_b`, and the points are returned in that
/// order (outer loop over `line_a`, inner loop over `line_b`). A crossing at a vertex shared by two adjacent segments
/// is reported once per segment pair, so it can appear more than once.
///
/// The points are in GeoJSON `[lon, lat]` order, same as the input positions.
///
/// Parallel segments are skipped, so collinear overlapping lines are never reported. See
/// [`Segment::intersection`](crate::segment::Segment::intersection).
pub fn linestrings_intersect(line_a: &impl Contour, line_b: &impl Contour) -> Vec<Point> {
    line_a
        .iter_segments()
        .flat_map(|a| {
            line_b
                .iter_segments()
                .filter_map(move |b| a.intersection(&b))
        })
        .map(Point::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GeoPoint, LineString, LinearRing, NewGeoPoint, Position};
    use approx::assert_abs_diff_eq;

    fn line(points: &[[f64; 2]]) -> LineString {
        LineString::new(points.iter().copied()).unwrap()
    }

    fn sorted(points: Vec<Point>) -> Vec<[f64; 2]> {
        let mut coords: Vec<[f64; 2]> = points.iter().map(|p| p.position().coords()).collect();
        coords.sort_by(|a, b| a.partial_cmp(b).unwrap());
        coords
    }

    #[test]
    fn diagonals_cross() {
        let up = line(&[[0.0, 0.0], [10.0, 10.0]]);
        let down = line(&[[10.0, 0.0], [0.0, 10.0]]);
        assert_eq!(
            linestrings_intersect(&up, &down),
            vec![Point::lonlat(5.0, 5.0)]
        );
    }

    #[test]
    fn far_away() {
        let up = line(&[[0.0, 0.0], [10.0, 10.0]]);
        let far = line(&[[100.0, 100.0], [110.0, 110.0]]);
        assert!(linestrings_intersect(&up, &far).is_empty());
    }

    #[test]
    fn order_follows_segments() {
        let zigzag = line(&[[0.0, 0.0], [2.0, 2.0], [4.0, 0.0], [6.0, 2.0]]);
        let horizontal = line(&[[6.0, 1.0], [-1.0, 1.0]]);

        let points = linestrings_intersect(&zigzag, &horizontal);
        assert_eq!(points.len(), 3);
        assert_abs_diff_eq!(points[0].position(), Position::new(1.0, 1.0));
        assert_abs_diff_eq!(points[1].position(), Position::new(3.0, 1.0));
        assert_abs_diff_eq!(points[2].position(), Position::new(5.0, 1.0));
    }

    #[test]
    fn same_set_both_ways() {
        let a = line(&[[0.0, 0.0], [2.0, 2.0], [4.0, 0.0], [6.0, 2.0]]);
        let b = line(&[[0.5, 2.0], [0.5, -1.0], [5.5, 2.0]]);

        let ab = linestrings_intersect(&a, &b);
        let ba = linestrings_intersect(&b, &a);
        assert!(!ab.is_empty());

        let (ab, ba) = (sorted(ab), sorted(ba));
        assert_eq!(ab.len(), ba.len());
        for (p, q) in ab.iter().zip(&ba) {
            assert_abs_diff_eq!(Position::from(*p), Position::from(*q), epsilon = 1e-12);
        }
    }

    #[test]
    fn collinear_overlap_is_not_reported() {
        let a = line(&[[0.0, 0.0], [10.0, 0.0]]);
        let b = line(&[[5.0, 0.0], [15.0, 0.0]]);
        assert!(linestrings_intersect(&a, &b).is_empty());
    }

    #[test]
    fn shared_vertex_is_reported_per_segment() {
        let a = line(&[[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]]);
        let b = line(&[[1.0, 1.0], [1.0, 5.0]]);
        let points = linestrings_intersect(&a, &b);
        assert_eq!(points, vec![Point::lonlat(1.0, 1.0), Point::lonlat(1.0, 1.0)]);
    }

    #[test]
    fn ring_crossing_line() {
        let ring = LinearRing::new([[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]).unwrap();
        let across = line(&[[-1.0, 2.0], [5.0, 2.0]]);
        let points = linestrings_intersect(&ring, &across);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].lon(), 4.0);
        assert_eq!(points[1].lon(), 0.0);
    }
}
