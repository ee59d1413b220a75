//! Even-odd ray casting ("pnpoly") containment test.
//!
//! A horizontal ray is cast from the tested point, and every polygon edge it crosses flips the result. Each ring is
//! processed on its own, closed from its last position back to the first one, and the rings are combined with
//! logical OR. This means a point inside any ring is inside the polygon: rings after the first one are not holes.
//!
//! Points exactly on a polygon edge or vertex may be reported either way, but the result is deterministic for the
//! same input.

use crate::contour::Contour;
use crate::frame::FramePoint;
use crate::segment::Segment;
use crate::LinearRing;

/// Returns true if the point with frame coordinates `(x, y)` is inside any of the `rings`.
///
/// `x` and `y` are the coordinates in the computation [frame](crate::frame), i.e. the point's latitude and longitude.
pub fn point_in_rings<'a>(x: f64, y: f64, rings: impl IntoIterator<Item = &'a LinearRing>) -> bool {
    rings.into_iter().any(|ring| ring_contains(x, y, ring))
}

fn ring_contains(x: f64, y: f64, ring: &impl Contour) -> bool {
    let mut inside = false;
    for Segment(prev, next) in ring.iter_segments() {
        if crosses(x, y, FramePoint::from_geo(next), FramePoint::from_geo(prev)) {
            inside = !inside;
        }
    }

    inside
}

/// Whether the ray from `(x, y)` towards increasing `x` crosses the edge `vi -> vj`.
fn crosses(x: f64, y: f64, vi: FramePoint, vj: FramePoint) -> bool {
    if (vi.y() > y) == (vj.y() > y) {
        return false;
    }

    // The edge straddles the ray, so it cannot be parallel to it.
    let dy = vj.y() - vi.y();
    if dy == 0.0 {
        return false;
    }

    x < (vj.x() - vi.x()) * (y - vi.y()) / dy + vi.x()
}
