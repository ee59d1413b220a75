use log::trace;

use crate::frame::FramePoint;
use crate::position::Position;

/// A straight line segment between two positions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment<'a>(pub &'a Position, pub &'a Position);

impl Segment<'_> {
    /// Returns the point where this segment crosses the `other` one, or `None` if they do not cross.
    ///
    /// Both segments are taken as parametric lines `a1 + ua * (a2 - a1)` and `b1 + ub * (b2 - b1)`. The segments
    /// cross if the solution has both `ua` and `ub` in `[0, 1]`, ends included, so touching segments are reported
    /// too.
    ///
    /// Parallel segments never cross, even when they are collinear and overlap. The same is true for segments of
    /// zero length.
    pub fn intersection(&self, other: &Segment<'_>) -> Option<Position> {
        let a1 = FramePoint::from_geo(self.0);
        let a2 = FramePoint::from_geo(self.1);
        let b1 = FramePoint::from_geo(other.0);
        let b2 = FramePoint::from_geo(other.1);

        let da = a2 - a1;
        let db = b2 - b1;
        let d1 = a1 - b1;

        let denom = db.y * da.x - db.x * da.y;
        if denom == 0.0 {
            trace!("Segments {self:?} and {other:?} are parallel");
            return None;
        }

        let ua = (db.x * d1.y - db.y * d1.x) / denom;
        let ub = (da.x * d1.y - da.y * d1.x) / denom;

        if (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub) {
            Some((a1 + da * ua).into_geo())
        } else {
            None
        }
    }
}
