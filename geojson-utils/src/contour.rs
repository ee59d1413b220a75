//! Contour is a sequence of positions.
//!
//! Contours can be:
//! * **open** - the first and the last positions are not connected. A [`LineString`](crate::LineString) is an open
//!   contour.
//! * **closed** - the last position is connected back to the first one. A [`LinearRing`](crate::LinearRing) is a
//!   closed contour.
//!
//! # Closing segment
//!
//! GeoJSON rings usually repeat the first position at the end, but this is not required here. Closed contours
//! always walk the segment from the last position back to the first one. If the ring is already explicitly closed,
//! that segment has zero length and does not change the result of any predicate in the crate.

use crate::position::Position;
use crate::segment::Segment;

/// Sequence of positions. See module level documentation for details.
pub trait Contour {
    /// Whether the contour is closed.
    fn is_closed(&self) -> bool;

    /// Iterate over the positions of the contour, as stored.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Position>;

    /// Same as [`Contour::iter_points`] but for closed contours repeats the first position again at the end.
    fn iter_points_closing(&self) -> impl Iterator<Item = &'_ Position> {
        ContourPointsIterator::new(self.iter_points(), self.is_closed())
    }

    /// Iterates over segments of the contour. For closed contours this includes the segment between the last and
    /// the first positions.
    fn iter_segments(&self) -> impl Iterator<Item = Segment<'_>> {
        ContourSegmentIterator::new(ContourPointsIterator::new(
            self.iter_points(),
            self.is_closed(),
        ))
    }
}

/// Iterator of contour positions.
#[derive(Debug, Clone)]
pub struct ContourPointsIterator<'a, Iter>
where
    Iter: Iterator<Item = &'a Position>,
{
    points_iter: Iter,
    is_closed: bool,
    first_point: Option<&'a Position>,
}

impl<'a, Iter> ContourPointsIterator<'a, Iter>
where
    Iter: Iterator<Item = &'a Position>,
{
    fn new(points_iter: Iter, is_closed: bool) -> Self {
        Self {
            points_iter,
            is_closed,
            first_point: None,
        }
    }
}

impl<'a, Iter> Iterator for ContourPointsIterator<'a, Iter>
where
    Iter: Iterator<Item = &'a Position>,
{
    type Item = &'a Position;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.points_iter.next();
        if self.is_closed && self.first_point.is_none() {
            self.first_point = next;
            // the first position is captured once
            self.is_closed = false;
        }

        if next.is_none() {
            self.first_point.take()
        } else {
            next
        }
    }
}

/// Iterator of contour segments.
#[derive(Debug, Clone)]
pub struct ContourSegmentIterator<'a, Iter>
where
    Iter: Iterator<Item = &'a Position>,
{
    points_iter: ContourPointsIterator<'a, Iter>,
    prev_point: Option<&'a Position>,
}

impl<'a, Iter> ContourSegmentIterator<'a, Iter>
where
    Iter: Iterator<Item = &'a Position>,
{
    fn new(points_iter: ContourPointsIterator<'a, Iter>) -> Self {
        Self {
            points_iter,
            prev_point: None,
        }
    }
}

impl<'a, Iter> Iterator for ContourSegmentIterator<'a, Iter>
where
    Iter: Iterator<Item = &'a Position>,
{
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next_point = self.points_iter.next()?;
            if let Some(prev) = self.prev_point.replace(next_point) {
                return Some(Segment(prev, next_point));
            }
        }
    }
}
