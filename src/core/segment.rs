//! Line segments and intersection tests.
//!
//! Orientation is decided with exact comparisons against zero, so the same
//! inputs always classify the same way. Collinear touching counts as an
//! intersection: a route that grazes an inflated room edge is treated as
//! blocked.

use super::bounds::Bounds;
use super::point::Point2D;

/// Turn direction of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// The three points lie on one line.
    Collinear,
    /// Clockwise turn (in a y-up frame).
    Clockwise,
    /// Counter-clockwise turn (in a y-up frame).
    CounterClockwise,
}

/// Orientation of the triple `(p, q, r)`.
#[inline]
pub fn orientation(p: Point2D, q: Point2D, r: Point2D) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if val == 0.0 {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// True if `q` lies inside the bounding box of `p` and `r`.
///
/// Only meaningful when the three points are already known to be collinear.
#[inline]
fn within_span(p: Point2D, q: Point2D, r: Point2D) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// A straight segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Start point
    pub start: Point2D,
    /// End point
    pub end: Point2D,
}

impl Segment {
    /// Create a new segment
    #[inline]
    pub const fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }


    /// Midpoint of the segment.
    #[inline]
    pub fn midpoint(&self) -> Point2D {
        Point2D::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// Segment/segment intersection, endpoints and collinear overlap included.
    pub fn intersects(&self, other: &Segment) -> bool {
        let (p1, q1) = (self.start, self.end);
        let (p2, q2) = (other.start, other.end);

        let o1 = orientation(p1, q1, p2);
        let o2 = orientation(p1, q1, q2);
        let o3 = orientation(p2, q2, p1);
        let o4 = orientation(p2, q2, q1);

        if o1 != o2 && o3 != o4 {
            return true;
        }

        (o1 == Orientation::Collinear && within_span(p1, p2, q1))
            || (o2 == Orientation::Collinear && within_span(p1, q2, q1))
            || (o3 == Orientation::Collinear && within_span(p2, p1, q2))
            || (o4 == Orientation::Collinear && within_span(p2, q1, q2))
    }

    /// True if any part of the segment touches the rectangle.
    ///
    /// Either endpoint inside (covers segments fully contained in the box)
    /// or a crossing with one of the four edges.
    pub fn intersects_bounds(&self, bounds: &Bounds) -> bool {
        if bounds.contains(self.start) || bounds.contains(self.end) {
            return true;
        }
        bounds.edges().iter().any(|edge| self.intersects(edge))
    }
}
