//! Axis-aligned bounding box.
//!
//! Room footprints are stored as centre + width/height on the graph nodes;
//! [`Bounds`] is the min/max form used for containment and edge tests.
//!
//! ```rust
//! use disha::core::{Bounds, Point2D};
//!
//! // 40x40 room centred at (50, 0), inflated by 8 on each side
//! let room = Bounds::from_center(Point2D::new(50.0, 0.0), 40.0, 40.0).expand(8.0);
//! assert_eq!(room.min, Point2D::new(22.0, -28.0));
//! assert_eq!(room.max, Point2D::new(78.0, 28.0));
//! assert!(room.contains(Point2D::new(50.0, 0.0)));
//! ```

use super::point::Point2D;
use super::segment::Segment;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    /// Minimum corner (smallest x and y values).
    pub min: Point2D,
    /// Maximum corner (largest x and y values).
    pub max: Point2D,
}

impl Bounds {
    /// Create a new bounding box from min and max corners.
    #[inline]
    pub const fn new(min: Point2D, max: Point2D) -> Self {
        Self { min, max }
    }

    /// Create a box of the given size centred on `center`.
    #[inline]
    pub fn from_center(center: Point2D, width: f64, height: f64) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        Self {
            min: Point2D::new(center.x - half_w, center.y - half_h),
            max: Point2D::new(center.x + half_w, center.y + half_h),
        }
    }

    /// Width of the bounding box (x extent).
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the bounding box (y extent).
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Center of the bounding box.
    #[inline]
    pub fn center(&self) -> Point2D {
        Point2D::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Check if a point is inside the bounding box (edges included).
    #[inline]
    pub fn contains(&self, point: Point2D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Expand bounds by a margin on all sides.
    #[inline]
    pub fn expand(&self, margin: f64) -> Self {
        Self {
            min: Point2D::new(self.min.x - margin, self.min.y - margin),
            max: Point2D::new(self.max.x + margin, self.max.y + margin),
        }
    }

    /// Get corners of the bounding box.
    ///
    /// Returns [min, (max.x, min.y), max, (min.x, max.y)] in CCW order.
    #[inline]
    pub fn corners(&self) -> [Point2D; 4] {
        [
            self.min,
            Point2D::new(self.max.x, self.min.y),
            self.max,
            Point2D::new(self.min.x, self.max.y),
        ]
    }

    /// The four edges, walking the corners in CCW order.
    pub fn edges(&self) -> [Segment; 4] {
        let [a, b, c, d] = self.corners();
        [
            Segment::new(a, b),
            Segment::new(b, c),
            Segment::new(c, d),
            Segment::new(d, a),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center() {
        let bounds = Bounds::from_center(Point2D::new(10.0, 20.0), 4.0, 6.0);

        assert_eq!(bounds.min, Point2D::new(8.0, 17.0));
        assert_eq!(bounds.max, Point2D::new(12.0, 23.0));
        assert_eq!(bounds.width(), 4.0);
        assert_eq!(bounds.height(), 6.0);
        assert_eq!(bounds.center(), Point2D::new(10.0, 20.0));
    }

    #[test]
    fn test_contains() {
        let bounds = Bounds::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 10.0));

        assert!(bounds.contains(Point2D::new(5.0, 5.0)));
        assert!(bounds.contains(Point2D::new(0.0, 0.0))); // Edge
        assert!(bounds.contains(Point2D::new(10.0, 10.0))); // Edge
        assert!(!bounds.contains(Point2D::new(-1.0, 5.0)));
        assert!(!bounds.contains(Point2D::new(5.0, 11.0)));
    }

    #[test]
    fn test_expand() {
        let bounds = Bounds::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 10.0)).expand(2.0);

        assert_eq!(bounds.min, Point2D::new(-2.0, -2.0));
        assert_eq!(bounds.max, Point2D::new(12.0, 12.0));
    }

    #[test]
    fn test_edges_close_the_loop() {
        let bounds = Bounds::new(Point2D::new(0.0, 0.0), Point2D::new(4.0, 2.0));
        let edges = bounds.edges();

        assert_eq!(edges[0].start, Point2D::new(0.0, 0.0));
        assert_eq!(edges[1].start, Point2D::new(4.0, 0.0));
        assert_eq!(edges[2].start, Point2D::new(4.0, 2.0));
        assert_eq!(edges[3].end, edges[0].start);
    }
}
