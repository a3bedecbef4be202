//! Point type for floor-plan coordinates.
//!
//! Floor plans use an arbitrary unit that is consistent within one floor
//! (typically SVG pixels of the map drawing). Points on different floors
//! share the same coordinate space but are never compared geometrically.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on a floor plan.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point2D {
    /// Origin point.
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    /// Create a new point
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &Point2D) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance (avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: &Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Point2D) -> Point2D {
        Point2D::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Point2D) -> Point2D {
        Point2D::new(self.x.max(other.x), self.y.max(other.y))
    }
}

/// Formats as `x,y`, the token format of an SVG `points` attribute.
impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
