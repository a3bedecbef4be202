//! Core geometric types shared by the search and rendering halves.
//!
//! - [`Point2D`]: floor-plan coordinate
//! - [`Bounds`]: axis-aligned rectangle (room footprints, inflated obstacles)
//! - [`Segment`]: straight line piece of a rendered route, with the
//!   segment/segment and segment/rectangle tests the router relies on

mod bounds;
mod point;
mod segment;

pub use bounds::Bounds;
pub use point::Point2D;
pub use segment::{Orientation, Segment, orientation};
