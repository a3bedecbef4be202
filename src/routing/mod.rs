//! Obstacle-aware route rendering.
//!
//! The search graph only models which places connect; it says nothing
//! about how a line between two node positions crosses the floor plan.
//! [`VisualRouter`] takes the route nodes of one floor and produces a
//! polyline that stays clear of every room rectangle, bending through
//! corridor lanes where a straight leg would cut through a room.
//!
//! ```rust
//! use disha::graph::{Node, NodeKind};
//! use disha::routing::generate_safe_path_points;
//!
//! let a = Node::new("a", "A", NodeKind::Entrance, 0, 0.0, 0.0);
//! let b = Node::new("b", "B", NodeKind::Entrance, 0, 100.0, 0.0);
//! let room = Node::new("r", "Sala", NodeKind::Office, 0, 50.0, 0.0).with_size(40.0, 40.0);
//! let hall = Node::new("c", "Pasillo", NodeKind::Corridor, 0, 50.0, 60.0);
//!
//! let points = generate_safe_path_points(&[&a, &b], &[&a, &b, &room, &hall]);
//! assert_eq!(points, "0,0 0,60 100,60 100,0");
//! ```

mod obstacles;
mod router;

pub use obstacles::{corridor_lanes, extract_obstacles};
pub use router::{RoutingConfig, VisualRouter, format_points};

use crate::graph::Node;

/// Quick route rendering with default configuration
pub fn generate_safe_path_points(path_nodes: &[&Node], floor_nodes: &[&Node]) -> String {
    VisualRouter::with_defaults().generate_safe_path_points(path_nodes, floor_nodes)
}
