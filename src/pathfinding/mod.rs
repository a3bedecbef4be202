//! Route search over the campus graph.
//!
//! - **A* Search** ([`PathResolver`]): cheapest node sequence between two
//!   places, honouring one-way edges and temporary closures
//! - **Steps** ([`NavigationStep`]): per-leg instructions and floor tags
//!
//! ```rust
//! use disha::graph::{Edge, Node, NodeKind};
//! use disha::pathfinding::find_path;
//!
//! let nodes = vec![
//!     Node::new("entrada", "Entrada", NodeKind::Entrance, 0, 0.0, 0.0),
//!     Node::new("p1", "Pasillo 1", NodeKind::Corridor, 0, 100.0, 0.0),
//!     Node::new("aula", "Aula 3", NodeKind::Classroom, 0, 100.0, 80.0),
//! ];
//! let edges = vec![Edge::new("entrada", "p1", 2.0), Edge::new("p1", "aula", 1.5)];
//!
//! let route = find_path("entrada", "aula", &nodes, &edges, &[]).unwrap();
//! assert_eq!(route.path, vec!["entrada", "p1", "aula"]);
//! assert_eq!(route.total_distance, 3.5);
//! assert_eq!(route.steps[1].instruction, "Llega a Aula 3");
//! ```

pub mod astar;
pub mod steps;

pub use astar::{PathFailure, PathResolver, PathResult, SearchConfig, find_path, path_exists};
pub use steps::{Maneuver, NavigationStep, build_steps};
