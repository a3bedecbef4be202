//! Campus graph model.
//!
//! - [`Node`], [`NodeKind`]: rooms, stairs and corridor waypoints
//! - [`Edge`], [`BlockedPath`]: connections and temporary closures
//! - [`CampusGraph`]: owned map with loading, validation and lookups
//! - [`Adjacency`]: per-query directed view used by the search

mod adjacency;
mod campus;
mod edge;
mod error;
mod node;

pub use adjacency::{Adjacency, Neighbor};
pub use campus::CampusGraph;
pub use edge::{BlockedPath, Edge};
pub use error::GraphError;
pub use node::{Node, NodeKind};
