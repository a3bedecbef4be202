//! A* route search.
//!
//! Implements A* over the campus node/edge graph with support for:
//! - one-way and two-way edges
//! - per-query closures (both directions of a closed pair are removed)
//! - a floor-change penalty in the heuristic

mod planner;
mod types;

pub use planner::PathResolver;
pub use types::{PathFailure, PathResult, SearchConfig};

use crate::graph::{BlockedPath, Edge, Node};

/// Quick route search with default configuration
pub fn find_path(
    start_id: &str,
    end_id: &str,
    nodes: &[Node],
    edges: &[Edge],
    blocked: &[BlockedPath],
) -> Option<PathResult> {
    PathResolver::with_defaults().find_path(start_id, end_id, nodes, edges, blocked)
}

/// Check if a route exists under the given closures
pub fn path_exists(
    start_id: &str,
    end_id: &str,
    nodes: &[Node],
    edges: &[Edge],
    blocked: &[BlockedPath],
) -> bool {
    find_path(start_id, end_id, nodes, edges, blocked).is_some()
}
