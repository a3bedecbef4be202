//! Obstacle geometry for one floor.

use crate::core::Bounds;
use crate::graph::Node;

/// Padded room rectangles the rendered route must avoid.
///
/// A room is an obstacle when it has both dimensions and is not itself on
/// the route; a route has to be able to enter the rooms it connects.
pub fn extract_obstacles(path_nodes: &[&Node], floor_nodes: &[&Node], padding: f64) -> Vec<Bounds> {
    floor_nodes
        .iter()
        .filter(|node| !path_nodes.iter().any(|p| p.id == node.id))
        .filter_map(|node| node.footprint())
        .map(|footprint| footprint.expand(padding))
        .collect()
}

/// Distinct corridor y coordinates, ascending.
///
/// Each one is a horizontal lane a detour may run along.
pub fn corridor_lanes(floor_nodes: &[&Node]) -> Vec<f64> {
    let mut lanes: Vec<f64> = floor_nodes
        .iter()
        .filter(|node| node.is_corridor())
        .map(|node| node.y)
        .collect();
    lanes.sort_by(f64::total_cmp);
    lanes.dedup();
    lanes
}
