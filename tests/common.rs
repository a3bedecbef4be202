//! Test utilities for Disha integration tests.
//!
//! Provides the bundled sample campus and seeded random campus graphs.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use disha::{CampusGraph, Edge, Node, NodeKind};
use rand::prelude::*;

/// Path of the sample map shipped in `maps/`.
pub fn sample_map_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("maps/campus.yaml")
}

/// The sample campus: floors 0 to 2 joined by one staircase.
pub fn sample_campus() -> CampusGraph {
    CampusGraph::load(sample_map_path()).expect("sample map should load")
}

/// Route nodes for `ids`, in order.
pub fn nodes_for<'g>(graph: &'g CampusGraph, ids: &[String]) -> Vec<&'g Node> {
    ids.iter()
        .map(|id| graph.node(id).expect("route id should exist"))
        .collect()
}

/// Cheapest edge distance between two adjacent route nodes.
pub fn leg_distance(edges: &[Edge], from: &str, to: &str) -> Option<f64> {
    edges
        .iter()
        .filter(|e| {
            (e.from == from && e.to == to) || (e.bidirectional && e.from == to && e.to == from)
        })
        .map(|e| e.distance)
        .reduce(f64::min)
}

/// Random multi-floor campus.
///
/// Each floor is a chain of corridor waypoints with rooms hanging off it,
/// plus a few random shortcuts. Floors are joined by a staircase at the
/// end of the chain. All edges are two-way.
pub fn random_campus(seed: u64, floors: i32, corridors_per_floor: usize) -> CampusGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    for floor in 0..floors {
        for i in 0..corridors_per_floor {
            let x = i as f64 * 100.0;
            let corridor = format!("f{}-c{}", floor, i);
            nodes.push(Node::new(&corridor, format!("Pasillo {}", i), NodeKind::Corridor, floor, x, 200.0));

            if i > 0 {
                let prev = format!("f{}-c{}", floor, i - 1);
                edges.push(Edge::new(prev, &corridor, 1.0 + rng.random::<f64>() * 4.0));
            }

            if rng.random_bool(0.7) {
                let room = format!("f{}-r{}", floor, i);
                nodes.push(
                    Node::new(&room, format!("Sala {}{:02}", floor, i), NodeKind::Classroom, floor, x, 120.0)
                        .with_size(60.0, 40.0),
                );
                edges.push(Edge::new(&corridor, room, 0.5 + rng.random::<f64>()));
            }
        }

        for _ in 0..corridors_per_floor / 3 {
            let a = rng.random_range(0..corridors_per_floor);
            let b = rng.random_range(0..corridors_per_floor);
            if a != b {
                edges.push(Edge::new(
                    format!("f{}-c{}", floor, a),
                    format!("f{}-c{}", floor, b),
                    2.0 + rng.random::<f64>() * 10.0,
                ));
            }
        }

        let x = corridors_per_floor as f64 * 100.0;
        let stairs = format!("f{}-s", floor);
        nodes.push(Node::new(&stairs, "Escalera", NodeKind::Stairs, floor, x, 200.0));
        edges.push(Edge::new(
            format!("f{}-c{}", floor, corridors_per_floor - 1),
            &stairs,
            1.0,
        ));
        if floor > 0 {
            edges.push(Edge::new(format!("f{}-s", floor - 1), stairs, 5.0));
        }
    }

    CampusGraph::new(nodes, edges)
}

/// Ids of every node in `graph`.
pub fn all_ids(graph: &CampusGraph) -> Vec<String> {
    graph.nodes.iter().map(|n| n.id.clone()).collect()
}
