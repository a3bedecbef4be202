//! Per-query adjacency view of a node/edge list.
//!
//! Built once per search from borrowed inputs and dropped afterwards, so
//! closures never leak from one query into the next. Nodes are addressed
//! by dense indices in input order.

use log::trace;
use std::collections::{HashMap, HashSet};

use super::edge::{BlockedPath, Edge};
use super::node::Node;

/// Outgoing connection in an [`Adjacency`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
    /// Target node index
    pub node: usize,
    /// Edge cost
    pub distance: f64,
}

/// Directed adjacency list with closures already applied.
#[derive(Debug)]
pub struct Adjacency<'a> {
    nodes: Vec<&'a Node>,
    index: HashMap<&'a str, usize>,
    neighbors: Vec<Vec<Neighbor>>,
}

impl<'a> Adjacency<'a> {
    /// Build the adjacency for one query.
    ///
    /// - the first node with a given id wins; later duplicates are ignored
    /// - edges naming an unknown node are skipped
    /// - a closure removes both `from -> to` and `to -> from`
    pub fn build(nodes: &'a [Node], edges: &[Edge], blocked: &[BlockedPath]) -> Self {
        let mut index: HashMap<&'a str, usize> = HashMap::with_capacity(nodes.len());
        let mut indexed = Vec::with_capacity(nodes.len());
        for node in nodes {
            if !index.contains_key(node.id.as_str()) {
                index.insert(node.id.as_str(), indexed.len());
                indexed.push(node);
            } else {
                trace!("[Graph] ignoring duplicate node id '{}'", node.id);
            }
        }

        let closed: HashSet<(&str, &str)> = blocked
            .iter()
            .flat_map(|b| {
                [
                    (b.from.as_str(), b.to.as_str()),
                    (b.to.as_str(), b.from.as_str()),
                ]
            })
            .collect();

        let mut neighbors = vec![Vec::new(); indexed.len()];
        for edge in edges {
            let (Some(&from), Some(&to)) =
                (index.get(edge.from.as_str()), index.get(edge.to.as_str()))
            else {
                trace!(
                    "[Graph] skipping edge {} -> {}: unknown endpoint",
                    edge.from, edge.to
                );
                continue;
            };

            if !closed.contains(&(edge.from.as_str(), edge.to.as_str())) {
                neighbors[from].push(Neighbor {
                    node: to,
                    distance: edge.distance,
                });
            }
            if edge.bidirectional && !closed.contains(&(edge.to.as_str(), edge.from.as_str())) {
                neighbors[to].push(Neighbor {
                    node: from,
                    distance: edge.distance,
                });
            }
        }

        Self {
            nodes: indexed,
            index,
            neighbors,
        }
    }

    /// Number of distinct nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when no nodes were supplied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Index of the node with `id`.
    #[inline]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Node at `index`.
    ///
    /// # Panics
    /// If `index` is out of range.
    #[inline]
    pub fn node(&self, index: usize) -> &'a Node {
        self.nodes[index]
    }

    /// Outgoing connections of the node at `index`.
    #[inline]
    pub fn neighbors(&self, index: usize) -> &[Neighbor] {
        &self.neighbors[index]
    }

    /// Cheapest `from -> to` cost, if the pair is connected.
    ///
    /// With parallel edges this is the entry a search relaxes through.
    pub fn edge_distance(&self, from: usize, to: usize) -> Option<f64> {
        self.neighbors[from]
            .iter()
            .filter(|n| n.node == to)
            .map(|n| n.distance)
            .reduce(f64::min)
    }
}
