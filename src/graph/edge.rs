//! Edges and temporary closures.

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// A traversable connection between two nodes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source node id
    pub from: String,
    /// Target node id
    pub to: String,
    /// Traversal cost, positive
    pub distance: f64,
    /// Traversable in both directions at the same cost
    #[serde(default = "defaults::enabled")]
    pub bidirectional: bool,
}

impl Edge {
    /// Two-way edge.
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
            bidirectional: true,
        }
    }

    /// One-way edge, `from -> to` only.
    pub fn one_way(from: impl Into<String>, to: impl Into<String>, distance: f64) -> Self {
        Self {
            bidirectional: false,
            ..Self::new(from, to, distance)
        }
    }
}

/// A closure of the connection between two nodes, in both directions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockedPath {
    /// One end of the closed connection
    pub from: String,
    /// The other end
    pub to: String,
}

impl BlockedPath {
    /// Create a closure.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// True if this closure names the pair `a`/`b` in either orientation.
    pub fn matches(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}
