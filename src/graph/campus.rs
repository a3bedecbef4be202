//! Campus map container and map-file loading.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::edge::Edge;
use super::error::GraphError;
use super::node::Node;

/// Complete campus description: every node on every floor plus all edges.
///
/// Loaded from YAML or JSON:
///
/// ```yaml
/// nodes:
///   - { id: entrada, type: entrance, floor: 0, x: 20, y: 200, label: Entrada }
///   - { id: p0-a, type: corridor, floor: 0, x: 100, y: 200, label: Pasillo A }
///   - { id: aula-1, type: classroom, floor: 0, x: 100, y: 120, width: 60, height: 40, label: Aula 1 }
/// edges:
///   - { from: entrada, to: p0-a, distance: 2 }
///   - { from: p0-a, to: aula-1, distance: 1.5, bidirectional: true }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CampusGraph {
    /// All nodes, all floors
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// All edges
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl CampusGraph {
    /// Wrap node and edge lists without validating them.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Load a map file, choosing the format by extension (`.json` or YAML).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GraphError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let graph = if is_json {
            Self::from_json_str(&contents)?
        } else {
            Self::from_yaml_str(&contents)?
        };
        info!(
            "[Graph] loaded {}: {} nodes, {} edges, floors {:?}",
            path.display(),
            graph.nodes.len(),
            graph.edges.len(),
            graph.floors()
        );
        Ok(graph)
    }

    /// Parse and validate a YAML map.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, GraphError> {
        let graph: Self = serde_yaml::from_str(yaml)?;
        graph.validate()?;
        Ok(graph)
    }

    /// Parse and validate a JSON map.
    pub fn from_json_str(json: &str) -> Result<Self, GraphError> {
        let graph: Self = serde_json::from_str(json)?;
        graph.validate()?;
        Ok(graph)
    }

    /// Strict consistency check.
    ///
    /// Search itself tolerates all of these (it skips what it cannot use);
    /// this is for catching authoring mistakes at load time.
    pub fn validate(&self) -> Result<(), GraphError> {
        let mut seen = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(GraphError::DuplicateNode(node.id.clone()));
            }
        }

        for (index, edge) in self.edges.iter().enumerate() {
            for end in [&edge.from, &edge.to] {
                if !seen.contains(end.as_str()) {
                    return Err(GraphError::UnknownEndpoint {
                        index,
                        from: edge.from.clone(),
                        to: edge.to.clone(),
                        missing: end.clone(),
                    });
                }
            }
            if !edge.distance.is_finite() || edge.distance <= 0.0 {
                return Err(GraphError::InvalidDistance {
                    index,
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    distance: edge.distance,
                });
            }
        }

        debug!(
            "[Graph] validated {} nodes, {} edges",
            self.nodes.len(),
            self.edges.len()
        );
        Ok(())
    }

    /// Node with the given id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Every node on `floor`, in map order.
    pub fn nodes_on_floor(&self, floor: i32) -> Vec<&Node> {
        self.nodes.iter().filter(|n| n.floor == floor).collect()
    }

    /// Distinct floors, ascending.
    pub fn floors(&self) -> Vec<i32> {
        let mut floors: Vec<i32> = self.nodes.iter().map(|n| n.floor).collect();
        floors.sort_unstable();
        floors.dedup();
        floors
    }

    /// Places a user can pick as a destination (everything but corridors).
    pub fn destinations(&self) -> Vec<&Node> {
        self.nodes.iter().filter(|n| !n.is_corridor()).collect()
    }

    /// Destinations whose label or id contains `query`, ignoring case.
    ///
    /// Results are ordered by label, then id. A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Node> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<&Node> = self
            .destinations()
            .into_iter()
            .filter(|n| {
                n.label.to_lowercase().contains(&needle) || n.id.to_lowercase().contains(&needle)
            })
            .collect();
        hits.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.id.cmp(&b.id)));
        hits
    }
}
