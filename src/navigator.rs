//! Campus navigation facade.
//!
//! [`CampusNavigator`] owns a campus map and the current set of closures,
//! and answers route queries against them. It is the place where the two
//! kernels meet: the resolver produces the node sequence, the navigator
//! splits it per floor, and the router draws each floor's share.
//!
//! ```rust,ignore
//! let mut nav = CampusNavigator::with_defaults(CampusGraph::load("maps/campus.yaml")?);
//! nav.block("p0-b", "p0-c");
//!
//! if let Some(route) = nav.route("entrada", "aula-101") {
//!     for step in &route.result.steps {
//!         println!("[Piso {}] {}", step.floor, step.instruction);
//!     }
//!     for floor in route.floors() {
//!         let points = nav.floor_polyline(&route, *floor);
//!     }
//! }
//! ```

use log::{debug, info, warn};

use crate::config::DishaConfig;
use crate::core::Point2D;
use crate::graph::{BlockedPath, CampusGraph, Node};
use crate::pathfinding::{PathResolver, PathResult};
use crate::routing::{VisualRouter, format_points};

/// A resolved route plus the floors it passes through.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    /// Search output
    pub result: PathResult,
    floors: Vec<i32>,
}

impl Route {
    /// Floors in visiting order; a floor appears again if the route leaves
    /// and later comes back to it.
    pub fn floors(&self) -> &[i32] {
        &self.floors
    }

    /// Route nodes on `floor`, in route order.
    pub fn path_nodes_on_floor<'g>(&self, graph: &'g CampusGraph, floor: i32) -> Vec<&'g Node> {
        self.result
            .path
            .iter()
            .filter_map(|id| graph.node(id))
            .filter(|node| node.floor == floor)
            .collect()
    }
}

/// Owns a campus map and its closures and answers route queries.
#[derive(Clone, Debug)]
pub struct CampusNavigator {
    graph: CampusGraph,
    blocked: Vec<BlockedPath>,
    resolver: PathResolver,
    router: VisualRouter,
}

impl CampusNavigator {
    /// Create a navigator with explicit configuration.
    pub fn new(graph: CampusGraph, config: &DishaConfig) -> Self {
        Self {
            graph,
            blocked: Vec::new(),
            resolver: PathResolver::new(config.to_search_config()),
            router: VisualRouter::new(config.to_routing_config()),
        }
    }

    /// Create with default configuration
    pub fn with_defaults(graph: CampusGraph) -> Self {
        Self::new(graph, &DishaConfig::default())
    }

    /// The campus map
    pub fn graph(&self) -> &CampusGraph {
        &self.graph
    }

    /// Active closures
    pub fn blocked_paths(&self) -> &[BlockedPath] {
        &self.blocked
    }

    /// Close the connection between `from` and `to`.
    ///
    /// Returns `false` if it was already closed (in either orientation).
    pub fn block(&mut self, from: &str, to: &str) -> bool {
        if self.blocked.iter().any(|b| b.matches(from, to)) {
            return false;
        }
        info!("[Navigator] closing {} <-> {}", from, to);
        self.blocked.push(BlockedPath::new(from, to));
        true
    }

    /// Reopen the connection between `from` and `to`.
    ///
    /// Returns `false` if no closure named the pair.
    pub fn unblock(&mut self, from: &str, to: &str) -> bool {
        let before = self.blocked.len();
        self.blocked.retain(|b| !b.matches(from, to));
        let removed = self.blocked.len() != before;
        if removed {
            info!("[Navigator] reopening {} <-> {}", from, to);
        }
        removed
    }

    /// Reopen everything.
    pub fn clear_blocks(&mut self) {
        if !self.blocked.is_empty() {
            info!("[Navigator] clearing {} closures", self.blocked.len());
        }
        self.blocked.clear();
    }

    /// Destinations matching `query`; see [`CampusGraph::search`].
    pub fn search(&self, query: &str) -> Vec<&Node> {
        self.graph.search(query)
    }

    /// Resolve a route under the current closures.
    pub fn route(&self, start_id: &str, end_id: &str) -> Option<Route> {
        match self.resolver.search(
            start_id,
            end_id,
            &self.graph.nodes,
            &self.graph.edges,
            &self.blocked,
        ) {
            Ok(result) => {
                let floors = self.visit_order(&result);
                debug!(
                    "[Navigator] {} -> {}: {} legs, distance {:.2}, floors {:?}",
                    start_id,
                    end_id,
                    result.steps.len(),
                    result.total_distance,
                    floors
                );
                Some(Route { result, floors })
            }
            Err(reason) => {
                warn!("[Navigator] no route {} -> {}: {}", start_id, end_id, reason);
                None
            }
        }
    }

    /// Obstacle-free polyline vertices of the route's share of `floor`.
    pub fn floor_points(&self, route: &Route, floor: i32) -> Vec<Point2D> {
        let path_nodes = route.path_nodes_on_floor(&self.graph, floor);
        let floor_nodes = self.graph.nodes_on_floor(floor);
        self.router.safe_path_points(&path_nodes, &floor_nodes)
    }

    /// [`floor_points`](Self::floor_points) as an SVG `points` string.
    pub fn floor_polyline(&self, route: &Route, floor: i32) -> String {
        format_points(&self.floor_points(route, floor))
    }

    fn visit_order(&self, result: &PathResult) -> Vec<i32> {
        let mut floors: Vec<i32> = result
            .path
            .iter()
            .filter_map(|id| self.graph.node(id))
            .map(|node| node.floor)
            .collect();
        floors.dedup();
        floors
    }
}
