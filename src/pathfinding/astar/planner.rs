//! A* resolver implementation.

use log::{debug, trace};

use crate::graph::{Adjacency, BlockedPath, Edge, Node};
use crate::pathfinding::steps::build_steps;

use super::types::{PathFailure, PathResult, SearchConfig};

/// A* route resolver over a campus node/edge graph
///
/// Holds only configuration; every call builds its own adjacency from the
/// inputs, so one resolver can serve any number of graphs and threads.
#[derive(Clone, Debug, Default)]
pub struct PathResolver {
    config: SearchConfig,
}

impl PathResolver {
    /// Create a new resolver
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::new(SearchConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find the cheapest route from `start_id` to `end_id`.
    ///
    /// `None` when start equals end, either id is unknown, or the closures
    /// in `blocked` disconnect the two.
    pub fn find_path(
        &self,
        start_id: &str,
        end_id: &str,
        nodes: &[Node],
        edges: &[Edge],
        blocked: &[BlockedPath],
    ) -> Option<PathResult> {
        self.search(start_id, end_id, nodes, edges, blocked).ok()
    }

    /// Same as [`find_path`](Self::find_path) but reports why no route exists.
    pub fn search(
        &self,
        start_id: &str,
        end_id: &str,
        nodes: &[Node],
        edges: &[Edge],
        blocked: &[BlockedPath],
    ) -> Result<PathResult, PathFailure> {
        trace!("[AStar] find_path: start={} goal={}", start_id, end_id);

        if start_id == end_id {
            debug!("[AStar] FAILED: SameStartGoal ({})", start_id);
            return Err(PathFailure::SameStartGoal);
        }

        let graph = Adjacency::build(nodes, edges, blocked);
        let Some(start) = graph.index_of(start_id) else {
            debug!("[AStar] FAILED: UnknownStart '{}'", start_id);
            return Err(PathFailure::UnknownStart);
        };
        let Some(goal) = graph.index_of(end_id) else {
            debug!("[AStar] FAILED: UnknownGoal '{}'", end_id);
            return Err(PathFailure::UnknownGoal);
        };

        let path = self.astar(&graph, start, goal)?;
        Ok(Self::describe(&graph, &path))
    }

    /// Heuristic: scaled straight-line distance plus a fixed cost per floor.
    ///
    /// The floor term is not a proven lower bound on stair edge costs, so
    /// optimality across floors holds only when stair edges cost at least
    /// `floor_penalty` per floor.
    pub fn heuristic(&self, from: &Node, to: &Node) -> f64 {
        let planar = from.position().distance(&to.position()) / self.config.heuristic_scale;
        let floors = f64::from(from.floor.abs_diff(to.floor));
        planar + self.config.floor_penalty * floors
    }

    /// Core search, returning node indices start..=goal.
    fn astar(
        &self,
        graph: &Adjacency<'_>,
        start: usize,
        goal: usize,
    ) -> Result<Vec<usize>, PathFailure> {
        let n = graph.len();
        let goal_node = graph.node(goal);

        // Open list in pop order after the last sort; a node appears at most once
        let mut open_list: Vec<usize> = vec![start];
        let mut in_open = vec![false; n];
        let mut closed = vec![false; n];
        let mut came_from: Vec<Option<usize>> = vec![None; n];
        let mut g_scores = vec![f64::INFINITY; n];
        let mut f_scores = vec![f64::INFINITY; n];

        in_open[start] = true;
        g_scores[start] = 0.0;
        f_scores[start] = self.heuristic(graph.node(start), goal_node);

        let mut nodes_expanded = 0;

        while !open_list.is_empty() {
            // Stable sort: equal f keeps the order left by the previous round
            open_list.sort_by(|&a, &b| f_scores[a].total_cmp(&f_scores[b]));
            let current = open_list.remove(0);
            in_open[current] = false;
            closed[current] = true;
            nodes_expanded += 1;

            if nodes_expanded > self.config.max_iterations {
                debug!(
                    "[AStar] FAILED: MaxIterationsExceeded ({} nodes)",
                    nodes_expanded
                );
                return Err(PathFailure::MaxIterationsExceeded);
            }

            // Goal reached
            if current == goal {
                let path = Self::reconstruct_path(&came_from, goal);
                trace!(
                    "[AStar] SUCCESS: {} nodes, cost={:.2}, nodes_expanded={}",
                    path.len(),
                    g_scores[goal],
                    nodes_expanded
                );
                return Ok(path);
            }

            for neighbor in graph.neighbors(current) {
                let next = neighbor.node;
                if closed[next] {
                    continue;
                }

                let tentative_g = g_scores[current] + neighbor.distance;
                if tentative_g < g_scores[next] {
                    came_from[next] = Some(current);
                    g_scores[next] = tentative_g;
                    f_scores[next] = tentative_g + self.heuristic(graph.node(next), goal_node);

                    // Already-open nodes keep their place until the next sort
                    if !in_open[next] {
                        in_open[next] = true;
                        open_list.push(next);
                    }
                }
            }
        }

        debug!(
            "[AStar] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        Err(PathFailure::NoPath)
    }

    /// Walk predecessors back from the goal
    fn reconstruct_path(came_from: &[Option<usize>], goal: usize) -> Vec<usize> {
        let mut path = vec![goal];
        let mut current = goal;

        while let Some(prev) = came_from[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }

    /// Turn an index path into ids, distance and steps
    fn describe(graph: &Adjacency<'_>, path: &[usize]) -> PathResult {
        let total_distance: f64 = path
            .windows(2)
            .filter_map(|pair| graph.edge_distance(pair[0], pair[1]))
            .sum();

        let nodes: Vec<&Node> = path.iter().map(|&i| graph.node(i)).collect();
        PathResult {
            path: nodes.iter().map(|n| n.id.clone()).collect(),
            total_distance,
            steps: build_steps(&nodes),
        }
    }
}
