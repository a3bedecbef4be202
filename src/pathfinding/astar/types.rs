//! A* search types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::defaults;
use crate::pathfinding::steps::NavigationStep;

/// A* search configuration
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Floor-plan units per unit of edge distance in the heuristic
    pub heuristic_scale: f64,
    /// Heuristic penalty per floor of difference
    pub floor_penalty: f64,
    /// Maximum number of nodes to expand before giving up
    pub max_iterations: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic_scale: defaults::heuristic_scale(),
            floor_penalty: defaults::floor_penalty(),
            max_iterations: defaults::max_iterations(),
        }
    }
}

impl SearchConfig {
    /// Override the floor-change penalty
    pub fn with_floor_penalty(mut self, penalty: f64) -> Self {
        self.floor_penalty = penalty;
        self
    }

    /// Override the expansion cap
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// A resolved route
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResult {
    /// Node ids from start to goal, both included
    pub path: Vec<String>,
    /// Sum of the edge distances along `path`
    pub total_distance: f64,
    /// One step per consecutive pair of `path`
    pub steps: Vec<NavigationStep>,
}

impl PathResult {
    /// Number of legs
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if the route has no legs
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of floor changes along the route
    pub fn floor_changes(&self) -> usize {
        self.steps.iter().filter(|s| s.floor_change).count()
    }
}

/// Reason a search produced no route
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PathFailure {
    /// Start and goal are the same node
    #[error("start and goal are the same node")]
    SameStartGoal,
    /// Start id is not in the graph
    #[error("unknown start node")]
    UnknownStart,
    /// Goal id is not in the graph
    #[error("unknown goal node")]
    UnknownGoal,
    /// No path exists between start and goal
    #[error("no path between start and goal")]
    NoPath,
    /// Maximum iterations exceeded
    #[error("search expansion limit reached")]
    MaxIterationsExceeded,
}
