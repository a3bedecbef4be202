//! Route search configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// A* search settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchSection {
    /// Euclidean floor-plan units per unit of edge distance
    #[serde(default = "defaults::heuristic_scale")]
    pub heuristic_scale: f64,

    /// Heuristic penalty per floor of difference
    #[serde(default = "defaults::floor_penalty")]
    pub floor_penalty: f64,

    /// Maximum nodes to expand
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: usize,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            heuristic_scale: defaults::heuristic_scale(),
            floor_penalty: defaults::floor_penalty(),
            max_iterations: defaults::max_iterations(),
        }
    }
}
