//! Route rendering configuration sections.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Collision-avoidance settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoutingSection {
    /// Clearance added on every side of a room rectangle
    #[serde(default = "defaults::obstacle_padding")]
    pub obstacle_padding: f64,
}

impl Default for RoutingSection {
    fn default() -> Self {
        Self {
            obstacle_padding: defaults::obstacle_padding(),
        }
    }
}

/// SVG output settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RenderSection {
    /// Width drawn for rooms that declare none
    #[serde(default = "defaults::default_footprint")]
    pub default_width: f64,

    /// Height drawn for rooms that declare none
    #[serde(default = "defaults::default_footprint")]
    pub default_height: f64,

    /// Blank space around the floor contents
    #[serde(default = "defaults::render_margin")]
    pub margin: f64,

    /// Route stroke width
    #[serde(default = "defaults::route_width")]
    pub route_width: f64,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            default_width: defaults::default_footprint(),
            default_height: defaults::default_footprint(),
            margin: defaults::render_margin(),
            route_width: defaults::route_width(),
        }
    }
}
