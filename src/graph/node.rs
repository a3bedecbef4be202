//! Graph nodes: rooms, stairs and corridor waypoints.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Bounds, Point2D};

/// What a node physically is.
///
/// Corridors are pure waypoints. Every other kind has a rectangular
/// footprint on the floor plan and is an obstacle for route rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Walkable waypoint with no footprint
    Corridor,
    /// Teaching room
    Classroom,
    /// Staircase (usually the only cross-floor connection)
    Stairs,
    /// Building entrance
    Entrance,
    /// Open courtyard
    Patio,
    /// Restroom
    Bathroom,
    /// Administrative office
    Office,
}

impl NodeKind {
    /// True for kinds that occupy floor space.
    #[inline]
    pub fn has_footprint(self) -> bool {
        self != NodeKind::Corridor
    }

    /// Lowercase name, as used in map files.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Corridor => "corridor",
            NodeKind::Classroom => "classroom",
            NodeKind::Stairs => "stairs",
            NodeKind::Entrance => "entrance",
            NodeKind::Patio => "patio",
            NodeKind::Bathroom => "bathroom",
            NodeKind::Office => "office",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A navigable point or room.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique across all floors
    pub id: String,
    /// Floor-plan x coordinate
    pub x: f64,
    /// Floor-plan y coordinate
    pub y: f64,
    /// Floor index
    pub floor: i32,
    /// Node kind
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Footprint width (rooms only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Footprint height (rooms only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Display name
    pub label: String,
}

impl Node {
    /// Create a node without a footprint.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        kind: NodeKind,
        floor: i32,
        x: f64,
        y: f64,
    ) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            floor,
            kind,
            width: None,
            height: None,
            label: label.into(),
        }
    }

    /// Set the footprint size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Node position.
    #[inline]
    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// True for corridor waypoints.
    #[inline]
    pub fn is_corridor(&self) -> bool {
        self.kind == NodeKind::Corridor
    }

    /// Declared footprint, centred on the node.
    ///
    /// `None` for corridors and for rooms missing either dimension.
    pub fn footprint(&self) -> Option<Bounds> {
        if !self.kind.has_footprint() {
            return None;
        }
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some(Bounds::from_center(self.position(), w, h)),
            _ => None,
        }
    }
}
