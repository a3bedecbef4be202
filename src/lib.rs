//! # Disha: Multi-Floor Campus Wayfinding
//!
//! Route search and route rendering for indoor navigation across the
//! floors of a building or campus.
//!
//! ## Features
//!
//! - **A* Route Search**: cheapest walk between two places over a
//!   weighted node/edge graph, with one-way edges and temporary closures
//! - **Turn-by-Turn Steps**: one instruction per leg, tagged with its floor
//!   and whether it climbs or descends stairs
//! - **Obstacle-Aware Rendering**: per-floor polylines that bend through
//!   corridor lanes instead of cutting through room rectangles
//! - **Map Loading**: campus graphs from YAML or JSON, validated on load
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use disha::{CampusGraph, CampusNavigator};
//!
//! let graph = CampusGraph::load("maps/campus.yaml").unwrap();
//! let mut nav = CampusNavigator::with_defaults(graph);
//! nav.block("p0-b", "p0-c");
//!
//! if let Some(route) = nav.route("entrada", "lab-201") {
//!     println!("{} legs, distance {:.1}", route.result.len(), route.result.total_distance);
//!     for step in &route.result.steps {
//!         println!("[Piso {}] {}", step.floor, step.instruction);
//!     }
//!     for &floor in route.floors() {
//!         println!("Piso {}: {}", floor, nav.floor_polyline(&route, floor));
//!     }
//! }
//! ```
//!
//! ## Coordinate Frame
//!
//! Node positions are floor-plan units in SVG orientation: X grows to the
//! right, Y grows downward. Edge distances are independent of the
//! floor-plan scale; [`SearchConfig::heuristic_scale`] relates the two.
//!
//! ## Architecture
//!
//! - [`core`]: Geometry (Point2D, Bounds, Segment)
//! - [`graph`]: Campus model (Node, Edge, BlockedPath, CampusGraph)
//! - [`pathfinding`]: A* search and step derivation
//! - [`routing`]: Obstacle-aware per-floor polylines
//! - [`navigator`]: Facade owning a map and its closures
//! - [`config`]: YAML configuration
//! - [`io`]: SVG export
//!
//! ## Data Flow
//!
//! ```text
//!     ┌──────────────┐        ┌──────────────┐
//!     │ CampusGraph  │        │ BlockedPath  │
//!     │ (YAML/JSON)  │        │   closures   │
//!     └──────┬───────┘        └──────┬───────┘
//!            └───────────┬───────────┘
//!                        ▼
//!               ┌────────────────┐
//!               │  PathResolver  │  A* over ids
//!               └───────┬────────┘
//!                       │ PathResult (path, distance, steps)
//!                       ▼
//!               ┌────────────────┐
//!               │ split by floor │
//!               └───────┬────────┘
//!                       ▼
//!               ┌────────────────┐
//!               │  VisualRouter  │──► "x,y x,y ..." per floor
//!               └───────┬────────┘
//!                       ▼
//!               ┌────────────────┐
//!               │    FloorSvg    │
//!               └────────────────┘
//! ```

pub mod config;
pub mod core;
pub mod graph;
pub mod io;
pub mod navigator;
pub mod pathfinding;
pub mod routing;

// Re-export main types at crate root
pub use config::{ConfigLoadError, DishaConfig};
pub use graph::{BlockedPath, CampusGraph, Edge, GraphError, Node, NodeKind};
pub use navigator::{CampusNavigator, Route};

// Re-export the two kernels
pub use pathfinding::{
    Maneuver, NavigationStep, PathFailure, PathResolver, PathResult, SearchConfig, find_path,
};
pub use routing::{RoutingConfig, VisualRouter, generate_safe_path_points};
