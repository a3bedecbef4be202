//! Unified configuration loading.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use disha::config::DishaConfig;
//!
//! // Load from default path (configs/config.yaml)
//! let config = DishaConfig::load_default()?;
//!
//! // Convert to runtime configs
//! let resolver = PathResolver::new(config.to_search_config());
//! let router = VisualRouter::new(config.to_routing_config());
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`SearchSection`] | A* heuristic scale, floor penalty, expansion cap |
//! | [`RoutingSection`] | Obstacle padding for route rendering |
//! | [`RenderSection`] | SVG footprint defaults, margin, stroke |
//!
//! ## Example YAML
//!
//! ```yaml
//! search:
//!   heuristic_scale: 50.0   # floor-plan units per distance unit
//!   floor_penalty: 200.0    # per floor of difference
//!   max_iterations: 100000
//!
//! routing:
//!   obstacle_padding: 8.0
//!
//! render:
//!   default_width: 40.0
//!   default_height: 40.0
//! ```

pub(crate) mod defaults;
mod disha;
mod error;
mod routing;
mod search;

// Re-export main types
pub use disha::DishaConfig;
pub use error::ConfigLoadError;

// Re-export section types
pub use routing::{RenderSection, RoutingSection};
pub use search::SearchSection;
