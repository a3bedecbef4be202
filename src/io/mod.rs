//! Export of floor plans and routes.
//!
//! ## SVG Visualization
//!
//! ```rust,ignore
//! use disha::io::{FloorSvg, SvgConfig};
//!
//! let floor_nodes = graph.nodes_on_floor(1);
//! let points = navigator.floor_points(&route, 1);
//! FloorSvg::new(&floor_nodes, SvgConfig::default())
//!     .with_title("Piso 1")
//!     .with_route(points)
//!     .save(Path::new("piso-1.svg"))?;
//! ```

pub mod svg;

pub use svg::{FloorSvg, SvgColorScheme, SvgConfig, render_floor_svg};
