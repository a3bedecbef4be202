//! SVG rendering of one floor and its route.
//!
//! Node coordinates are used as SVG user units directly (y grows
//! downward, as in the floor-plan drawings the maps are authored from).
//! The output shows:
//! - rooms as rectangles, coloured by kind
//! - corridor waypoints as small circles
//! - the route polyline with start and end markers

use std::fmt;
use std::path::Path;

use crate::config::defaults;
use crate::core::{Bounds, Point2D};
use crate::graph::{Node, NodeKind};
use crate::routing::format_points;

/// SVG color scheme for visualization
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Classroom fill
    pub classroom: &'static str,
    /// Office fill
    pub office: &'static str,
    /// Bathroom fill
    pub bathroom: &'static str,
    /// Stairs fill
    pub stairs: &'static str,
    /// Entrance fill
    pub entrance: &'static str,
    /// Patio fill
    pub patio: &'static str,
    /// Corridor waypoint color
    pub corridor: &'static str,
    /// Route stroke color
    pub route: &'static str,
    /// Label text color
    pub text: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            classroom: "#DCEBFA",
            office: "#E8E0F4",
            bathroom: "#DDF2EC",
            stairs: "#FBE7C6",
            entrance: "#D7F0D2",
            patio: "#EEF5DC",
            corridor: "#9E9E9E",
            route: "#E53935",
            text: "#333333",
        }
    }
}

impl SvgColorScheme {
    /// Fill color for a room of `kind`.
    pub fn fill(&self, kind: NodeKind) -> &'static str {
        match kind {
            NodeKind::Classroom => self.classroom,
            NodeKind::Office => self.office,
            NodeKind::Bathroom => self.bathroom,
            NodeKind::Stairs => self.stairs,
            NodeKind::Entrance => self.entrance,
            NodeKind::Patio => self.patio,
            NodeKind::Corridor => self.corridor,
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Width drawn for rooms that declare none
    pub default_width: f64,
    /// Height drawn for rooms that declare none
    pub default_height: f64,
    /// Blank space around the floor contents
    pub margin: f64,
    /// Route stroke width
    pub route_width: f64,
    /// Corridor marker radius
    pub marker_radius: f64,
    /// Color scheme
    pub colors: SvgColorScheme,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            default_width: defaults::default_footprint(),
            default_height: defaults::default_footprint(),
            margin: defaults::render_margin(),
            route_width: defaults::route_width(),
            marker_radius: 3.0,
            colors: SvgColorScheme::default(),
        }
    }
}

/// One floor plan, optionally with a route drawn over it.
///
/// Rendered through [`fmt::Display`]:
///
/// ```rust,ignore
/// let svg = FloorSvg::new(&floor_nodes, SvgConfig::default())
///     .with_title("Piso 1")
///     .with_route(points);
/// svg.save(Path::new("piso-1.svg"))?;
/// ```
#[derive(Clone, Debug)]
pub struct FloorSvg<'a> {
    nodes: &'a [&'a Node],
    route: Vec<Point2D>,
    title: Option<String>,
    config: SvgConfig,
}

impl<'a> FloorSvg<'a> {
    /// Create a renderer for `nodes` (all nodes of one floor).
    pub fn new(nodes: &'a [&'a Node], config: SvgConfig) -> Self {
        Self {
            nodes,
            route: Vec::new(),
            title: None,
            config,
        }
    }

    /// Set a title drawn above the plan.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the route polyline.
    pub fn with_route(mut self, points: Vec<Point2D>) -> Self {
        self.route = points;
        self
    }

    /// Write the SVG document to `path`.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_string())
    }

    /// Rectangle drawn for a room, falling back to the default footprint.
    fn room_rect(&self, node: &Node) -> Bounds {
        Bounds::from_center(
            node.position(),
            node.width.unwrap_or(self.config.default_width),
            node.height.unwrap_or(self.config.default_height),
        )
    }

    /// Extent of everything drawn, before the margin.
    fn extent(&self) -> Option<Bounds> {
        let mut corners: Vec<Point2D> = Vec::new();
        for node in self.nodes {
            if node.is_corridor() {
                corners.push(node.position());
            } else {
                let rect = self.room_rect(node);
                corners.extend([rect.min, rect.max]);
            }
        }
        corners.extend(self.route.iter().copied());

        let first = *corners.first()?;
        Some(corners.iter().fold(Bounds::new(first, first), |b, &p| {
            Bounds::new(b.min.min(p), b.max.max(p))
        }))
    }

    fn write_rooms(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"  <g id="rooms">"#)?;
        for node in self.nodes.iter().filter(|n| !n.is_corridor()) {
            let rect = self.room_rect(node);
            writeln!(
                f,
                r##"    <rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="#555" stroke-width="1"><title>{}</title></rect>"##,
                rect.min.x,
                rect.min.y,
                rect.width(),
                rect.height(),
                self.config.colors.fill(node.kind),
                escape(&node.label)
            )?;
            writeln!(
                f,
                r#"    <text x="{}" y="{}" font-family="sans-serif" font-size="10" text-anchor="middle" fill="{}">{}</text>"#,
                node.x,
                node.y,
                self.config.colors.text,
                escape(&node.label)
            )?;
        }
        writeln!(f, "  </g>")
    }

    fn write_corridors(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"  <g id="corridors">"#)?;
        for node in self.nodes.iter().filter(|n| n.is_corridor()) {
            writeln!(
                f,
                r#"    <circle cx="{}" cy="{}" r="{}" fill="{}"><title>{}</title></circle>"#,
                node.x,
                node.y,
                self.config.marker_radius,
                self.config.colors.corridor,
                escape(&node.label)
            )?;
        }
        writeln!(f, "  </g>")
    }

    fn write_route(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(start), Some(end)) = (self.route.first(), self.route.last()) else {
            return Ok(());
        };
        let color = self.config.colors.route;

        writeln!(f, r#"  <g id="route">"#)?;
        writeln!(
            f,
            r#"    <polyline points="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linejoin="round" stroke-linecap="round"/>"#,
            format_points(&self.route),
            color,
            self.config.route_width
        )?;
        let r = self.config.route_width * 1.5;
        writeln!(
            f,
            r#"    <circle cx="{}" cy="{}" r="{}" fill="white" stroke="{}" stroke-width="2"/>"#,
            start.x, start.y, r, color
        )?;
        writeln!(
            f,
            r#"    <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            end.x, end.y, r, color
        )?;
        writeln!(f, "  </g>")
    }
}

impl fmt::Display for FloorSvg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let margin = self.config.margin;
        let title_height = if self.title.is_some() { 24.0 } else { 0.0 };
        let extent = self
            .extent()
            .unwrap_or(Bounds::new(Point2D::ZERO, Point2D::ZERO))
            .expand(margin);
        let view_min_y = extent.min.y - title_height;
        let width = extent.width();
        let height = extent.height() + title_height;

        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            width, height, extent.min.x, view_min_y, width, height
        )?;
        writeln!(
            f,
            r##"  <rect x="{}" y="{}" width="100%" height="100%" fill="#F8F8F8"/>"##,
            extent.min.x, view_min_y
        )?;

        if let Some(ref title) = self.title {
            writeln!(
                f,
                r#"  <text x="{}" y="{}" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="{}">{}</text>"#,
                extent.center().x,
                view_min_y + 18.0,
                self.config.colors.text,
                escape(title)
            )?;
        }

        self.write_rooms(f)?;
        self.write_corridors(f)?;
        self.write_route(f)?;

        writeln!(f, "</svg>")
    }
}

/// Render one floor with its route as an SVG document.
pub fn render_floor_svg(floor_nodes: &[&Node], points: &[Point2D], config: &SvgConfig) -> String {
    FloorSvg::new(floor_nodes, config.clone())
        .with_route(points.to_vec())
        .to_string()
}

/// Escape text for XML content and attributes.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
