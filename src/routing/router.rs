//! Collision-avoiding polyline router.

use log::{debug, trace};

use crate::config::defaults;
use crate::core::{Bounds, Point2D, Segment};
use crate::graph::Node;

use super::obstacles::{corridor_lanes, extract_obstacles};

/// Route rendering configuration
#[derive(Clone, Debug)]
pub struct RoutingConfig {
    /// Clearance added on each side of a room rectangle
    pub obstacle_padding: f64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            obstacle_padding: defaults::obstacle_padding(),
        }
    }
}

/// Turns the route nodes of one floor into a drawable polyline.
///
/// Each leg is drawn straight when that misses every room. Otherwise the
/// leg becomes an L-route `from -> (from.x, lane) -> (to.x, lane) -> to`
/// through the nearest corridor lane that keeps all three pieces clear.
/// When no lane works the straight leg is kept.
#[derive(Clone, Debug, Default)]
pub struct VisualRouter {
    config: RoutingConfig,
}

impl VisualRouter {
    /// Create a new router
    pub fn new(config: RoutingConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::new(RoutingConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Polyline vertices for `path_nodes`, avoiding the rooms in `floor_nodes`.
    ///
    /// `path_nodes` are the route nodes on one floor, in route order;
    /// `floor_nodes` is everything on that floor. Fewer than two path nodes
    /// yield no points.
    pub fn safe_path_points(&self, path_nodes: &[&Node], floor_nodes: &[&Node]) -> Vec<Point2D> {
        if path_nodes.len() < 2 {
            return Vec::new();
        }

        let obstacles = extract_obstacles(path_nodes, floor_nodes, self.config.obstacle_padding);
        let lanes = corridor_lanes(floor_nodes);
        trace!(
            "[Router] {} route nodes, {} obstacles, {} lanes",
            path_nodes.len(),
            obstacles.len(),
            lanes.len()
        );

        let mut points = vec![path_nodes[0].position()];
        for pair in path_nodes.windows(2) {
            let from = pair[0].position();
            let to = pair[1].position();
            points.extend(route_leg(from, to, &obstacles, &lanes));
        }
        points
    }

    /// [`safe_path_points`](Self::safe_path_points) formatted for an SVG
    /// `points` attribute.
    pub fn generate_safe_path_points(&self, path_nodes: &[&Node], floor_nodes: &[&Node]) -> String {
        format_points(&self.safe_path_points(path_nodes, floor_nodes))
    }
}

/// Points of one leg after `from`.
fn route_leg(from: Point2D, to: Point2D, obstacles: &[Bounds], lanes: &[f64]) -> Vec<Point2D> {
    let direct = Segment::new(from, to);
    if is_clear(&direct, obstacles) {
        return vec![to];
    }

    let mid_y = direct.midpoint().y;
    let mut candidates = lanes.to_vec();
    candidates.sort_by(|a, b| (a - mid_y).abs().total_cmp(&(b - mid_y).abs()));

    for lane in candidates {
        let corners = [Point2D::new(from.x, lane), Point2D::new(to.x, lane), to];

        let mut prev = from;
        let clear = corners.iter().all(|&next| {
            let piece = Segment::new(prev, next);
            prev = next;
            is_clear(&piece, obstacles)
        });
        if !clear {
            continue;
        }

        debug!(
            "[Router] leg ({}) -> ({}) detoured through lane y={}",
            from, to, lane
        );
        let mut leg = Vec::with_capacity(corners.len());
        let mut last = from;
        for point in corners {
            if point != last {
                leg.push(point);
                last = point;
            }
        }
        return leg;
    }

    debug!(
        "[Router] leg ({}) -> ({}) crosses an obstacle and no lane clears it; drawing it straight",
        from, to
    );
    vec![to]
}

/// True if `segment` touches none of `obstacles`.
fn is_clear(segment: &Segment, obstacles: &[Bounds]) -> bool {
    !obstacles.iter().any(|o| segment.intersects_bounds(o))
}

/// Whitespace-separated `x,y` tokens.
pub fn format_points(points: &[Point2D]) -> String {
    points
        .iter()
        .map(Point2D::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
