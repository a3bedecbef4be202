//! Default value functions for serde deserialization.

pub fn enabled() -> bool {
    true
}

pub fn heuristic_scale() -> f64 {
    50.0
}

pub fn floor_penalty() -> f64 {
    200.0
}

pub fn max_iterations() -> usize {
    100_000
}

pub fn obstacle_padding() -> f64 {
    8.0
}

pub fn default_footprint() -> f64 {
    40.0
}

pub fn render_margin() -> f64 {
    20.0
}

pub fn route_width() -> f64 {
    4.0
}
