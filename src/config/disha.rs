//! Main DishaConfig and conversion methods.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::io::SvgConfig;
use crate::pathfinding::SearchConfig;
use crate::routing::RoutingConfig;

use super::error::ConfigLoadError;
use super::routing::{RenderSection, RoutingSection};
use super::search::SearchSection;

/// Full configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct DishaConfig {
    /// Route search settings
    #[serde(default)]
    pub search: SearchSection,

    /// Collision-avoidance settings
    #[serde(default)]
    pub routing: RoutingSection,

    /// SVG output settings
    #[serde(default)]
    pub render: RenderSection,
}

impl DishaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            debug!("[Config] {} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate value ranges.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        positive("search.heuristic_scale", self.search.heuristic_scale)?;
        non_negative("search.floor_penalty", self.search.floor_penalty)?;
        if self.search.max_iterations == 0 {
            return Err(ConfigLoadError::Invalid(
                "search.max_iterations must be > 0".to_string(),
            ));
        }
        non_negative("routing.obstacle_padding", self.routing.obstacle_padding)?;
        positive("render.default_width", self.render.default_width)?;
        positive("render.default_height", self.render.default_height)?;
        non_negative("render.margin", self.render.margin)?;
        positive("render.route_width", self.render.route_width)?;
        Ok(())
    }

    /// Convert to SearchConfig
    pub fn to_search_config(&self) -> SearchConfig {
        SearchConfig {
            heuristic_scale: self.search.heuristic_scale,
            floor_penalty: self.search.floor_penalty,
            max_iterations: self.search.max_iterations,
        }
    }

    /// Convert to RoutingConfig
    pub fn to_routing_config(&self) -> RoutingConfig {
        RoutingConfig {
            obstacle_padding: self.routing.obstacle_padding,
        }
    }

    /// Convert to SvgConfig
    pub fn to_svg_config(&self) -> SvgConfig {
        SvgConfig {
            default_width: self.render.default_width,
            default_height: self.render.default_height,
            margin: self.render.margin,
            route_width: self.render.route_width,
            ..SvgConfig::default()
        }
    }
}

fn positive(name: &str, value: f64) -> Result<(), ConfigLoadError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigLoadError::Invalid(format!(
            "{} must be > 0, got {}",
            name, value
        )));
    }
    Ok(())
}

fn non_negative(name: &str, value: f64) -> Result<(), ConfigLoadError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigLoadError::Invalid(format!(
            "{} must be >= 0, got {}",
            name, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DishaConfig::default();
        assert_eq!(config.search.heuristic_scale, 50.0);
        assert_eq!(config.search.floor_penalty, 200.0);
        assert_eq!(config.routing.obstacle_padding, 8.0);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = DishaConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = DishaConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.search.max_iterations, config.search.max_iterations);
        assert_eq!(parsed.render.margin, config.render.margin);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "search:\n  floor_penalty: 50\nrouting: {}\n";
        let config = DishaConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.search.floor_penalty, 50.0);
        assert_eq!(config.search.heuristic_scale, 50.0);
        assert_eq!(config.routing.obstacle_padding, 8.0);
        assert_eq!(config.render.default_width, 40.0);
    }

    #[test]
    fn test_conversions() {
        let yaml = "search: { heuristic_scale: 10, max_iterations: 7 }\nrouting: { obstacle_padding: 2.5 }\n";
        let config = DishaConfig::from_yaml(yaml).unwrap();

        let search = config.to_search_config();
        assert_eq!(search.heuristic_scale, 10.0);
        assert_eq!(search.max_iterations, 7);
        assert_eq!(config.to_routing_config().obstacle_padding, 2.5);
    }

    #[test]
    fn test_parse_error() {
        let err = DishaConfig::from_yaml("search: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_rejects_zero_heuristic_scale() {
        let err = DishaConfig::from_yaml("search: { heuristic_scale: 0 }\n").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Invalid(_)));
        assert!(err.to_string().contains("search.heuristic_scale"));
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let bad = [
            "search: { heuristic_scale: -5 }",
            "search: { heuristic_scale: .nan }",
            "search: { floor_penalty: -1 }",
            "search: { floor_penalty: .inf }",
            "search: { max_iterations: 0 }",
            "routing: { obstacle_padding: -0.5 }",
            "render: { default_width: 0 }",
            "render: { default_height: -3 }",
            "render: { margin: -1 }",
            "render: { route_width: 0 }",
        ];
        for yaml in bad {
            let err = DishaConfig::from_yaml(yaml).unwrap_err();
            assert!(matches!(err, ConfigLoadError::Invalid(_)), "{yaml}");
        }

        // Zero penalty, padding and margin are allowed
        let yaml = "search: { floor_penalty: 0 }\nrouting: { obstacle_padding: 0 }\nrender: { margin: 0 }\n";
        assert!(DishaConfig::from_yaml(yaml).is_ok());
        assert!(DishaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let err = DishaConfig::load(Path::new("/no/such/config.yaml")).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Io(_)));
    }
}
