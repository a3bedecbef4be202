//! Graph loading and validation errors.

use thiserror::Error;

/// Problems found in a campus map.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("duplicate node id '{0}'")]
    DuplicateNode(String),

    #[error("edge {index} ({from} -> {to}) references unknown node '{missing}'")]
    UnknownEndpoint {
        index: usize,
        from: String,
        to: String,
        missing: String,
    },

    #[error("edge {index} ({from} -> {to}) has invalid distance {distance}")]
    InvalidDistance {
        index: usize,
        from: String,
        to: String,
        distance: f64,
    },

    #[error("failed to read map file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse map: {0}")]
    Parse(String),
}

impl From<serde_yaml::Error> for GraphError {
    fn from(e: serde_yaml::Error) -> Self {
        GraphError::Parse(e.to_string())
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(e: serde_json::Error) -> Self {
        GraphError::Parse(e.to_string())
    }
}
