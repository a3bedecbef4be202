//! Map and configuration loading integration tests.

mod common;

use std::path::Path;

use common::{sample_campus, sample_map_path};
use disha::{CampusGraph, DishaConfig, GraphError, NodeKind};
use tempfile::TempDir;

#[test]
fn test_sample_map_is_valid() {
    let graph = sample_campus();

    assert_eq!(graph.floors(), vec![0, 1, 2]);
    assert!(graph.validate().is_ok());
    assert!(graph.nodes_on_floor(1).iter().all(|n| n.floor == 1));
    assert!(graph.destinations().iter().all(|n| n.kind != NodeKind::Corridor));

    let patio_gate = graph
        .edges
        .iter()
        .find(|e| e.from == "patio" && e.to == "entrada")
        .unwrap();
    assert!(!patio_gate.bidirectional);
}

#[test]
fn test_search_sample_destinations() {
    let graph = sample_campus();

    let labels: Vec<&str> = graph.search("aula").iter().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, vec!["Aula 1", "Aula 101", "Aula 2"]);

    let ids: Vec<&str> = graph
        .search("escalera")
        .iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(ids, vec!["esc-0", "esc-1", "esc-2"]);

    // Corridors are not destinations
    assert!(graph.search("pasillo").is_empty());
    assert!(graph.search("   ").is_empty());
}

#[test]
fn test_json_round_trip_through_file() {
    let graph = sample_campus();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("campus.json");

    std::fs::write(&path, serde_json::to_string(&graph).unwrap()).unwrap();
    assert_eq!(CampusGraph::load(&path).unwrap(), graph);
}

#[test]
fn test_missing_file() {
    let err = CampusGraph::load("maps/does-not-exist.yaml").unwrap_err();
    assert!(matches!(err, GraphError::Io(_)));
}

#[test]
fn test_rejects_broken_maps() {
    let duplicate = r#"
nodes:
  - { id: a, type: corridor, floor: 0, x: 0, y: 0, label: A }
  - { id: a, type: office, floor: 1, x: 0, y: 0, label: A2 }
"#;
    assert!(matches!(
        CampusGraph::from_yaml_str(duplicate),
        Err(GraphError::DuplicateNode(id)) if id == "a"
    ));

    let dangling = r#"
nodes:
  - { id: a, type: corridor, floor: 0, x: 0, y: 0, label: A }
edges:
  - { from: a, to: b, distance: 1 }
"#;
    assert!(matches!(
        CampusGraph::from_yaml_str(dangling),
        Err(GraphError::UnknownEndpoint { missing, .. }) if missing == "b"
    ));

    let free_edge = r#"
nodes:
  - { id: a, type: corridor, floor: 0, x: 0, y: 0, label: A }
  - { id: b, type: corridor, floor: 0, x: 1, y: 0, label: B }
edges:
  - { from: a, to: b, distance: 0 }
"#;
    assert!(matches!(
        CampusGraph::from_yaml_str(free_edge),
        Err(GraphError::InvalidDistance { index: 0, .. })
    ));

    let unknown_kind = r#"
nodes:
  - { id: a, type: elevator, floor: 0, x: 0, y: 0, label: A }
"#;
    assert!(matches!(
        CampusGraph::from_yaml_str(unknown_kind),
        Err(GraphError::Parse(_))
    ));
}

#[test]
fn test_bundled_config_matches_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("configs/config.yaml");
    let config = DishaConfig::load(&path).unwrap();
    let defaults = DishaConfig::default();

    assert_eq!(config.search.heuristic_scale, defaults.search.heuristic_scale);
    assert_eq!(config.search.floor_penalty, defaults.search.floor_penalty);
    assert_eq!(config.search.max_iterations, defaults.search.max_iterations);
    assert_eq!(config.routing.obstacle_padding, defaults.routing.obstacle_padding);
    assert_eq!(config.render.margin, defaults.render.margin);
}

#[test]
fn test_sample_map_path_exists() {
    assert!(sample_map_path().exists());
}
