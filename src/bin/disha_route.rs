//! CLI tool for resolving a route on a campus map.
//!
//! Prints the turn-by-turn steps, or the full route as JSON, and can write
//! one SVG per floor the route visits.
//!
//! # Usage
//!
//! ```bash
//! disha-route --map maps/campus.yaml --from entrada --to lab-201
//! disha-route --map maps/campus.yaml --from entrada --to lab-201 --block p0-b:p0-c --json
//! disha-route --map maps/campus.yaml --from entrada --to terraza --svg-dir out/
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;
use serde::Serialize;

use disha::io::FloorSvg;
use disha::{CampusGraph, CampusNavigator, DishaConfig, NavigationStep, Route};

#[derive(Parser)]
#[command(name = "disha-route")]
#[command(about = "Resolve a route between two places on a campus map")]
struct Args {
    /// Campus map (YAML, or JSON by extension)
    #[arg(short, long)]
    map: PathBuf,

    /// Configuration file (defaults to configs/config.yaml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start node id
    #[arg(long)]
    from: String,

    /// Destination node id
    #[arg(long)]
    to: String,

    /// Closed connection as FROM:TO (repeatable)
    #[arg(long = "block", value_name = "FROM:TO", value_parser = parse_block)]
    blocks: Vec<(String, String)>,

    /// Print the route as JSON
    #[arg(long)]
    json: bool,

    /// Write one SVG per visited floor into this directory
    #[arg(long)]
    svg_dir: Option<PathBuf>,
}

/// JSON shape of a resolved route
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RouteReport<'a> {
    path: &'a [String],
    total_distance: f64,
    floors: &'a [i32],
    steps: &'a [NavigationStep],
    polylines: BTreeMap<i32, String>,
}

fn parse_block(value: &str) -> Result<(String, String), String> {
    match value.split_once(':') {
        Some((from, to)) if !from.is_empty() && !to.is_empty() => {
            Ok((from.to_string(), to.to_string()))
        }
        _ => Err(format!("expected FROM:TO, got '{}'", value)),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => DishaConfig::load(path)?,
        None => DishaConfig::load_default()?,
    };
    let graph = CampusGraph::load(&args.map)?;
    info!(
        "Loaded {} nodes, {} edges from {}",
        graph.nodes.len(),
        graph.edges.len(),
        args.map.display()
    );

    let mut navigator = CampusNavigator::new(graph, &config);
    for (from, to) in &args.blocks {
        navigator.block(from, to);
    }

    let route = navigator
        .route(&args.from, &args.to)
        .ok_or_else(|| format!("no route from '{}' to '{}'", args.from, args.to))?;

    if args.json {
        let polylines = route
            .floors()
            .iter()
            .map(|&floor| (floor, navigator.floor_polyline(&route, floor)))
            .collect();
        let report = RouteReport {
            path: &route.result.path,
            total_distance: route.result.total_distance,
            floors: route.floors(),
            steps: &route.result.steps,
            polylines,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_steps(&route);
    }

    if let Some(dir) = &args.svg_dir {
        write_svgs(&navigator, &route, &config, dir)?;
    }

    Ok(())
}

fn print_steps(route: &Route) {
    println!(
        "{} -> {}: {} legs, distance {:.1}, {} floor changes\n",
        route.result.path.first().map_or("", String::as_str),
        route.result.path.last().map_or("", String::as_str),
        route.result.len(),
        route.result.total_distance,
        route.result.floor_changes()
    );
    for (i, step) in route.result.steps.iter().enumerate() {
        println!("{:>3}. [Piso {}] {}", i + 1, step.floor, step.instruction);
    }
}

fn write_svgs(
    navigator: &CampusNavigator,
    route: &Route,
    config: &DishaConfig,
    dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(dir)?;

    let mut floors = route.floors().to_vec();
    floors.sort_unstable();
    floors.dedup();

    for floor in floors {
        let floor_nodes = navigator.graph().nodes_on_floor(floor);
        let path = dir.join(format!("piso-{}.svg", floor));
        FloorSvg::new(&floor_nodes, config.to_svg_config())
            .with_title(format!("Piso {}", floor))
            .with_route(navigator.floor_points(route, floor))
            .save(&path)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}
