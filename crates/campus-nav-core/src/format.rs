//! Output format handling for campus-nav
//!
//! Supports three output formats:
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON
//! - records: Line-oriented format for scripts

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NavError, Result};
use crate::graph::{Distance, Graph, Neighbor, Route};

/// Output format for campus-nav commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Line-oriented records
    Records,
}

impl FromStr for OutputFormat {
    type Err = NavError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(NavError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// `A -> B -> C`
pub fn format_path(path: &[String]) -> String {
    path.join(" -> ")
}

/// Fixed-precision distance with unit, e.g. `0.110 km`
pub fn format_distance(distance: Distance, precision: usize, unit: &str) -> String {
    format!("{:.*} {}", precision, distance.value(), unit)
}

/// `name(0.06 km)`
fn format_neighbor(neighbor: &Neighbor, unit: &str) -> String {
    format!("{}({} {})", neighbor.name, neighbor.distance, unit)
}

/// One line per vertex: `  name -> n1(0.06 km), n2(0.05 km)`
pub fn adjacency_human(graph: &Graph, unit: &str) -> String {
    let mut out = String::new();
    for name in graph.vertices() {
        let neighbors: Vec<String> = graph
            .neighbors(name)
            .map(|n| format_neighbor(n, unit))
            .collect();
        out.push_str(&format!("  {} -> {}\n", name, neighbors.join(", ")));
    }
    out
}

#[derive(Serialize)]
struct VertexEntry<'a> {
    name: &'a str,
    neighbors: Vec<&'a Neighbor>,
}

#[derive(Serialize)]
struct AdjacencyReport<'a> {
    vertices: Vec<VertexEntry<'a>>,
}

pub fn adjacency_json(graph: &Graph) -> Result<String> {
    let report = AdjacencyReport {
        vertices: graph
            .vertices()
            .map(|name| VertexEntry {
                name,
                neighbors: graph.neighbors(name).collect(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// `V name` followed by one `N name neighbor distance` line per arc
pub fn adjacency_records(graph: &Graph) -> String {
    let mut out = String::new();
    for name in graph.vertices() {
        out.push_str(&format!("V {}\n", name));
        for n in graph.neighbors(name) {
            out.push_str(&format!("N {} {} {}\n", name, n.name, n.distance));
        }
    }
    out
}

/// Path on one line, then hop count or total distance
pub fn route_human(route: &Route, precision: usize, unit: &str) -> String {
    let summary = match route {
        Route::Hops(p) => format!("Total hops: {}", p.hops),
        Route::Distance(p) => format!(
            "Total distance: {}",
            format_distance(p.total_distance, precision, unit)
        ),
    };
    format!("{}\n{}\n", format_path(route.path()), summary)
}

pub fn route_json(route: &Route) -> Result<String> {
    Ok(serde_json::to_string_pretty(route)?)
}

pub fn route_records(route: &Route) -> String {
    let mut out = format!(
        "R algorithm={} from={} to={}",
        route.algorithm(),
        route.from(),
        route.to()
    );
    match route {
        Route::Hops(p) => out.push_str(&format!(" hops={}\n", p.hops)),
        Route::Distance(p) => out.push_str(&format!(" distance={}\n", p.total_distance)),
    }
    for (step, name) in route.path().iter().enumerate() {
        out.push_str(&format!("S {} {}\n", step, name));
    }
    out
}
