//! TOML map files
//!
//! ```toml
//! vertices = ["Isolated"]
//!
//! [[edges]]
//! from = "A"
//! to = "B"
//! distance = 1.0
//! bidirectional = true
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bail_usage;
use crate::campus;
use crate::error::{NavError, Result};
use crate::graph::{EdgeSpec, Graph};

/// On-disk description of a graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapFile {
    /// Vertices added before any edge, in order
    #[serde(default)]
    pub vertices: Vec<String>,

    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl MapFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            NavError::Other(format!("failed to read map from {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build the graph. Location names must not be blank.
    pub fn into_graph(self) -> Result<Graph> {
        let names = self
            .vertices
            .iter()
            .chain(self.edges.iter().flat_map(|e| [&e.from, &e.to]));
        for name in names {
            if name.trim().is_empty() {
                bail_usage!("map file contains a blank location name");
            }
        }

        let mut graph = Graph::new();
        for name in &self.vertices {
            graph.add_vertex(name);
        }
        for edge in self.edges {
            graph.add_edge(&edge.from, &edge.to, edge.distance, edge.bidirectional)?;
        }
        Ok(graph)
    }
}

/// Load the graph from `map`, or build the campus map when none is given
pub fn load_graph(map: Option<&Path>) -> Result<Graph> {
    match map {
        Some(path) => {
            let graph = MapFile::load(path)?.into_graph()?;
            tracing::debug!(
                path = %path.display(),
                vertices = graph.vertex_count(),
                arcs = graph.arc_count(),
                "load_map"
            );
            Ok(graph)
        }
        None => campus::build_campus_map(),
    }
}
