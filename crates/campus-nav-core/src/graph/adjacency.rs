//! Adjacency-list storage for the location graph

use std::collections::HashMap;

use crate::error::{NavError, Result};
use crate::graph::types::{Distance, EdgeSpec, Neighbor};

/// Iterator over a vertex's neighbors, most recently added first
pub type Neighbors<'a> = std::iter::Rev<std::slice::Iter<'a, Neighbor>>;

/// Weighted graph over string-named vertices.
///
/// Each vertex owns a `Vec` of outgoing arcs in insertion order. Readers see
/// the reverse of that order, so the latest arc added from a vertex is
/// expanded first by any traversal that walks the stored order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Vertex names in first-seen order
    order: Vec<String>,
    adjacency: HashMap<String, Vec<Neighbor>>,
    arcs: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a list of edges, failing on the first invalid one
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = EdgeSpec>,
    {
        let mut graph = Graph::new();
        for edge in edges {
            graph.add_edge(&edge.from, &edge.to, edge.distance, edge.bidirectional)?;
        }
        tracing::debug!(
            vertices = graph.vertex_count(),
            arcs = graph.arc_count(),
            "build_graph"
        );
        Ok(graph)
    }

    /// Insert a vertex with no arcs. Returns false if it already existed.
    pub fn add_vertex(&mut self, name: &str) -> bool {
        if self.adjacency.contains_key(name) {
            return false;
        }
        self.order.push(name.to_string());
        self.adjacency.insert(name.to_string(), Vec::new());
        true
    }

    /// Add an arc `from -> to`, plus `to -> from` when `bidirectional`.
    ///
    /// Both endpoints are created if missing. The distance must be finite and
    /// non-negative; nothing is inserted when it is not.
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        distance: f64,
        bidirectional: bool,
    ) -> Result<()> {
        let distance =
            Distance::try_from(distance).map_err(|reason| NavError::invalid_edge(from, to, reason))?;

        self.add_vertex(from);
        self.add_vertex(to);

        self.push_arc(from, to, distance);
        if bidirectional {
            self.push_arc(to, from, distance);
        }
        Ok(())
    }

    fn push_arc(&mut self, from: &str, to: &str, distance: Distance) {
        if let Some(list) = self.adjacency.get_mut(from) {
            list.push(Neighbor {
                name: to.to_string(),
                distance,
            });
            self.arcs += 1;
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Neighbors of `name`, most recently added first. Empty for unknown names.
    pub fn neighbors(&self, name: &str) -> Neighbors<'_> {
        self.adjacency
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .rev()
    }

    /// All vertex names in first-seen order
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Number of directed arcs (a two-way edge counts twice)
    pub fn arc_count(&self) -> usize {
        self.arcs
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(graph: &Graph, vertex: &str) -> Vec<String> {
        graph.neighbors(vertex).map(|n| n.name.clone()).collect()
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut graph = Graph::new();
        assert!(graph.add_vertex("Tapri"));
        graph.add_edge("Tapri", "LHC1", 0.08, true).unwrap();

        assert!(!graph.add_vertex("Tapri"));
        assert_eq!(graph.vertex_count(), 2);
        // Existing adjacency survives the second insert
        assert_eq!(names(&graph, "Tapri"), vec!["LHC1"]);
    }

    #[test]
    fn test_add_edge_creates_both_endpoints() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0, true).unwrap();
        assert!(graph.contains("A"));
        assert!(graph.contains("B"));
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_bidirectional_edge_is_symmetric() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 2.5, true).unwrap();

        let ab: Vec<_> = graph.neighbors("A").collect();
        let ba: Vec<_> = graph.neighbors("B").collect();
        assert_eq!(ab.len(), 1);
        assert_eq!(ba.len(), 1);
        assert_eq!(ab[0].name, "B");
        assert_eq!(ba[0].name, "A");
        assert_eq!(ab[0].distance.value(), 2.5);
        assert_eq!(ba[0].distance.value(), 2.5);
        assert_eq!(graph.arc_count(), 2);
    }

    #[test]
    fn test_directed_edge_has_no_reverse_arc() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0, false).unwrap();
        assert_eq!(names(&graph, "A"), vec!["B"]);
        assert!(names(&graph, "B").is_empty());
        assert_eq!(graph.arc_count(), 1);
    }

    #[test]
    fn test_neighbors_most_recent_first() {
        let mut graph = Graph::new();
        graph.add_edge("Hub", "First", 1.0, true).unwrap();
        graph.add_edge("Hub", "Second", 1.0, true).unwrap();
        graph.add_edge("Third", "Hub", 1.0, true).unwrap();
        assert_eq!(names(&graph, "Hub"), vec!["Third", "Second", "First"]);
    }

    #[test]
    fn test_vertex_names_are_case_sensitive() {
        let mut graph = Graph::new();
        graph.add_vertex("cse");
        graph.add_vertex("CSE");
        assert_eq!(graph.vertex_count(), 2);
        assert!(!graph.contains("Cse"));
    }

    #[test]
    fn test_negative_distance_rejected() {
        let mut graph = Graph::new();
        let err = graph.add_edge("A", "B", -1.0, true).unwrap_err();
        assert!(matches!(err, NavError::InvalidEdge { .. }));
        // Nothing was inserted
        assert!(graph.is_empty());
        assert_eq!(graph.arc_count(), 0);
    }

    #[test]
    fn test_nan_distance_rejected() {
        let mut graph = Graph::new();
        assert!(graph.add_edge("A", "B", f64::NAN, false).is_err());
    }

    #[test]
    fn test_self_loop_is_stored() {
        let mut graph = Graph::new();
        graph.add_edge("A", "A", 0.5, true).unwrap();
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(names(&graph, "A"), vec!["A", "A"]);
    }

    #[test]
    fn test_unknown_vertex_has_no_neighbors() {
        let graph = Graph::new();
        assert_eq!(graph.neighbors("Nowhere").count(), 0);
        assert!(!graph.contains("Nowhere"));
    }

    #[test]
    fn test_from_edges_stops_at_invalid_edge() {
        let result = Graph::from_edges(vec![
            EdgeSpec::new("A", "B", 1.0),
            EdgeSpec::new("B", "C", -3.0),
        ]);
        match result {
            Err(NavError::InvalidEdge { from, to, .. }) => {
                assert_eq!(from, "B");
                assert_eq!(to, "C");
            }
            other => panic!("expected InvalidEdge, got {:?}", other),
        }
    }

    #[test]
    fn test_from_edges_mixes_directed_and_undirected() {
        let graph = Graph::from_edges(vec![
            EdgeSpec::new("A", "B", 1.0),
            EdgeSpec::directed("B", "C", 1.0),
        ])
        .unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.arc_count(), 3);
        assert!(names(&graph, "C").is_empty());
    }
}
