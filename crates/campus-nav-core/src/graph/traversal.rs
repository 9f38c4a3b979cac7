use crate::graph::adjacency::Graph;
use crate::graph::types::Neighbor;

/// Trait for providing graph adjacency to the search algorithms
pub trait GraphProvider {
    fn has_vertex(&self, name: &str) -> bool;
    /// Outgoing arcs of `name` in stored order (most recent first)
    fn outbound(&self, name: &str) -> Vec<&Neighbor>;
}

impl GraphProvider for Graph {
    fn has_vertex(&self, name: &str) -> bool {
        self.contains(name)
    }

    fn outbound(&self, name: &str) -> Vec<&Neighbor> {
        self.neighbors(name).collect()
    }
}
