use crate::error::{NavError, Result};
use crate::graph::types::{Neighbor, NeighborOrder};
use crate::graph::GraphProvider;
use std::collections::HashMap;

/// How a visited vertex was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent<'a> {
    /// The search started here
    Source,
    /// Reached over an arc from this vertex
    Via(&'a str),
}

/// Fail with `VertexNotFound` unless both endpoints are in the graph
pub fn check_endpoints(provider: &dyn GraphProvider, from: &str, to: &str) -> Result<()> {
    for name in [from, to] {
        if !provider.has_vertex(name) {
            return Err(NavError::vertex_not_found(name));
        }
    }
    Ok(())
}

/// Outgoing arcs of `name` in the order the search should expand them
pub fn ordered_neighbors<'a>(
    provider: &'a dyn GraphProvider,
    name: &str,
    order: NeighborOrder,
) -> Vec<&'a Neighbor> {
    let mut neighbors = provider.outbound(name);
    match order {
        NeighborOrder::RecentFirst => {}
        NeighborOrder::Insertion => neighbors.reverse(),
        NeighborOrder::Lexicographic => neighbors.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.distance.cmp(&b.distance))
        }),
    }
    neighbors
}

/// Walk parent links back from `to` and return the path source-first.
///
/// `to` must have been reached; an unreached vertex yields just `[to]`.
pub fn reconstruct_path(to: &str, parents: &HashMap<&str, Parent<'_>>) -> Vec<String> {
    let mut path = vec![to.to_string()];
    let mut current = to;

    while let Some(Parent::Via(pred)) = parents.get(current) {
        path.push(pred.to_string());
        current = *pred;
    }

    path.reverse();
    path
}
