//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first search for fewest-hop paths
//! - `dijkstra`: Weighted shortest path finding
//! - `shared`: Common utilities used by both algorithms

pub mod bfs;
pub mod dijkstra;
pub mod shared;

pub use bfs::find_path_by_hops;
pub use dijkstra::find_path_by_distance;
pub use shared::{check_endpoints, ordered_neighbors, reconstruct_path, Parent};

use crate::error::Result;
use crate::graph::types::{Algorithm, Route, SearchOptions};
use crate::graph::GraphProvider;

/// Run the selected algorithm between two locations
pub fn find_path(
    provider: &dyn GraphProvider,
    from: &str,
    to: &str,
    algorithm: Algorithm,
    opts: &SearchOptions,
) -> Result<Route> {
    match algorithm {
        Algorithm::Hops => find_path_by_hops(provider, from, to, opts).map(Route::Hops),
        Algorithm::Distance => find_path_by_distance(provider, from, to, opts).map(Route::Distance),
    }
}
