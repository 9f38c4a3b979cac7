//! Location graph and shortest-path search
//!
//! - `adjacency`: the weighted graph itself
//! - `algos`: BFS (fewest hops) and Dijkstra (minimum distance)
//! - `traversal`: provider trait the algorithms read through

pub mod adjacency;
pub mod algos;
pub mod traversal;
pub mod types;

pub use adjacency::{Graph, Neighbors};
pub use algos::{find_path, find_path_by_distance, find_path_by_hops};
pub use traversal::GraphProvider;
pub use types::{
    Algorithm, Distance, DistancePath, EdgeSpec, HopPath, Neighbor, NeighborOrder, Route,
    SearchOptions,
};
