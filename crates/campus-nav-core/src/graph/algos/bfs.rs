use crate::error::{NavError, Result};
use crate::graph::algos::shared::{check_endpoints, ordered_neighbors, reconstruct_path, Parent};
use crate::graph::types::{HopPath, SearchOptions};
use crate::graph::GraphProvider;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

/// Run BFS from `from` until `to` is dequeued.
///
/// Returns the parent map, which doubles as the visited set.
fn bfs_search<'a>(
    provider: &'a dyn GraphProvider,
    from: &'a str,
    to: &str,
    opts: &SearchOptions,
) -> HashMap<&'a str, Parent<'a>> {
    let mut parents: HashMap<&'a str, Parent<'a>> = HashMap::new();
    let mut queue: VecDeque<&'a str> = VecDeque::new();

    parents.insert(from, Parent::Source);
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            break;
        }

        for neighbor in ordered_neighbors(provider, current, opts.neighbor_order) {
            if let Entry::Vacant(slot) = parents.entry(neighbor.name.as_str()) {
                slot.insert(Parent::Via(current));
                queue.push_back(neighbor.name.as_str());
            }
        }
    }

    parents
}

/// Find the path with the fewest edges between two locations.
///
/// Neighbors are expanded in `opts.neighbor_order`, which decides between
/// paths of equal hop count.
#[tracing::instrument(skip(provider, opts), fields(order = ?opts.neighbor_order))]
pub fn find_path_by_hops(
    provider: &dyn GraphProvider,
    from: &str,
    to: &str,
    opts: &SearchOptions,
) -> Result<HopPath> {
    check_endpoints(provider, from, to)?;

    let parents = bfs_search(provider, from, to, opts);
    tracing::debug!(visited = parents.len(), "bfs_search");

    if !parents.contains_key(to) {
        return Err(NavError::no_path(from, to));
    }

    let path = reconstruct_path(to, &parents);
    let hops = path.len() - 1;

    Ok(HopPath {
        from: from.to_string(),
        to: to.to_string(),
        path,
        hops,
    })
}
