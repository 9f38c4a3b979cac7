use crate::error::{NavError, Result};
use crate::graph::algos::shared::{check_endpoints, ordered_neighbors, reconstruct_path, Parent};
use crate::graph::types::{Distance, DistancePath, SearchOptions};
use crate::graph::GraphProvider;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Priority-queue entry, ordered by tentative distance then push sequence
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry<'a> {
    pub name: &'a str,
    pub distance: Distance,
    /// Push counter; equal distances pop in the order they were pushed
    pub seq: u64,
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// State tracked during Dijkstra search.
///
/// A vertex without an entry in `distances` is unreached.
struct DijkstraState<'a> {
    distances: HashMap<&'a str, Distance>,
    parents: HashMap<&'a str, Parent<'a>>,
    finalized: HashSet<&'a str>,
    heap: BinaryHeap<Reverse<HeapEntry<'a>>>,
    pushes: u64,
    stale: u64,
    /// An arc was skipped because its candidate distance was not finite
    overflowed: bool,
}

impl<'a> DijkstraState<'a> {
    fn new(source: &'a str) -> Self {
        let mut state = Self {
            distances: HashMap::new(),
            parents: HashMap::new(),
            finalized: HashSet::new(),
            heap: BinaryHeap::new(),
            pushes: 0,
            stale: 0,
            overflowed: false,
        };
        state.distances.insert(source, Distance::ZERO);
        state.parents.insert(source, Parent::Source);
        state.push(source, Distance::ZERO);
        state
    }

    fn push(&mut self, name: &'a str, distance: Distance) {
        self.heap.push(Reverse(HeapEntry {
            name,
            distance,
            seq: self.pushes,
        }));
        self.pushes += 1;
    }

    /// Record `candidate` for `name` if it beats the known distance
    fn relax(&mut self, name: &'a str, via: &'a str, candidate: Distance) {
        let improves = self
            .distances
            .get(name)
            .is_none_or(|known| candidate < *known);
        if improves {
            self.distances.insert(name, candidate);
            self.parents.insert(name, Parent::Via(via));
            self.push(name, candidate);
        }
    }
}

/// Run Dijkstra from `from` until `to` is finalized.
///
/// Arcs whose candidate distance overflows are skipped; no finite path can
/// run through them.
fn dijkstra_search<'a>(
    provider: &'a dyn GraphProvider,
    from: &'a str,
    to: &str,
    opts: &SearchOptions,
) -> DijkstraState<'a> {
    let mut state = DijkstraState::new(from);

    while let Some(Reverse(entry)) = state.heap.pop() {
        // Lazy deletion: superseded entries are dropped on pop
        if !state.finalized.insert(entry.name) {
            state.stale += 1;
            continue;
        }
        if entry.name == to {
            break;
        }

        for neighbor in ordered_neighbors(provider, entry.name, opts.neighbor_order) {
            let name = neighbor.name.as_str();
            if state.finalized.contains(name) {
                continue;
            }
            match entry.distance.checked_add(neighbor.distance) {
                Some(candidate) => state.relax(name, entry.name, candidate),
                None => state.overflowed = true,
            }
        }
    }

    state
}

/// Find the minimum-total-distance path between two locations.
///
/// Distances must be non-negative, which `Graph::add_edge` guarantees.
#[tracing::instrument(skip(provider, opts), fields(order = ?opts.neighbor_order))]
pub fn find_path_by_distance(
    provider: &dyn GraphProvider,
    from: &str,
    to: &str,
    opts: &SearchOptions,
) -> Result<DistancePath> {
    check_endpoints(provider, from, to)?;

    let state = dijkstra_search(provider, from, to, opts);
    tracing::debug!(
        finalized = state.finalized.len(),
        pushes = state.pushes,
        stale = state.stale,
        overflowed = state.overflowed,
        "dijkstra_search"
    );

    let Some(&total_distance) = state.distances.get(to) else {
        if state.overflowed {
            return Err(NavError::distance_overflow(from, to));
        }
        return Err(NavError::no_path(from, to));
    };

    Ok(DistancePath {
        from: from.to_string(),
        to: to.to_string(),
        path: reconstruct_path(to, &state.parents),
        total_distance,
    })
}
