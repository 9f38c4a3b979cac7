use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A non-negative, finite distance in kilometres.
///
/// Construction goes through `TryFrom<f64>`, which rejects negative, NaN and
/// infinite values. Because every value is finite, `Distance` is totally
/// ordered and can key a priority queue directly.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(transparent)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Sum of two distances, or `None` if it leaves the finite range
    pub fn checked_add(self, other: Distance) -> Option<Distance> {
        Distance::try_from(self.0 + other.0).ok()
    }
}

impl TryFrom<f64> for Distance {
    type Error = String;

    fn try_from(km: f64) -> Result<Self, Self::Error> {
        if km.is_nan() {
            Err("distance is NaN".to_string())
        } else if km.is_infinite() {
            Err(format!("distance is infinite ({})", km))
        } else if km < 0.0 {
            Err(format!("negative distance {}", km))
        } else {
            Ok(Distance(km))
        }
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One adjacency entry: the arc's head and its weight
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    pub name: String,
    pub distance: Distance,
}

/// Edge description used to seed a graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub distance: f64,
    /// Store the reverse arc as well (default: true)
    #[serde(default = "default_bidirectional")]
    pub bidirectional: bool,
}

fn default_bidirectional() -> bool {
    true
}

impl EdgeSpec {
    /// A two-way edge
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: f64) -> Self {
        EdgeSpec {
            from: from.into(),
            to: to.into(),
            distance,
            bidirectional: true,
        }
    }

    /// A one-way arc
    pub fn directed(from: impl Into<String>, to: impl Into<String>, distance: f64) -> Self {
        EdgeSpec {
            bidirectional: false,
            ..EdgeSpec::new(from, to, distance)
        }
    }
}

/// Order in which a vertex's neighbors are expanded during a search.
///
/// This decides which of several equal-cost paths is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NeighborOrder {
    /// Most recently added arc first
    #[default]
    RecentFirst,
    /// Oldest arc first
    Insertion,
    /// By neighbor name, then by distance
    Lexicographic,
}

impl std::str::FromStr for NeighborOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recent-first" | "recent" => Ok(NeighborOrder::RecentFirst),
            "insertion" => Ok(NeighborOrder::Insertion),
            "lexicographic" | "name" => Ok(NeighborOrder::Lexicographic),
            other => Err(format!(
                "unknown neighbor order '{}' (expected: recent-first, insertion, lexicographic)",
                other
            )),
        }
    }
}

/// Path-finding algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Fewest edges (breadth-first search)
    Hops,
    /// Minimum total distance (Dijkstra)
    #[default]
    Distance,
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hops" | "bfs" => Ok(Algorithm::Hops),
            "distance" | "dijkstra" => Ok(Algorithm::Distance),
            other => Err(format!(
                "unknown algorithm '{}' (expected: hops, distance)",
                other
            )),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Hops => write!(f, "hops"),
            Algorithm::Distance => write!(f, "distance"),
        }
    }
}

/// Options shared by both path-finding algorithms
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    pub neighbor_order: NeighborOrder,
}

/// Fewest-hops path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HopPath {
    pub from: String,
    pub to: String,
    pub path: Vec<String>,
    pub hops: usize,
}

/// Minimum-distance path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistancePath {
    pub from: String,
    pub to: String,
    pub path: Vec<String>,
    pub total_distance: Distance,
}

/// Result of a path query under either algorithm
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "algorithm", rename_all = "lowercase")]
pub enum Route {
    Hops(HopPath),
    Distance(DistancePath),
}

impl Route {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Route::Hops(_) => Algorithm::Hops,
            Route::Distance(_) => Algorithm::Distance,
        }
    }

    pub fn path(&self) -> &[String] {
        match self {
            Route::Hops(p) => &p.path,
            Route::Distance(p) => &p.path,
        }
    }

    pub fn from(&self) -> &str {
        match self {
            Route::Hops(p) => &p.from,
            Route::Distance(p) => &p.from,
        }
    }

    pub fn to(&self) -> &str {
        match self {
            Route::Hops(p) => &p.to,
            Route::Distance(p) => &p.to,
        }
    }
}
