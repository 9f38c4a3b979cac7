//! Configuration type definitions

use crate::graph::{Algorithm, NeighborOrder};
use serde::Deserialize;
use std::path::PathBuf;

/// Largest supported number of decimals when printing distances
pub const MAX_PRECISION: usize = 12;

/// campus-nav configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavConfig {
    /// Unit label printed after distances
    #[serde(default = "default_unit")]
    pub unit: String,

    /// Decimals shown for total route distance
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Neighbor expansion order (decides between equal-cost paths)
    #[serde(default)]
    pub neighbor_order: NeighborOrder,

    /// Algorithm used when none is given on the command line
    #[serde(default)]
    pub default_algorithm: Algorithm,

    /// Map file to load instead of the built-in campus map
    #[serde(default)]
    pub map: Option<PathBuf>,
}

fn default_unit() -> String {
    "km".to_string()
}

fn default_precision() -> usize {
    3
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            unit: default_unit(),
            precision: default_precision(),
            neighbor_order: NeighborOrder::default(),
            default_algorithm: Algorithm::default(),
            map: None,
        }
    }
}
