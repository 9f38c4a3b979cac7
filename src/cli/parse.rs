use campus_nav_core::format::OutputFormat;
use campus_nav_core::graph::{Algorithm, NeighborOrder};

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse path-finding algorithm from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>()
}

/// Parse neighbor order from string
pub fn parse_neighbor_order(s: &str) -> std::result::Result<NeighborOrder, String> {
    s.parse::<NeighborOrder>()
}
