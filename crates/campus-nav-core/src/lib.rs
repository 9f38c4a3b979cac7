//! campus-nav Core Library
//!
//! Location graph, fewest-hop and shortest-distance path finding, and the
//! configuration and output plumbing shared with the CLI.

pub mod campus;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod map;
