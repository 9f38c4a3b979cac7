//! CLI argument parsing for campus-nav
//!
//! Supports global flags: --config, --map, --format, --neighbor-order,
//! --quiet, --verbose, --log-level, --log-json

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use campus_nav_core::format::OutputFormat;
use campus_nav_core::graph::{Algorithm, NeighborOrder};
use parse::{parse_algorithm, parse_format, parse_neighbor_order};

/// campus-nav - find routes between campus locations
#[derive(Parser, Debug)]
#[command(name = "campus-nav")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (default: ~/.config/campus-nav/config.toml)
    #[arg(long, global = true, env = "CAMPUS_NAV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Map file to load instead of the built-in campus map
    #[arg(long, global = true)]
    pub map: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Neighbor expansion order: recent-first, insertion, lexicographic
    #[arg(long, global = true, value_parser = parse_neighbor_order)]
    pub neighbor_order: Option<NeighborOrder>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `campus_nav_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display every location with its adjacent locations
    Map,

    /// Find the shortest route between two locations
    Path {
        /// Starting location
        from: String,

        /// Destination location
        to: String,

        /// Minimise `hops` (BFS) or `distance` (Dijkstra)
        #[arg(long, value_parser = parse_algorithm)]
        by: Option<Algorithm>,
    },

    /// List valid location names
    Locations,

    /// Menu-driven session on stdin (default when no command is given)
    Interactive,
}
