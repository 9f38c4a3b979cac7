//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::Cli;
use campus_nav_core::config::NavConfig;
use campus_nav_core::error::Result;
use campus_nav_core::graph::{Algorithm, Graph, SearchOptions};
use campus_nav_core::map::load_graph;
use campus_nav_core::trace_time;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: NavConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: NavConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Map file in effect: `--map` first, then the config file
    pub fn map_path(&self) -> Option<&Path> {
        self.cli.map.as_deref().or(self.config.map.as_deref())
    }

    /// True when the built-in campus map is in use
    pub fn uses_campus_map(&self) -> bool {
        self.map_path().is_none()
    }

    pub fn load_graph(&self) -> Result<Graph> {
        let started = Instant::now();
        let graph = load_graph(self.map_path())?;
        trace_time!(
            started,
            "load_graph",
            vertices = graph.vertex_count(),
            arcs = graph.arc_count()
        );
        Ok(graph)
    }

    /// `--neighbor-order` overrides the configured order
    pub fn search_options(&self) -> SearchOptions {
        let mut opts = self.config.search_options();
        if let Some(order) = self.cli.neighbor_order {
            opts.neighbor_order = order;
        }
        opts
    }

    pub fn algorithm(&self, requested: Option<Algorithm>) -> Algorithm {
        requested.unwrap_or(self.config.default_algorithm)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Run the interactive menu when no subcommand is provided
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        crate::commands::interactive::execute(ctx)
    }
}
