//! Path command
use super::dispatch::CommandContext;
use campus_nav_core::error::Result;
use campus_nav_core::format::{route_human, route_json, route_records, OutputFormat};
use campus_nav_core::graph::{find_path, Algorithm};

/// Execute the path command
pub fn execute(ctx: &CommandContext, from: &str, to: &str, algorithm: Algorithm) -> Result<()> {
    let graph = ctx.load_graph()?;
    let opts = ctx.search_options();

    let route = find_path(&graph, from, to, algorithm, &opts)?;
    tracing::debug!(elapsed = ?ctx.start.elapsed(), steps = route.path().len(), "find_path");

    match ctx.cli.format {
        OutputFormat::Human => print!(
            "{}",
            route_human(&route, ctx.config.precision, &ctx.config.unit)
        ),
        OutputFormat::Json => println!("{}", route_json(&route)?),
        OutputFormat::Records => print!("{}", route_records(&route)),
    }

    Ok(())
}
