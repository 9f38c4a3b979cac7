//! Map command: every location with its adjacency list
use super::dispatch::CommandContext;
use campus_nav_core::error::Result;
use campus_nav_core::format::{adjacency_human, adjacency_json, adjacency_records, OutputFormat};

/// Execute the map command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let graph = ctx.load_graph()?;

    match ctx.cli.format {
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("Adjacency lists ({} locations):", graph.vertex_count());
            }
            print!("{}", adjacency_human(&graph, &ctx.config.unit));
        }
        OutputFormat::Json => println!("{}", adjacency_json(&graph)?),
        OutputFormat::Records => print!("{}", adjacency_records(&graph)),
    }

    Ok(())
}
