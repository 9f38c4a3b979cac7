//! Locations command: valid location names
use super::dispatch::CommandContext;
use campus_nav_core::campus::LOCATION_GROUPS;
use campus_nav_core::error::Result;
use campus_nav_core::format::OutputFormat;
use campus_nav_core::graph::Graph;
use serde::Serialize;

/// A named group of locations
#[derive(Debug, Serialize, PartialEq)]
pub struct LocationGroup<'a> {
    pub name: &'a str,
    pub locations: Vec<&'a str>,
}

/// Campus groups for the built-in map; one sorted `Locations` group otherwise
pub fn location_groups(graph: &Graph, campus: bool) -> Vec<LocationGroup<'_>> {
    if campus {
        return LOCATION_GROUPS
            .iter()
            .map(|&(name, locations)| LocationGroup {
                name,
                locations: locations.to_vec(),
            })
            .collect();
    }

    let mut locations: Vec<&str> = graph.vertices().collect();
    locations.sort_unstable();
    vec![LocationGroup {
        name: "Locations",
        locations,
    }]
}

/// `Group: a, b, c` per line
pub fn locations_human(groups: &[LocationGroup<'_>]) -> String {
    groups
        .iter()
        .map(|g| format!("{}: {}\n", g.name, g.locations.join(", ")))
        .collect()
}

/// Execute the locations command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let graph = ctx.load_graph()?;
    let groups = location_groups(&graph, ctx.uses_campus_map());

    match ctx.cli.format {
        OutputFormat::Human => print!("{}", locations_human(&groups)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "groups": groups }))?
        ),
        OutputFormat::Records => {
            for group in &groups {
                for location in &group.locations {
                    println!("L {} {}", group.name, location);
                }
            }
        }
    }

    Ok(())
}
