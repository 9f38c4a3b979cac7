//! Interactive menu session
//!
//! Reads choices and location names line by line. Malformed input is
//! answered with a hint and the menu is shown again; EOF ends the session.

use std::io::{self, BufRead, Write};

use super::dispatch::CommandContext;
use super::locations::{location_groups, locations_human, LocationGroup};
use campus_nav_core::error::{NavError, Result};
use campus_nav_core::format::{adjacency_human, route_human};
use campus_nav_core::graph::{find_path, Algorithm, Graph, SearchOptions};

const MENU: &str = "\
================ MAIN MENU ================
1. Display map (adjacency lists)
2. Find shortest path (by hops - BFS)
3. Find shortest route (by distance - Dijkstra)
4. List all valid location names
5. Exit
===========================================
";

/// Menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    ShowMap,
    Route(Algorithm),
    ListLocations,
    Exit,
}

impl Choice {
    fn parse(input: &str) -> std::result::Result<Choice, &'static str> {
        let number: u32 = input
            .parse()
            .map_err(|_| "Invalid input. Please enter a number between 1 and 5.")?;
        match number {
            1 => Ok(Choice::ShowMap),
            2 => Ok(Choice::Route(Algorithm::Hops)),
            3 => Ok(Choice::Route(Algorithm::Distance)),
            4 => Ok(Choice::ListLocations),
            5 => Ok(Choice::Exit),
            _ => Err("Invalid option. Please choose between 1 and 5."),
        }
    }
}

pub struct Menu<'a> {
    pub graph: &'a Graph,
    pub opts: SearchOptions,
    pub precision: usize,
    pub unit: &'a str,
    pub groups: Vec<LocationGroup<'a>>,
    pub show_banner: bool,
}

/// Next trimmed line, or `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;
    read_line(input)
}

impl Menu<'_> {
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<()> {
        if self.show_banner {
            writeln!(out, "campus-nav {}", env!("CARGO_PKG_VERSION"))?;
            writeln!(
                out,
                "Find routes by fewest turns (BFS) or shortest distance (Dijkstra).\n"
            )?;
        }

        loop {
            write!(out, "\n{}", MENU)?;
            let Some(line) = prompt(input, out, "Enter your choice (1-5): ")? else {
                break;
            };

            let choice = match Choice::parse(&line) {
                Ok(choice) => choice,
                Err(message) => {
                    writeln!(out, "{}", message)?;
                    continue;
                }
            };
            tracing::debug!(?choice, "menu_choice");

            match choice {
                Choice::ShowMap => {
                    writeln!(out, "\nAdjacency lists:")?;
                    write!(out, "{}", adjacency_human(self.graph, self.unit))?;
                }
                Choice::Route(algorithm) => {
                    if !self.route(input, out, algorithm)? {
                        break;
                    }
                }
                Choice::ListLocations => {
                    writeln!(out, "\nValid locations:")?;
                    write!(out, "{}", locations_human(&self.groups))?;
                }
                Choice::Exit => {
                    writeln!(out, "\nGoodbye!")?;
                    break;
                }
            }
        }

        Ok(())
    }

    /// Ask for two locations and print the route. Returns false at EOF.
    fn route<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
        algorithm: Algorithm,
    ) -> Result<bool> {
        let Some(from) = prompt(input, out, "\nEnter source location: ")? else {
            return Ok(false);
        };
        let Some(to) = prompt(input, out, "Enter destination location: ")? else {
            return Ok(false);
        };

        match find_path(self.graph, &from, &to, algorithm, &self.opts) {
            Ok(route) => {
                let heading = match algorithm {
                    Algorithm::Hops => "Shortest path (fewest turns):",
                    Algorithm::Distance => "Shortest route by distance:",
                };
                writeln!(out, "\n{}", heading)?;
                write!(out, "{}", route_human(&route, self.precision, self.unit))?;
            }
            Err(NavError::VertexNotFound { name }) => {
                writeln!(
                    out,
                    "\nUnknown location '{}'. Use option 4 to view valid names.",
                    name
                )?;
            }
            Err(NavError::NoPathFound { from, to }) => {
                writeln!(out, "\nNo route found from {} to {} ({}).", from, to, algorithm)?;
            }
            Err(other) => return Err(other),
        }

        Ok(true)
    }
}

/// Execute the interactive session on stdin/stdout
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let graph = ctx.load_graph()?;
    let menu = Menu {
        graph: &graph,
        opts: ctx.search_options(),
        precision: ctx.config.precision,
        unit: &ctx.config.unit,
        groups: location_groups(&graph, ctx.uses_campus_map()),
        show_banner: !ctx.cli.quiet,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu.run(&mut stdin.lock(), &mut stdout.lock())
}
