//! Command dispatch logic for campus-nav

use std::time::Instant;

use crate::cli::{Cli, Commands};
use campus_nav_core::config::NavConfig;
use campus_nav_core::error::Result;
use tracing::debug;

mod command;

pub use command::{Command, CommandContext, NoCommand};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Map => crate::commands::map::execute(ctx),
            Commands::Path { from, to, by } => {
                crate::commands::path::execute(ctx, from, to, ctx.algorithm(*by))
            }
            Commands::Locations => crate::commands::locations::execute(ctx),
            Commands::Interactive => crate::commands::interactive::execute(ctx),
        }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = NavConfig::resolve(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
