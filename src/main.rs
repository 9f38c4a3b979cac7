//! campus-nav - route finder over a campus location graph
//!
//! Answers fewest-hop (BFS) and shortest-distance (Dijkstra) queries
//! between named locations, from the command line or an interactive menu.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use campus_nav_core::error::{ExitCode as NavExitCode, NavError};
use campus_nav_core::format::OutputFormat;
use campus_nav_core::logging;
use cli::Cli;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap may fail before `Cli.format` is available; honour a JSON
            // request seen in argv with a structured error envelope.
            if argv_format_json {
                let nav_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument
                    | clap::error::ErrorKind::ArgumentConflict => {
                        NavError::UsageError(err.to_string())
                    }
                    _ => NavError::Other(err.to_string()),
                };

                eprintln!("{}", nav_error.to_json());
                return ExitCode::from(nav_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = commands::dispatch::run(&cli, start);

    match result {
        Ok(()) => ExitCode::from(NavExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    args_request_json(env::args().skip(1))
}

/// True if `--format json` (any case) appears among `args`
fn args_request_json(args: impl IntoIterator<Item = String>) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v.eq_ignore_ascii_case("json")) {
                return true;
            }
        } else if arg
            .strip_prefix("--format=")
            .is_some_and(|v| v.eq_ignore_ascii_case("json"))
        {
            return true;
        }
    }
    false
}
