//! fob-alias CLI - rewrite relative imports into path aliases.
//!
//! This is the main entry point. It handles command-line argument parsing,
//! logging initialization, and command dispatch.

use clap::Parser;
use fob_alias_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_output(args.quiet, args.no_color);

    let result = match args.command {
        cli::Command::Rewrite(rewrite_args) => commands::rewrite_execute(rewrite_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
