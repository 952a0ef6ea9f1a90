//! Command-line interface definition for fob-alias.
//!
//! # Command Structure
//!
//! - `fob-alias rewrite` - Rewrite relative imports in place (or preview with `--dry-run`)
//! - `fob-alias check` - Fail when any file still has a rewritable relative import

mod commands;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, ProjectArgs, RewriteArgs};
pub use validation::{parse_alias, parse_extension};

/// fob-alias - rewrite relative imports into path aliases
#[derive(Parser, Debug)]
#[command(
    name = "fob-alias",
    version,
    about = "Rewrite relative imports into path aliases",
    long_about = "fob-alias walks a JavaScript/TypeScript project and replaces relative import\n\
                  specifiers such as '../utils/fmt' with alias specifiers such as '@/utils/fmt',\n\
                  using an ordered list of NAME=DIR alias definitions."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows every individual specifier substitution.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
