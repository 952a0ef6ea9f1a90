use clap::{Args, Subcommand};
use fob_alias::AliasDefinition;
use std::path::PathBuf;

use crate::cli::validation::{parse_alias, parse_extension};

/// Available fob-alias subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rewrite relative imports into alias imports
    ///
    /// Walks the project root, rewrites every matching file in place and
    /// reports the files that changed.
    Rewrite(RewriteArgs),

    /// Report files that still use rewritable relative imports
    ///
    /// Never writes. Exits with an error when at least one file would
    /// change, which makes it suitable for CI.
    Check(CheckArgs),
}

/// Options shared by every command that walks a project
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project root to scan (defaults to the current directory)
    ///
    /// Relative alias directories are resolved against this directory.
    #[arg(
        short = 'r',
        long,
        visible_alias = "projectRoot",
        value_name = "DIR"
    )]
    pub project_root: Option<PathBuf>,

    /// Alias definition, repeatable; earlier definitions take precedence
    ///
    /// Examples:
    ///   fob-alias rewrite -a @=src -a ~types=src/types
    #[arg(short = 'a', long = "alias", value_name = "NAME=DIR", value_parser = parse_alias)]
    pub aliases: Vec<AliasDefinition>,

    /// File extension to scan, repeatable (default: ts, tsx, js, jsx)
    #[arg(short = 'e', long = "ext", value_name = "EXT", value_parser = parse_extension)]
    pub extensions: Vec<String>,

    /// Directory name to skip while walking, repeatable (default: node_modules, .git)
    #[arg(long, value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Path to a config file (defaults to <root>/fob-alias.config.json when present)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the rewrite command
#[derive(Args, Debug)]
pub struct RewriteArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Report files that would change without writing them
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}
