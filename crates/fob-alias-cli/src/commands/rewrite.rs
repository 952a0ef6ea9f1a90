//! Rewrite command implementation.

use tracing::info;

use crate::cli::RewriteArgs;
use crate::commands::run::{self, Mode};
use crate::config::RunConfig;
use crate::error::Result;
use crate::ui;

/// Execute the rewrite command.
///
/// # Steps
///
/// 1. Resolve the project root and load configuration
/// 2. Walk candidate files and rewrite relative imports
/// 3. Print the summary
pub fn execute(args: RewriteArgs) -> Result<()> {
    let config = RunConfig::load(&args.project, args.dry_run)?;
    let mode = if config.dry_run { Mode::DryRun } else { Mode::Write };

    print_banner(&config);
    info!(root = %config.root.display(), aliases = config.aliases.len(), "starting rewrite");

    let summary = run::run(&config, mode)?;

    ui::print_summary(
        summary.scanned,
        summary.changed.len(),
        summary.elapsed,
        config.dry_run,
    );
    if summary.skipped > 0 {
        ui::warning(&format!("{} entries skipped", summary.skipped));
    }
    ui::success("Done.");

    Ok(())
}

/// Print the root, the aliases in precedence order, and the dry-run notice.
pub(crate) fn print_banner(config: &RunConfig) {
    ui::info(&format!("Project root: {}", config.root.display()));
    ui::info(&format!("Aliases: {}", config.aliases));
    if config.dry_run {
        ui::info("Dry run: no files will be written");
    }
}
