//! Check command implementation.
//!
//! Reports files that still contain relative imports an alias could replace,
//! without writing anything.

use crate::cli::CheckArgs;
use crate::commands::rewrite::print_banner;
use crate::commands::run::{self, Mode};
use crate::config::RunConfig;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the check command.
///
/// # Errors
///
/// Returns [`CliError::PendingRewrites`] when at least one file would change.
pub fn execute(args: CheckArgs) -> Result<()> {
    // `check` never writes, whatever the config says about dry runs.
    let mut config = RunConfig::load(&args.project, false)?;
    config.dry_run = false;

    print_banner(&config);

    let summary = run::run(&config, Mode::Check)?;
    ui::print_summary(summary.scanned, summary.changed.len(), summary.elapsed, true);

    if summary.changed.is_empty() {
        ui::success("All imports already use aliases where possible.");
        Ok(())
    } else {
        Err(CliError::PendingRewrites(summary.changed.len()))
    }
}
