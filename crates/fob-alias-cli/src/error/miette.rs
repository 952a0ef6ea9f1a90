//! Miette diagnostic conversion for CLI errors.

use crate::error::{CliError, ConfigError};
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::Alias(e) => miette::miette!(
            help = "Aliases are given as NAME=DIR, for example `--alias @=src`",
            "Invalid alias: {}",
            e
        ),
        CliError::PendingRewrites(count) => miette::miette!(
            help = "Run `fob-alias rewrite` to apply them",
            "{} file(s) contain relative imports that can use an alias",
            count
        ),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ConfigError to miette Report
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::InvalidValue { field, value, hint } => {
            miette::miette!(help = hint, "Invalid value for '{}': {}", field, value)
        }
        _ => miette::miette!("Configuration error: {}", err),
    }
}
