//! Logging infrastructure for the fob-alias CLI.
//!
//! Structured logging through the `tracing` ecosystem. Status lines meant for
//! the user go through [`crate::ui`]; tracing carries diagnostics such as the
//! individual specifier substitutions shown with `--verbose`.
//!
//! # Example
//!
//! ```rust,no_run
//! use fob_alias_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Starting rewrite");
//! debug!("Scanning file: {}", "src/index.ts");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used with `--verbose`.
pub const VERBOSE_FILTER: &str = "fob_alias=debug,fob_alias_cli=debug";

/// Filter used with `--quiet`.
pub const QUIET_FILTER: &str = "fob_alias=error,fob_alias_cli=error";

/// Filter used when neither flag nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "fob_alias=info,fob_alias_cli=info";

/// Initialize the tracing subscriber with the specified options.
///
/// Must be called once at the start of the program, before any logging.
///
/// # Verbosity Levels
///
/// 1. `--verbose`: DEBUG for fob-alias crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for fob-alias crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(select_filter(verbose, quiet), no_color);
}

/// Initialize logger with a custom environment filter.
///
/// ```rust,no_run
/// use fob_alias_cli::logger::init_logger_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// init_logger_with_filter(EnvFilter::new("fob_alias=trace"), true);
/// ```
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A second initialization (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn select_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
