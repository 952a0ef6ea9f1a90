//! Terminal UI utilities for status messages and run summaries.
//!
//! Everything here writes to stderr. Output settings are decided once by
//! [`init_output`]: colors degrade to plain text when disabled, and status
//! lines are dropped entirely in quiet mode.
//!
//! # Examples
//!
//! ```no_run
//! use fob_alias_cli::ui;
//!
//! ui::init_output(false, false);
//!
//! ui::info("Scanning /project");
//! ui::success("Updated: src/pages/Home.tsx");
//! ```

mod format;
mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{format_duration, format_summary, print_summary};
pub use messages::{info, success, warning};

static COLORS_ENABLED: AtomicBool = AtomicBool::new(false);
static QUIET: AtomicBool = AtomicBool::new(false);

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    // NO_COLOR environment variable disables colors
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    // FORCE_COLOR enables colors even in non-TTY
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support from `--no-color` and the environment.
///
/// Should be called once in `main`, after argument parsing.
pub fn init_colors(no_color: bool) {
    COLORS_ENABLED.store(!no_color && should_use_color(), Ordering::Relaxed);
}

/// Whether status output is currently colored.
pub fn colors_enabled() -> bool {
    COLORS_ENABLED.load(Ordering::Relaxed)
}

/// Initialize output from `--quiet` and `--no-color`.
///
/// Should be called once in `main`, after argument parsing. Errors are
/// reported through miette and are not affected by `quiet`.
pub fn init_output(quiet: bool, no_color: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
    init_colors(no_color);
}

/// Whether status messages and summaries are suppressed.
pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}
