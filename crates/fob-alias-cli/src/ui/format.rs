//! Formatting utilities for durations and run summaries.

use console::Term;
use owo_colors::OwoColorize;
use std::time::Duration;

use super::{colors_enabled, is_quiet};

/// Format duration in human-readable format.
///
/// Converts to the most appropriate unit (ms, s, m:s).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use fob_alias_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    }
}

/// One-line summary of a run.
///
/// ```
/// use std::time::Duration;
/// use fob_alias_cli::ui::format_summary;
///
/// assert_eq!(
///     format_summary(12, 3, Duration::from_millis(40), false),
///     "3 of 12 files updated in 40ms"
/// );
/// ```
pub fn format_summary(scanned: usize, changed: usize, elapsed: Duration, dry_run: bool) -> String {
    let verb = if dry_run { "would change" } else { "updated" };
    let noun = if scanned == 1 { "file" } else { "files" };

    format!(
        "{} of {} {} {} in {}",
        changed,
        scanned,
        noun,
        verb,
        format_duration(elapsed)
    )
}

/// Print the run summary to stderr, framed by a rule as wide as the terminal
/// (capped at 80 columns). Nothing is printed in quiet mode.
pub fn print_summary(scanned: usize, changed: usize, elapsed: Duration, dry_run: bool) {
    if is_quiet() {
        return;
    }

    let width = Term::stderr().size().1 as usize;
    let rule = "─".repeat(width.clamp(20, 80));
    let line = format_summary(scanned, changed, elapsed, dry_run);

    if colors_enabled() {
        eprintln!("{}", rule.dimmed());
        eprintln!("  {} {}", "Summary:".bold(), line.green());
    } else {
        eprintln!("{}", rule);
        eprintln!("  Summary: {}", line);
    }
}
