//! Command implementations for the fob-alias CLI.
//!
//! - [`rewrite`] - Rewrite relative imports in place, or preview with `--dry-run`
//! - [`check`] - Report pending rewrites and fail when there are any
//!
//! Both commands share the traversal in [`run`].

pub mod check;
pub mod rewrite;
pub mod run;

pub use check::execute as check_execute;
pub use rewrite::execute as rewrite_execute;
