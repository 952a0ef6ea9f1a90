//! fob-alias CLI - batch rewrite of relative imports into path aliases.
//!
//! This crate is the driver around the pure `fob-alias` core: it parses
//! arguments, layers configuration, walks the project tree, reads and writes
//! files, and reports what changed.
//!
//! # Architecture
//!
//! - [`cli`] - clap definitions for `fob-alias rewrite` and `fob-alias check`
//! - [`config`] - figment-based configuration (file, environment, CLI)
//! - [`walk`] - lazy traversal of candidate source files
//! - [`commands`] - command implementations
//! - [`error`] - error types with actionable messages
//! - [`logger`] - structured logging with tracing
//! - [`ui`] - status messages and run summaries
//!
//! # Example
//!
//! ```rust,no_run
//! use fob_alias_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     // command implementations...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;
pub mod walk;

pub use error::{CliError, ConfigError, Result, ResultExt};
