//! # fob-alias
//!
//! Rewrite relative JavaScript/TypeScript imports into path-alias form
//! (`../../src/utils` → `@/utils`).
//!
//! This crate is the pure core: no I/O, no global state. Callers hand in a
//! file path, the file's text and an [`AliasMap`], and get back a
//! [`RewriteResult`]. Directory traversal, configuration and persistence
//! live in `fob-alias-cli`.
//!
//! ## Architecture
//!
//! ```text
//!   source text ──► SpecifierScanner ──► SpecifierMatch*
//!                                            │ relative?
//!                                            ▼
//!   file dir + specifier ──► absolute path ──► resolve_alias(AliasMap)
//!                                                      │
//!                                                      ▼
//!                                    in-place substitution ──► RewriteResult
//! ```
//!
//! - [`AliasMap`]: ordered alias → directory table; first match wins.
//! - [`resolve_alias`]: absolute path → alias specifier.
//! - [`SpecifierScanner`] / [`RegexScanner`]: import extraction.
//! - [`ImportRewriter`] / [`rewrite`]: per-file rewriting.
//!
//! ## Quick Start
//!
//! ```rust
//! use fob_alias::{rewrite, AliasMap};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), fob_alias::AliasError> {
//! let aliases = AliasMap::from_entries([
//!     ("@", "/project/src"),
//!     ("~types", "/project/src/types"),
//! ])?;
//!
//! let source = r#"
//! import { Button } from "../components/Button";
//! const fmt = require("../utils/fmt");
//! import React from "react";
//! "#;
//!
//! let result = rewrite(Path::new("/project/src/pages/Home.tsx"), source, &aliases);
//! assert!(result.modified);
//! assert!(result.text.contains(r#"from "@/components/Button""#));
//! assert!(result.text.contains(r#"require("@/utils/fmt")"#));
//! assert!(result.text.contains(r#"from "react""#));
//!
//! // Rewriting is idempotent.
//! let again = rewrite(Path::new("/project/src/pages/Home.tsx"), &result.text, &aliases);
//! assert!(!again.modified);
//! # Ok(())
//! # }
//! ```

pub mod alias_map;
pub mod error;
pub mod resolver;
pub mod rewriter;
pub mod scanner;

#[cfg(test)]
mod tests;

pub use alias_map::{AliasDefinition, AliasMap};
pub use error::{AliasError, Result};
pub use resolver::resolve_alias;
pub use rewriter::{ImportRewriter, Rewrite, RewriteResult, is_relative_specifier, rewrite};
pub use scanner::{ImportKind, RegexScanner, SpecifierMatch, SpecifierScanner};
