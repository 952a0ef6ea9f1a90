//! Error types for alias map construction.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AliasError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AliasError {
    #[error("alias name cannot be empty")]
    EmptyName,

    #[error("alias name '{0}' looks like a relative path")]
    RelativeName(String),

    #[error("alias '{0}' is defined more than once")]
    Duplicate(String),

    #[error("alias '{alias}' must point to an absolute directory (got {})", .target.display())]
    RelativeTarget { alias: String, target: PathBuf },

    #[error("invalid alias definition '{0}', expected NAME=DIR")]
    InvalidDefinition(String),
}
