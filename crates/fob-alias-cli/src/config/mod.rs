//! Configuration system for fob-alias with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment > File > Defaults

mod defaults;
mod loading;
mod validation;

use fob_alias::{AliasDefinition, AliasMap};
use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::ProjectArgs;
use crate::error::{CliError, Result, ResultExt};

pub use defaults::*;

/// Raw settings as read from fob-alias.config.json, `FOB_ALIAS_*` variables
/// and the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasConfig {
    /// Alias definitions as `NAME=DIR`, highest precedence first
    #[serde(default)]
    pub aliases: Vec<String>,

    /// File extensions to scan, without the leading dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory names skipped during traversal
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Report changes without writing files
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            aliases: Vec::new(),
            extensions: default_extensions(),
            exclude: default_exclude(),
            dry_run: false,
        }
    }
}

impl AliasConfig {
    /// Parse the configured alias definitions, falling back to
    /// [`default_aliases`] when none are configured.
    pub fn alias_definitions(&self) -> Result<Vec<AliasDefinition>> {
        if self.aliases.is_empty() {
            return Ok(default_aliases());
        }

        self.aliases
            .iter()
            .map(|raw| raw.parse::<AliasDefinition>().map_err(CliError::from))
            .collect()
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Absolute, normalized project root
    pub root: PathBuf,
    pub aliases: AliasMap,
    pub extensions: Vec<String>,
    pub exclude: Vec<String>,
    pub dry_run: bool,
}

impl RunConfig {
    /// Resolve the project root, load every configuration layer and build the
    /// alias map.
    pub fn load(args: &ProjectArgs, dry_run: bool) -> Result<Self> {
        let root = resolve_root(args.project_root.as_deref())?;
        let config = AliasConfig::load(args, dry_run, &root)?;
        config.validate()?;
        Self::from_config(config, root)
    }

    /// Build a run configuration from already-merged settings.
    pub fn from_config(config: AliasConfig, root: PathBuf) -> Result<Self> {
        let definitions = config.alias_definitions()?;
        let aliases = AliasMap::from_entries(
            definitions
                .iter()
                .map(|def| (def.name.clone(), def.anchor(&root))),
        )
        .context("Failed to build alias map")?;

        Ok(Self {
            root,
            aliases,
            extensions: config
                .extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect(),
            exclude: config.exclude,
            dry_run: config.dry_run,
        })
    }
}

/// Make the project root absolute and normalized, defaulting to the current
/// directory.
pub fn resolve_root(project_root: Option<&Path>) -> Result<PathBuf> {
    let given = project_root.unwrap_or(Path::new("."));
    let root = std::path::absolute(given).with_path(given)?.clean();

    if !root.exists() {
        return Err(CliError::FileNotFound(root));
    }
    if !root.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Project root is not a directory: {}",
            root.display()
        )));
    }

    Ok(root)
}
