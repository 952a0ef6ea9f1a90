use crate::cli::ProjectArgs;
use crate::config::{AliasConfig, CONFIG_FILE_NAME, ENV_PREFIX};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Keys accepted from `FOB_ALIAS_*` environment variables.
const ENV_KEYS: &[&str] = &["aliases", "extensions", "exclude", "dry_run"];

/// Values that were actually given on the command line.
#[derive(Debug, Default, Serialize)]
struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    aliases: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extensions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclude: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dry_run: Option<bool>,
}

impl CliOverrides {
    fn from_args(args: &ProjectArgs, dry_run: bool) -> Self {
        let non_empty = |values: Vec<String>| (!values.is_empty()).then_some(values);

        Self {
            aliases: non_empty(args.aliases.iter().map(ToString::to_string).collect()),
            extensions: non_empty(args.extensions.clone()),
            exclude: non_empty(args.exclude.clone()),
            dry_run: dry_run.then_some(true),
        }
    }
}

impl AliasConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    pub fn load(args: &ProjectArgs, dry_run: bool, root: &Path) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = config_file(args.config.as_deref(), root)? {
            debug!("Loading config file: {}", path.display());
            figment = figment.merge(Json::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).only(ENV_KEYS));

        figment = figment.merge(Serialized::defaults(CliOverrides::from_args(args, dry_run)));

        figment.extract().map_err(|e| {
            ConfigError::InvalidValue {
                field: "configuration".to_string(),
                value: e.to_string(),
                hint: format!("Check {} syntax and field types", CONFIG_FILE_NAME),
            }
            .into()
        })
    }
}

/// An explicit `--config` must exist; the default file is optional.
fn config_file(explicit: Option<&Path>, root: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) if path.is_file() => Ok(Some(path.to_path_buf())),
        Some(path) => Err(ConfigError::NotFound(path.to_path_buf()).into()),
        None => {
            let default_path = root.join(CONFIG_FILE_NAME);
            Ok(default_path.is_file().then_some(default_path))
        }
    }
}
