use std::collections::HashSet;

use fob_alias::AliasDefinition;

use crate::config::AliasConfig;
use crate::error::{ConfigError, Result};

impl AliasConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "extensions".to_string(),
                value: "[]".to_string(),
                hint: "List at least one file extension, e.g. [\"ts\", \"tsx\"]".to_string(),
            }
            .into());
        }

        for ext in &self.extensions {
            validate_extension(ext)?;
        }

        let mut seen = HashSet::new();
        for raw in &self.aliases {
            let definition =
                raw.parse::<AliasDefinition>().map_err(|e| ConfigError::InvalidValue {
                    field: "aliases".to_string(),
                    value: raw.clone(),
                    hint: e.to_string(),
                })?;

            if !seen.insert(definition.name.clone()) {
                return Err(ConfigError::InvalidValue {
                    field: "aliases".to_string(),
                    value: raw.clone(),
                    hint: format!("Alias '{}' is defined more than once", definition.name),
                }
                .into());
            }
        }

        Ok(())
    }
}

/// Validate a single extension as written in the config.
pub fn validate_extension(ext: &str) -> Result<()> {
    let bare = ext.trim_start_matches('.');

    if bare.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "extensions".to_string(),
            value: ext.to_string(),
            hint: "Extensions cannot be empty".to_string(),
        }
        .into());
    }

    if bare.contains(['/', '\\']) {
        return Err(ConfigError::InvalidValue {
            field: "extensions".to_string(),
            value: ext.to_string(),
            hint: "Use a bare extension such as \"ts\", not a path".to_string(),
        }
        .into());
    }

    Ok(())
}
