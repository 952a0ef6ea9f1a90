use fob_alias::AliasDefinition;

/// Config file looked up in the project root when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "fob-alias.config.json";

/// Prefix for environment variable overrides (`FOB_ALIAS_DRY_RUN`, ...).
pub const ENV_PREFIX: &str = "FOB_ALIAS_";

pub fn default_extensions() -> Vec<String> {
    ["ts", "tsx", "js", "jsx"].map(String::from).to_vec()
}

pub fn default_exclude() -> Vec<String> {
    ["node_modules", ".git"].map(String::from).to_vec()
}

/// Aliases used when nothing is configured: `@` for `src`, then `~types`.
pub fn default_aliases() -> Vec<AliasDefinition> {
    vec![
        AliasDefinition::new("@", "src"),
        AliasDefinition::new("~types", "src/types"),
    ]
}
