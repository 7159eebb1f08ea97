//! Infrastructure errors. Rule outcomes are findings, never errors.

use std::io;

#[derive(Debug, thiserror::Error)]
/// Problems loading, validating, or writing `pagelint` configuration.
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("invalid TOML in {path}: {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },

    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: String,
        source: serde_yaml::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write {path}: {source}")]
    Write { path: String, source: io::Error },

    #[error("{path} already exists (pass --force to overwrite)")]
    AlreadyExists { path: String },

    #[error("unknown rule id '{0}' (run `pagelint rules` for the list)")]
    UnknownRule(String),

    #[error("unsupported output mode '{0}' (expected human|json)")]
    UnknownOutput(String),
}

#[derive(Debug, thiserror::Error)]
/// Problems turning CLI arguments or configured patterns into files.
pub enum TargetError {
    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },
}
