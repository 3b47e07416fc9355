//! Error types for the guild configuration resolver and watcher.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving, reading, or watching guild configuration.
///
/// The first four variants are the domain taxonomy. Resolver and accessor
/// code logs them and degrades to defaults; they rarely reach a caller.
#[derive(Debug, Error)]
pub enum GuildError {
    #[error("Input not found: {0}")]
    MissingInput(PathBuf),

    #[error("Malformed input {path}: {reason}")]
    MalformedInput { path: PathBuf, reason: String },

    #[error("Logo asset unavailable ({logo}): {reason}")]
    AssetUnavailable { logo: String, reason: String },

    #[error("Subprocess `{command}` failed: {reason}")]
    SubprocessFailure { command: String, reason: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Watch error: {0}")]
    Watch(String),
}

impl GuildError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GuildError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for GuildError {
    fn from(err: config::ConfigError) -> Self {
        GuildError::Config(err.to_string())
    }
}

impl From<notify::Error> for GuildError {
    fn from(err: notify::Error) -> Self {
        GuildError::Watch(err.to_string())
    }
}
